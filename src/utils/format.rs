use chrono::{Datelike, Local, NaiveDate, Timelike};

/// Formats a BRL amount as `R$ 1.234,56`.
///
/// Grouping and decimal separators follow the pt-BR convention; the value is
/// rounded to cents first so `0.005` edge cases do not drift.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, ch) in units.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Parses a `DD/MM/YYYY` string into a calendar date.
pub fn parse_br_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// Formats a calendar date as `DD/MM/YYYY`.
pub fn format_br_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Today's local date as `DD/MM/YYYY`.
pub fn today_br() -> String {
    format_br_date(Local::now().date_naive())
}

/// Greeting for the current local hour.
pub fn greeting() -> &'static str {
    greeting_for_hour(Local::now().hour())
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Bom dia",
        12..=17 => "Boa tarde",
        _ => "Boa noite",
    }
}

const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Long pt-BR date line for the banner, e.g. `sexta-feira, 10 de junho`.
///
/// chrono's locale support is feature-gated upstream, so the handful of names
/// needed here are mapped locally.
pub fn long_date_pt(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_PT[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_PT[date.month0() as usize];
    format!("{weekday}, {} de {month}", date.day())
}

/// Minimal shape check for an e-mail address: `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(98.32), "R$ 98,32");
        assert_eq!(format_currency(1250.0), "R$ 1.250,00");
        assert_eq!(format_currency(2456.78), "R$ 2.456,78");
        assert_eq!(format_currency(1234567.5), "R$ 1.234.567,50");
        assert_eq!(format_currency(-450.0), "-R$ 450,00");
    }

    #[test]
    fn test_br_date_round_trip() {
        let date = parse_br_date("05/06/2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 6, 5).unwrap());
        assert_eq!(format_br_date(date), "05/06/2023");

        assert!(parse_br_date("2023-06-05").is_none());
        assert!(parse_br_date("31/02/2023").is_none());
    }

    #[test]
    fn test_greeting_windows() {
        assert_eq!(greeting_for_hour(6), "Bom dia");
        assert_eq!(greeting_for_hour(11), "Bom dia");
        assert_eq!(greeting_for_hour(12), "Boa tarde");
        assert_eq!(greeting_for_hour(17), "Boa tarde");
        assert_eq!(greeting_for_hour(22), "Boa noite");
        assert_eq!(greeting_for_hour(3), "Boa noite");
    }

    #[test]
    fn test_long_date() {
        // 10/06/2023 was a Saturday.
        let date = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert_eq!(long_date_pt(date), "sábado, 10 de junho");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana.example.com"));
    }
}
