use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use super::invoice::{Invoice, InvoiceStatus};
use crate::utils::format::{format_br_date, parse_br_date};

/// How far ahead "due soon" looks, in days.
const DUE_SOON_DAYS: u64 = 3;

/// Aggregates shown on the dashboard: per-status totals plus urgency counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total: f64,
    pub pending: f64,
    pub paid: f64,
    pub overdue: f64,
    pub due_today: usize,
    pub due_soon: usize,
}

impl DashboardStats {
    /// Computes the aggregates for a given "today".
    ///
    /// The reference date is injected so callers and tests are not pinned to
    /// the wall clock. Unparseable due dates are ignored by the due-soon
    /// window; the exact due-today check stays a string comparison.
    pub fn compute(invoices: &[Invoice], today: NaiveDate) -> Self {
        let today_str = format_br_date(today);
        let window_end = today.checked_add_days(Days::new(DUE_SOON_DAYS));

        let mut stats = Self {
            total: invoices.iter().map(|inv| inv.amount).sum(),
            ..Self::default()
        };

        for inv in invoices {
            match inv.status {
                InvoiceStatus::Pending => stats.pending += inv.amount,
                InvoiceStatus::Paid => stats.paid += inv.amount,
                InvoiceStatus::Overdue => stats.overdue += inv.amount,
            }

            if inv.status != InvoiceStatus::Pending {
                continue;
            }
            if inv.due_date == today_str {
                stats.due_today += 1;
            }
            if let (Some(due), Some(end)) = (parse_br_date(&inv.due_date), window_end) {
                if due > today && due <= end {
                    stats.due_soon += 1;
                }
            }
        }

        stats
    }

    /// Count of invoices with the given status.
    pub fn count_with_status(invoices: &[Invoice], status: InvoiceStatus) -> usize {
        invoices.iter().filter(|inv| inv.status == status).count()
    }
}

/// Pending invoices that fall due exactly on `today`, for the banner card.
pub fn due_today(invoices: &[Invoice], today: NaiveDate) -> Vec<Invoice> {
    let today_str = format_br_date(today);
    invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Pending && inv.due_date == today_str)
        .cloned()
        .collect()
}

/// Sum of all invoice amounts.
pub fn total_amount(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|inv| inv.amount).sum()
}

/// Mean invoice amount, or 0.0 for an empty set.
pub fn average_amount(invoices: &[Invoice]) -> f64 {
    if invoices.is_empty() {
        return 0.0;
    }
    total_amount(invoices) / invoices.len() as f64
}

/// Groups amounts by due month, chronologically ordered `MM/YYYY` labels.
///
/// Invoices with malformed due dates are dropped from the series.
pub fn monthly_totals(invoices: &[Invoice]) -> (Vec<String>, Vec<f64>) {
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for inv in invoices {
        if let Some(due) = parse_br_date(&inv.due_date) {
            use chrono::Datelike;
            *by_month.entry((due.year(), due.month())).or_default() += inv.amount;
        }
    }

    let labels = by_month
        .keys()
        .map(|(year, month)| format!("{month:02}/{year}"))
        .collect();
    let values = by_month.values().copied().collect();
    (labels, values)
}

/// Amount per status, in display order, for the distribution chart.
pub fn status_totals(invoices: &[Invoice]) -> Vec<(f64, String)> {
    InvoiceStatus::all()
        .iter()
        .map(|status| {
            let sum = invoices
                .iter()
                .filter(|inv| inv.status == *status)
                .map(|inv| inv.amount)
                .sum();
            (sum, status.label().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock::mock_invoices;

    #[test]
    fn test_status_sums() {
        let invoices = mock_invoices();
        let today = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let stats = DashboardStats::compute(&invoices, today);

        assert!((stats.pending - (119.9 + 1250.0 + 789.9 + 99.9)).abs() < 1e-9);
        assert!((stats.overdue - (450.0 + 189.9)).abs() < 1e-9);
        assert!((stats.total - total_amount(&invoices)).abs() < 1e-9);
    }

    #[test]
    fn test_due_today_and_soon_windows() {
        let invoices = mock_invoices();

        // inv-003 and inv-007 are pending and due on 10/06/2023.
        let today = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        let stats = DashboardStats::compute(&invoices, today);
        assert_eq!(stats.due_today, 2);
        assert_eq!(due_today(&invoices, today).len(), 2);

        // From 08/06 the same two fall inside the three-day window instead.
        let earlier = NaiveDate::from_ymd_opt(2023, 6, 8).unwrap();
        let stats = DashboardStats::compute(&invoices, earlier);
        assert_eq!(stats.due_today, 0);
        assert_eq!(stats.due_soon, 2);
    }

    #[test]
    fn test_monthly_grouping_is_chronological() {
        let invoices = mock_invoices();
        let (labels, values) = monthly_totals(&invoices);

        assert_eq!(labels, vec!["05/2023".to_string(), "06/2023".to_string()]);
        assert_eq!(values.len(), 2);
        // May: inv-001, inv-002, inv-008, inv-009, inv-010.
        assert!((values[0] - (187.45 + 98.32 + 2456.78 + 213.45 + 189.9)).abs() < 1e-9);
    }

    #[test]
    fn test_average_of_empty_set() {
        assert_eq!(average_amount(&[]), 0.0);
    }
}
