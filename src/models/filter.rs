use chrono::{Days, NaiveDate};

use super::invoice::{Invoice, InvoiceStatus};
use crate::utils::format::format_br_date;

/// Status tab selected in the invoice panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Pending,
    Paid,
    Overdue,
}

impl StatusTab {
    /// Returns the status this tab narrows to, if any.
    pub fn status(self) -> Option<InvoiceStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(InvoiceStatus::Pending),
            Self::Paid => Some(InvoiceStatus::Paid),
            Self::Overdue => Some(InvoiceStatus::Overdue),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas",
            Self::Pending => "Pendentes",
            Self::Paid => "Pagas",
            Self::Overdue => "Vencidas",
        }
    }

    /// All tabs, in display order.
    pub fn all() -> &'static [Self] {
        &[Self::All, Self::Pending, Self::Paid, Self::Overdue]
    }
}

impl std::str::FromStr for StatusTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(()),
        }
    }
}

/// Due-date preset carried by the `filter` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Upcoming,
}

impl DatePreset {
    /// Resolves the preset into the exact due-date string it pre-fills.
    ///
    /// `Upcoming` points at the end of the due-soon window (three days out).
    pub fn due_date(self, today: NaiveDate) -> String {
        match self {
            Self::Today => format_br_date(today),
            Self::Upcoming => {
                let ahead = today.checked_add_days(Days::new(3)).unwrap_or(today);
                format_br_date(ahead)
            }
        }
    }
}

impl std::str::FromStr for DatePreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            _ => Err(()),
        }
    }
}

/// Advanced filter criteria from the filter panel.
///
/// Empty strings and `None` fields are inactive predicates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub creditor: String,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub due_date: Option<String>,
    pub status: Option<InvoiceStatus>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.creditor.is_empty()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

/// Recomputes the visible subset of `invoices`.
///
/// Predicates are applied in sequence: tab status, free-text query, creditor
/// substring, minimum amount, maximum amount, exact due date, and finally the
/// criteria status. The criteria status is skipped when it matches the active
/// tab, so the same status is never filtered twice.
pub fn filter_invoices(
    invoices: &[Invoice],
    tab: StatusTab,
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<Invoice> {
    let query = query.trim();
    let creditor = criteria.creditor.trim().to_lowercase();

    invoices
        .iter()
        .filter(|inv| tab.status().is_none_or(|s| inv.status == s))
        .filter(|inv| query.is_empty() || inv.matches_query(query))
        .filter(|inv| creditor.is_empty() || inv.creditor.to_lowercase().contains(&creditor))
        .filter(|inv| criteria.min_amount.is_none_or(|min| inv.amount >= min))
        .filter(|inv| criteria.max_amount.is_none_or(|max| inv.amount <= max))
        .filter(|inv| {
            criteria
                .due_date
                .as_ref()
                .is_none_or(|date| inv.due_date == *date)
        })
        .filter(|inv| match criteria.status {
            Some(status) if tab.status() != Some(status) => inv.status == status,
            _ => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock::mock_invoices;

    #[test]
    fn test_tab_parsing() {
        assert_eq!("overdue".parse::<StatusTab>(), Ok(StatusTab::Overdue));
        assert_eq!("All".parse::<StatusTab>(), Ok(StatusTab::All));
        assert!("archived".parse::<StatusTab>().is_err());
    }

    #[test]
    fn test_preset_due_dates() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert_eq!(DatePreset::Today.due_date(today), "10/06/2023");
        assert_eq!(DatePreset::Upcoming.due_date(today), "13/06/2023");
    }

    #[test]
    fn test_status_criteria_skipped_on_matching_tab() {
        let invoices = mock_invoices();
        let criteria = FilterCriteria {
            status: Some(InvoiceStatus::Pending),
            ..FilterCriteria::default()
        };

        // Same status on tab and criteria must behave like the tab alone.
        let doubled = filter_invoices(&invoices, StatusTab::Pending, "", &criteria);
        let tab_only = filter_invoices(&invoices, StatusTab::Pending, "", &FilterCriteria::default());
        assert_eq!(doubled, tab_only);
    }

    #[test]
    fn test_creditor_and_amount_combined() {
        let invoices = mock_invoices();
        let criteria = FilterCriteria {
            creditor: "escola".to_string(),
            min_amount: Some(1000.0),
            ..FilterCriteria::default()
        };

        let filtered = filter_invoices(&invoices, StatusTab::All, "", &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "inv-005");
    }
}
