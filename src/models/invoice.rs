use serde::{Deserialize, Serialize};

use crate::utils::format::today_br;

/// Payment status of an invoice.
///
/// There is no automatic transition logic: a status only changes through an
/// explicit mark-as-paid action or because the record was seeded that way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    /// Returns the PT-BR label shown on badges and tabs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::Paid => "Pago",
            Self::Overdue => "Vencido",
        }
    }

    /// Returns the CSS modifier class used by cards and badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Paid => "status-paid",
            Self::Overdue => "status-overdue",
        }
    }

    /// All statuses, in display order.
    pub fn all() -> &'static [Self] {
        &[Self::Pending, Self::Paid, Self::Overdue]
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(()),
        }
    }
}

/// Payment instrument attached to an invoice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Boleto,
    Pix,
    CreditCard,
    Other,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Boleto => "Boleto",
            Self::Pix => "PIX",
            Self::CreditCard => "Cartão de Crédito",
            Self::Other => "Outro",
        }
    }

    /// Short label used on the compact cards.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::CreditCard => "Cartão",
            other => other.label(),
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Boleto, Self::Pix, Self::CreditCard, Self::Other]
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boleto" => Ok(Self::Boleto),
            "pix" => Ok(Self::Pix),
            "credit_card" => Ok(Self::CreditCard),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// A billable obligation: creditor, amount, due date, status, payment method.
///
/// Due dates and creation dates are `DD/MM/YYYY` strings. The exact-date
/// filter compares them as strings; only the dashboard statistics parse them
/// into calendar dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub creditor: String,
    pub description: String,
    pub amount: f64,
    pub due_date: String,
    pub status: InvoiceStatus,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix_code: Option<String>,
    pub created_at: String,
}

impl Invoice {
    /// Case-insensitive free-text match against creditor and description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.creditor.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

/// An invoice-shaped partial record, produced by the manual form and by every
/// simulated capture flow before it is promoted into the working set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceDraft {
    pub creditor: String,
    pub description: String,
    pub amount: f64,
    pub due_date: String,
    pub payment_method: PaymentMethod,
    pub barcode: Option<String>,
    pub pix_code: Option<String>,
}

impl InvoiceDraft {
    /// Promotes the draft into a pending invoice created today.
    pub fn into_invoice(self, id: String) -> Invoice {
        Invoice {
            id,
            creditor: self.creditor,
            description: self.description,
            amount: self.amount,
            due_date: self.due_date,
            status: InvoiceStatus::Pending,
            payment_method: self.payment_method,
            barcode: self.barcode,
            pix_code: self.pix_code,
            created_at: today_br(),
        }
    }

    /// Required fields for a manual save: creditor, amount and due date.
    pub fn is_complete(&self) -> bool {
        !self.creditor.is_empty() && self.amount > 0.0 && !self.due_date.is_empty()
    }
}

/// Marks the matching invoice as paid. Only that record's status changes;
/// every other field and every other invoice is cloned untouched.
pub fn mark_paid(invoices: &[Invoice], id: &str) -> Vec<Invoice> {
    invoices
        .iter()
        .map(|inv| {
            if inv.id == id {
                let mut inv = inv.clone();
                inv.status = InvoiceStatus::Paid;
                inv
            } else {
                inv.clone()
            }
        })
        .collect()
}

/// Removes the invoice with the given id. An unknown id is a no-op.
pub fn remove_invoice(invoices: &[Invoice], id: &str) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|inv| inv.id != id)
        .cloned()
        .collect()
}

/// Generates the next sequential `inv-NNN` id for the working set.
pub fn next_invoice_id(invoices: &[Invoice]) -> String {
    let max = invoices
        .iter()
        .filter_map(|inv| inv.id.strip_prefix("inv-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("inv-{:03}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!("PENDING".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Pending));
        assert!("unknown".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            "credit_card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert!("cartao".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_query_match_is_case_insensitive() {
        let invoice = Invoice {
            id: "inv-001".to_string(),
            creditor: "Enel Energia".to_string(),
            description: "Conta de energia - Maio/2023".to_string(),
            amount: 187.45,
            due_date: "15/05/2023".to_string(),
            status: InvoiceStatus::Paid,
            payment_method: PaymentMethod::Boleto,
            barcode: None,
            pix_code: None,
            created_at: "01/05/2023".to_string(),
        };

        assert!(invoice.matches_query("ENEL"));
        assert!(invoice.matches_query("energia"));
        assert!(!invoice.matches_query("sabesp"));
    }

    #[test]
    fn test_next_id_skips_foreign_ids() {
        let mut invoices = vec![];
        assert_eq!(next_invoice_id(&invoices), "inv-001");

        let draft = InvoiceDraft {
            creditor: "Claro".to_string(),
            amount: 119.9,
            due_date: "10/06/2023".to_string(),
            ..InvoiceDraft::default()
        };
        invoices.push(draft.clone().into_invoice("inv-010".to_string()));
        // Imported records may carry ids outside the inv-NNN scheme.
        invoices.push(draft.into_invoice("gmail-1".to_string()));
        assert_eq!(next_invoice_id(&invoices), "inv-011");
    }
}
