pub mod error;
pub mod filter;
pub mod invoice;
pub mod mock;
pub mod notification;
pub mod stats;

pub use filter::{DatePreset, FilterCriteria, StatusTab, filter_invoices};
pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus, PaymentMethod};
pub use mock::mock_invoices;
