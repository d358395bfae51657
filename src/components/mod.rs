pub mod add_invoice_form;
pub mod banner;
pub mod bottom_nav;
pub mod charts;
pub mod file_upload;
pub mod gmail_import;
pub mod header;
pub mod import_list;
pub mod invoice_filters;
pub mod invoice_grid;
pub mod invoice_list;
pub mod invoice_panel;
pub mod quick_actions;
pub mod scanner;
pub mod scanner_controller;
pub mod stats_carousel;
pub mod theme_toggle;
pub mod toast;
pub mod whatsapp_import;

pub use banner::WelcomeBanner;
pub use bottom_nav::BottomNavigation;
pub use header::DashboardHeader;
pub use invoice_panel::{InvoiceAction, InvoicePanel};
pub use theme_toggle::ThemeToggle;
