pub mod use_camera;
pub mod use_capture;
pub mod use_invoices;
pub mod use_theme;
pub mod use_toast;
pub mod use_view_mode;

pub use use_camera::{CameraState, use_camera};
pub use use_capture::{CaptureHandle, use_capture};
pub use use_invoices::{InvoicesHandle, use_invoices};
pub use use_toast::{ToastContext, ToastHandle, ToastState, use_toast};
pub use use_view_mode::{ViewMode, use_view_mode};
