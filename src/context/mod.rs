pub mod toast;

pub use toast::{Severity, Toast, ToastHandle, ToastProvider, ToastQueue};
