use yew::prelude::*;

use crate::context::ToastHandle;

/// Canal de toasts del ToastProvider más cercano
#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_else(|| {
        log::warn!("⚠️ use_toast sin ToastProvider, los errores solo irán al log");
        ToastHandle::detached()
    })
}
