// ============================================================================
// TOAST STACK - Render de notificaciones con autodescarte
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::context::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Autodescarte: el Timeout se cancela si el toast se desmonta antes
    {
        let id = props.toast.id;
        let duration_ms = props.toast.duration_ms;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={props.toast.severity.to_class()}>
            <span class="toast-message">{props.toast.message.clone()}</span>
            <button class="toast-close" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
