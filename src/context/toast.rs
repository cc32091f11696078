// ============================================================================
// TOAST CONTEXT - Notificaciones transitorias
// ============================================================================
// Provider + cola con use_reducer. Cada toast se autodescarta con su propio
// Timeout (ver components::toast_stack).
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::components::ToastStack;
use crate::config::CONFIG;

/// Máximo de toasts visibles a la vez; los más antiguos se descartan
const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn to_class(&self) -> &'static str {
        match self {
            Severity::Info => "toast info",
            Severity::Success => "toast success",
            Severity::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

pub enum ToastAction {
    Push {
        message: String,
        severity: Severity,
        duration_ms: u32,
    },
    Dismiss(u64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, severity: Severity, duration_ms: u32) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message,
            severity,
            duration_ms,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                message,
                severity,
                duration_ms,
            } => {
                next.push(message, severity, duration_ms);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// Canal de notificaciones compartido por contexto.
/// Sin provider solo deja el mensaje en el log.
#[derive(Clone)]
pub struct ToastHandle {
    dispatcher: Option<UseReducerDispatcher<ToastQueue>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher.is_some() == other.dispatcher.is_some()
    }
}

impl ToastHandle {
    pub fn new(dispatcher: UseReducerDispatcher<ToastQueue>) -> Self {
        Self {
            dispatcher: Some(dispatcher),
        }
    }

    pub fn detached() -> Self {
        Self { dispatcher: None }
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity, duration_ms: u32) {
        let message = message.into();
        match severity {
            Severity::Error => log::error!("❌ {}", message),
            _ => log::info!("🔔 {}", message),
        }

        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(ToastAction::Push {
                message,
                severity,
                duration_ms,
            });
        }
    }

    /// Error con la duración por defecto (3 s)
    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error, CONFIG.toast_duration_ms);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle::new(queue.dispatcher());

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <ToastStack toasts={queue.toasts.clone()} on_dismiss={on_dismiss} />
        </ContextProvider<ToastHandle>>
    }
}
