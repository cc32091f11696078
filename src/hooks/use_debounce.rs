// ============================================================================
// USE DEBOUNCE HOOK
// ============================================================================
// Devuelve `value` solo después de `delay_ms` sin cambios. Cada cambio
// reinicia el Timeout; al desmontar se cancela.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[hook]
pub fn use_debounce<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());
    let timeout_handle = use_mut_ref(|| None::<Timeout>);

    {
        let debounced = debounced.clone();
        let timeout_handle = timeout_handle.clone();

        use_effect_with(value, move |value| {
            // Soltar el Timeout anterior lo cancela
            *timeout_handle.borrow_mut() = None;

            if *debounced != *value {
                let value = value.clone();
                let debounced = debounced.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    debounced.set(value);
                });
                *timeout_handle.borrow_mut() = Some(timeout);
            }

            move || {
                *timeout_handle.borrow_mut() = None;
            }
        });
    }

    (*debounced).clone()
}
