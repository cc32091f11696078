// ============================================================================
// USE VISIBILITY TRIGGER HOOK - IntersectionObserver sobre un centinela
// ============================================================================
// Un observer por (nodo, enabled). El cleanup del efecto lo desconecta, así
// que nunca se acumulan observers sobre el mismo elemento.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Solo cuenta si el centinela está completamente visible
const FULLY_VISIBLE: f64 = 1.0;
/// Margen para el redondeo subpíxel del navegador
const RATIO_TOLERANCE: f64 = 0.01;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Llama a `on_visible` cada vez que el nodo entra por completo en el viewport
/// mientras `enabled` sea true.
#[hook]
pub fn use_visibility_trigger(node_ref: NodeRef, enabled: bool, on_visible: Callback<()>) {
    // El observer vive entre renders; siempre invoca el callback más reciente
    let latest = use_mut_ref(|| on_visible.clone());
    *latest.borrow_mut() = on_visible;

    use_effect_with((node_ref, enabled), move |(node_ref, enabled)| {
        let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;

        if *enabled {
            match node_ref.cast::<Element>() {
                Some(element) => active = observe(&element, latest),
                None => log::warn!("⚠️ Centinela no montado, no se observa la visibilidad"),
            }
        }

        move || {
            if let Some((observer, _callback)) = active {
                observer.disconnect();
            }
        }
    });
}

fn observe(
    element: &Element,
    latest: std::rc::Rc<std::cell::RefCell<Callback<()>>>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        let fully_visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| {
                entry.is_intersecting() && entry.intersection_ratio() >= FULLY_VISIBLE - RATIO_TOLERANCE
            });

        if fully_visible {
            let on_visible = latest.borrow().clone();
            on_visible.emit(());
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FULLY_VISIBLE));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            log::error!("❌ No se pudo crear IntersectionObserver: {:?}", e);
            None
        }
    }
}
