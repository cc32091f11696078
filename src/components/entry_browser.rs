// ============================================================================
// ENTRY BROWSER - Lista paginada y buscable de claves de un datastore
// ============================================================================
// - Cambio de datastore: nueva sesión inmediata con prefijo vacío
// - Búsqueda: nueva sesión tras 500 ms sin teclear (solo debounce)
// - Scroll: el centinela del final pide la página siguiente
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::EntryRow;
use crate::config::CONFIG;
use crate::hooks::{use_debounce, use_entry_pages, use_visibility_trigger};
use crate::models::DatastoreTarget;

#[derive(Properties, PartialEq, Clone)]
pub struct EntryBrowserProps {
    pub universe_id: String,
    pub api_token: String,
    pub datastore_name: String,
    #[prop_or_default]
    pub selected_key: Option<String>,
    pub on_select: Callback<String>,
    /// Descarta claves repetidas entre páginas (conserva la primera)
    #[prop_or(false)]
    pub dedupe_keys: bool,
    #[prop_or_default]
    pub placeholder: Option<String>,
}

#[function_component(EntryBrowser)]
pub fn entry_browser(props: &EntryBrowserProps) -> Html {
    let target = DatastoreTarget {
        universe_id: props.universe_id.clone(),
        api_token: props.api_token.clone(),
        datastore_name: props.datastore_name.clone(),
    };
    let ready = target.is_ready();

    let pages = use_entry_pages(target.clone(), props.dedupe_keys);
    let search_text = use_state(String::new);
    let debounced_prefix = use_debounce((*search_text).clone(), CONFIG.debounce_ms);
    // Último prefijo pedido como búsqueda nueva; evita repetir la misma sesión
    let requested_prefix = use_mut_ref(|| None::<String>);
    let sentinel_ref = use_node_ref();

    // Datastore disponible o distinto (nombre, universo o token): sesión nueva sin prefijo
    {
        let fetch_page = pages.fetch_page.clone();
        let reset = pages.reset.clone();
        let search_text = search_text.clone();
        let requested_prefix = requested_prefix.clone();

        use_effect_with(target, move |target| {
            reset.emit(());
            search_text.set(String::new());

            if ready {
                log::info!("🗄️ Datastore seleccionado: {}", target.datastore_name);
                *requested_prefix.borrow_mut() = Some(String::new());
                fetch_page.emit((String::new(), true));
            } else {
                *requested_prefix.borrow_mut() = None;
            }
            || ()
        });
    }

    // Texto de búsqueda estable: sesión nueva con ese prefijo
    {
        let fetch_page = pages.fetch_page.clone();
        let requested_prefix = requested_prefix.clone();

        use_effect_with(debounced_prefix, move |prefix| {
            let search = should_search(requested_prefix.borrow().as_deref(), prefix, ready);
            if search {
                log::info!("🔍 Buscando claves con prefijo '{}'", prefix);
                *requested_prefix.borrow_mut() = Some(prefix.clone());
                fetch_page.emit((prefix.clone(), true));
            }
            || ()
        });
    }

    // Scroll infinito
    let can_load_more = ready && pages.state.can_load_more();
    use_visibility_trigger(sentinel_ref.clone(), can_load_more, pages.load_more.clone());

    let on_input = {
        let search_text = search_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_text.set(input.value());
        })
    };

    let on_clear = {
        let search_text = search_text.clone();
        Callback::from(move |_: MouseEvent| search_text.set(String::new()))
    };

    // Recarga manual: sesión nueva inmediata con el texto actual
    let on_reload = {
        let fetch_page = pages.fetch_page.clone();
        let search_text = search_text.clone();
        let requested_prefix = requested_prefix.clone();
        Callback::from(move |_: MouseEvent| {
            let prefix = (*search_text).clone();
            *requested_prefix.borrow_mut() = Some(prefix.clone());
            fetch_page.emit((prefix, true));
        })
    };

    let state = &pages.state;
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Buscar por prefijo...".to_string());

    html! {
        <div class="entry-browser">
            <div class="entry-browser-toolbar">
                <input
                    type="search"
                    class="entry-search"
                    placeholder={placeholder}
                    value={(*search_text).clone()}
                    oninput={on_input}
                    disabled={!ready}
                />
                if !search_text.is_empty() {
                    <button type="button" class="btn-clear" onclick={on_clear} title="Limpiar búsqueda">
                        {"✕"}
                    </button>
                }
                <button
                    type="button"
                    class="btn-reload"
                    onclick={on_reload}
                    disabled={!ready || state.loading}
                    title="Recargar"
                >
                    {"↻"}
                </button>
            </div>

            if !ready {
                <div class="entry-browser-hint">{"Selecciona un datastore para ver sus claves"}</div>
            } else {
                <>
                    <div class="entry-summary">{summary_text(state.entries.len(), state.has_more)}</div>
                    <div class="entry-list">
                        { for state.entries.iter().enumerate().map(|(idx, entry)| {
                            let is_selected = props.selected_key.as_deref() == Some(entry.key.as_str());
                            html! {
                                // Puede haber claves repetidas entre páginas: el índice desambigua
                                <EntryRow
                                    key={format!("{}-{}", idx, entry.key)}
                                    entry_key={entry.key.clone()}
                                    index={idx}
                                    is_selected={is_selected}
                                    on_select={props.on_select.clone()}
                                />
                            }
                        }) }

                        if state.show_empty_state() {
                            <div class="entry-empty">{empty_message(&state.prefix)}</div>
                        }

                        <div class="entry-list-footer" ref={sentinel_ref}>
                            if state.loading {
                                <span class="entry-loading">{"Cargando..."}</span>
                            } else if !state.has_more && !state.entries.is_empty() {
                                <span class="entry-end">{"Fin de la lista"}</span>
                            }
                        </div>
                    </div>
                </>
            }
        </div>
    }
}

/// Búsqueda nueva solo si el prefijo estable no es el último ya pedido
/// (el cambio de datastore ya pidió el prefijo vacío)
fn should_search(requested: Option<&str>, debounced: &str, ready: bool) -> bool {
    ready && requested != Some(debounced)
}

fn summary_text(count: usize, has_more: bool) -> String {
    match (count, has_more) {
        (1, false) => "1 clave".to_string(),
        (n, false) => format!("{} claves", n),
        (n, true) => format!("{}+ claves", n),
    }
}

fn empty_message(prefix: &str) -> String {
    if prefix.is_empty() {
        "Este datastore no tiene claves".to_string()
    } else {
        format!("Ninguna clave empieza por '{}'", prefix)
    }
}
