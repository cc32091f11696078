// ============================================================================
// APP - Host del EntryBrowser
// ============================================================================
// Formulario con universo / token / datastore y panel con la clave elegida.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::EntryBrowser;
use crate::config::CONFIG;
use crate::context::ToastProvider;
use crate::models::DatastoreTarget;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <DatastoreExplorer />
        </ToastProvider>
    }
}

#[function_component(DatastoreExplorer)]
fn datastore_explorer() -> Html {
    let target = use_state(|| DatastoreTarget {
        universe_id: CONFIG.default_universe_id.clone(),
        api_token: CONFIG.default_api_token.clone(),
        datastore_name: CONFIG.default_datastore.clone(),
    });
    let selected_key = use_state(|| None::<String>);

    let universe_ref = use_node_ref();
    let token_ref = use_node_ref();
    let datastore_ref = use_node_ref();

    let on_submit = {
        let target = target.clone();
        let selected_key = selected_key.clone();
        let universe_ref = universe_ref.clone();
        let token_ref = token_ref.clone();
        let datastore_ref = datastore_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(universe_input), Some(token_input), Some(datastore_input)) = (
                universe_ref.cast::<HtmlInputElement>(),
                token_ref.cast::<HtmlInputElement>(),
                datastore_ref.cast::<HtmlInputElement>(),
            ) {
                let next = DatastoreTarget {
                    universe_id: universe_input.value().trim().to_string(),
                    api_token: token_input.value(),
                    datastore_name: datastore_input.value().trim().to_string(),
                };

                if next != *target {
                    log::info!("🗄️ Abriendo datastore '{}' (universo {})", next.datastore_name, next.universe_id);
                    selected_key.set(None);
                    target.set(next);
                }
            }
        })
    };

    let on_select = {
        let selected_key = selected_key.clone();
        Callback::from(move |key: String| {
            log::info!("🔑 Clave seleccionada: {}", key);
            selected_key.set(Some(key));
        })
    };

    html! {
        <div class="explorer">
            <form class="explorer-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="universe-id">{"Universo"}</label>
                    <input
                        type="text"
                        id="universe-id"
                        placeholder="ID del universo"
                        value={target.universe_id.clone()}
                        ref={universe_ref}
                    />
                </div>
                <div class="form-group">
                    <label for="api-token">{"Token"}</label>
                    <input
                        type="password"
                        id="api-token"
                        placeholder="Token de acceso"
                        value={target.api_token.clone()}
                        ref={token_ref}
                    />
                </div>
                <div class="form-group">
                    <label for="datastore-name">{"Datastore"}</label>
                    <input
                        type="text"
                        id="datastore-name"
                        placeholder="Nombre del datastore"
                        value={target.datastore_name.clone()}
                        ref={datastore_ref}
                    />
                </div>
                <button type="submit" class="btn-open">{"Abrir"}</button>
            </form>

            <div class="explorer-body">
                <EntryBrowser
                    universe_id={target.universe_id.clone()}
                    api_token={target.api_token.clone()}
                    datastore_name={target.datastore_name.clone()}
                    selected_key={(*selected_key).clone()}
                    on_select={on_select}
                />

                <div class="selected-panel">
                    <h3>{"Clave seleccionada"}</h3>
                    {
                        match &*selected_key {
                            Some(key) => html! { <code class="selected-key">{key.clone()}</code> },
                            None => html! { <p class="selected-empty">{"Ninguna"}</p> },
                        }
                    }
                </div>
            </div>
        </div>
    }
}
