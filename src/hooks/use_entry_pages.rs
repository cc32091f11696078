// ============================================================================
// USE ENTRY PAGES HOOK - fetchPage conectado a BrowserStore + DatastoreClient
// ============================================================================
// El store vive en un use_mut_ref para que las respuestas async siempre lean
// el estado actual (generación, cursor). Tras cada cambio se fuerza un render.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_toast;
use crate::models::{DatastoreTarget, ListEntriesQuery};
use crate::services::DatastoreClient;
use crate::stores::{BrowserStore, FetchOutcome};

/// Argumentos de fetch_page: (prefix, is_new_search)
pub type FetchPageArgs = (String, bool);

#[derive(Clone)]
pub struct UseEntryPagesHandle {
    /// Copia del store en este render
    pub state: BrowserStore,
    pub fetch_page: Callback<FetchPageArgs>,
    /// Página siguiente con el prefijo de la sesión actual, si procede
    pub load_more: Callback<()>,
    /// Vacía la sesión e invalida lo que esté en vuelo
    pub reset: Callback<()>,
}

#[hook]
pub fn use_entry_pages(target: DatastoreTarget, dedupe_keys: bool) -> UseEntryPagesHandle {
    let store = use_mut_ref(BrowserStore::default);
    let client = use_memo((), |_| DatastoreClient::new());
    let force_update = use_force_update();
    let toast = use_toast();

    let fetch_page = {
        let store = store.clone();
        let client = client.clone();
        let force_update = force_update.clone();

        Callback::from(move |(prefix, is_new_search): FetchPageArgs| {
            if !target.is_ready() {
                log::warn!("⚠️ fetch_page sin datastore, ignorando");
                return;
            }

            let ticket = store.borrow_mut().begin_fetch(&prefix, is_new_search);
            force_update.force_update();

            let query = ListEntriesQuery {
                target: target.clone(),
                prefix: ticket.prefix.clone(),
                cursor: ticket.cursor.clone(),
            };

            log::info!(
                "📦 Pidiendo {} de '{}' (prefix='{}', gen={})",
                if is_new_search { "primera página" } else { "página siguiente" },
                query.target.datastore_name,
                query.prefix,
                ticket.generation
            );

            let store = store.clone();
            let client = client.clone();
            let force_update = force_update.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = client.list_entries(&query).await;

                let outcome = match result {
                    Ok(page) => {
                        let count = page.entries.len();
                        let outcome = store.borrow_mut().apply_page(&ticket, page, dedupe_keys);
                        if outcome == FetchOutcome::Applied {
                            log::info!("✅ {} claves recibidas (gen={})", count, ticket.generation);
                        }
                        outcome
                    }
                    Err(e) => {
                        let outcome = store.borrow_mut().apply_failure(&ticket);
                        if outcome == FetchOutcome::Applied {
                            toast.error(format!("Error: {}", e));
                        }
                        outcome
                    }
                };

                match outcome {
                    FetchOutcome::Applied => force_update.force_update(),
                    FetchOutcome::Stale => {
                        log::info!("🗑️ Respuesta obsoleta descartada (gen={})", ticket.generation);
                    }
                }
            });
        })
    };

    // Se comprueba contra el store vivo: dos avisos del observer antes del
    // siguiente render no deben lanzar dos peticiones
    let load_more = {
        let store = store.clone();
        let fetch_page = fetch_page.clone();
        Callback::from(move |_| {
            let next = store.borrow().next_page_request();
            if let Some(prefix) = next {
                fetch_page.emit((prefix, false));
            }
        })
    };

    let reset = {
        let store = store.clone();
        let force_update = force_update.clone();
        Callback::from(move |_| {
            store.borrow_mut().reset();
            force_update.force_update();
        })
    };

    let state = store.borrow().clone();

    UseEntryPagesHandle {
        state,
        fetch_page,
        load_more,
        reset,
    }
}
