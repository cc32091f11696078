// ============================================================================
// BROWSER STORE - Estado de consulta del navegador de claves
// ============================================================================
// Lógica pura (sin web_sys): el hook use_entry_pages la envuelve en un
// Rc<RefCell<_>> y la conecta con el cliente HTTP.
// ============================================================================

use std::collections::HashSet;

use crate::models::{Entry, EntryPage};

/// Datos capturados al lanzar una petición.
/// Solo se aplica si `generation` sigue siendo la última emitida.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub prefix: String,
    pub cursor: String,
    pub is_new_search: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Respuesta de una petición superada por otra más reciente
    Stale,
}

/// Estado de una sesión de búsqueda
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserStore {
    /// Prefijo de la sesión cuyas entradas se muestran
    pub prefix: String,
    pub entries: Vec<Entry>,
    pub cursor: String,
    pub loading: bool,
    pub has_more: bool,
    generation: u64,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            entries: Vec::new(),
            cursor: String::new(),
            loading: false,
            has_more: false,
            generation: 0,
        }
    }
}

impl BrowserStore {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// El centinela de scroll solo pide más si no hay nada en vuelo
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.has_more
    }

    /// Prefijo para pedir la página siguiente, o None si hay algo en vuelo
    /// o la sesión está agotada
    pub fn next_page_request(&self) -> Option<String> {
        self.can_load_more().then(|| self.prefix.clone())
    }

    /// Mensaje de lista vacía: solo tras la primera petición y sin nada en vuelo
    pub fn show_empty_state(&self) -> bool {
        self.generation > 0 && !self.loading && self.entries.is_empty()
    }

    /// Registra una nueva petición y devuelve su ticket.
    /// Búsqueda nueva => cursor vacío; continuación => último cursor recibido.
    pub fn begin_fetch(&mut self, prefix: &str, is_new_search: bool) -> FetchTicket {
        self.generation += 1;
        self.loading = true;

        FetchTicket {
            generation: self.generation,
            prefix: prefix.to_string(),
            cursor: if is_new_search {
                String::new()
            } else {
                self.cursor.clone()
            },
            is_new_search,
        }
    }

    /// Aplica una página recibida. Búsqueda nueva reemplaza la lista,
    /// continuación la extiende en orden de llegada.
    pub fn apply_page(&mut self, ticket: &FetchTicket, page: EntryPage, dedupe_keys: bool) -> FetchOutcome {
        if self.is_stale(ticket) {
            return FetchOutcome::Stale;
        }

        let has_more = page.has_more();
        let EntryPage { entries, next_cursor } = page;

        if ticket.is_new_search {
            self.prefix = ticket.prefix.clone();
            self.entries.clear();
        }

        if dedupe_keys {
            let mut seen: HashSet<String> = self.entries.iter().map(|e| e.key.clone()).collect();
            self.entries
                .extend(entries.into_iter().filter(|entry| seen.insert(entry.key.clone())));
        } else {
            self.entries.extend(entries);
        }

        self.cursor = next_cursor;
        self.has_more = has_more;
        self.loading = false;
        FetchOutcome::Applied
    }

    /// Fallo de red/parseo/API: lista y cursor intactos, solo se libera `loading`
    pub fn apply_failure(&mut self, ticket: &FetchTicket) -> FetchOutcome {
        if self.is_stale(ticket) {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        FetchOutcome::Applied
    }

    /// Cambio de datastore: vacía todo e invalida peticiones en vuelo
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    fn is_stale(&self, ticket: &FetchTicket) -> bool {
        ticket.generation != self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(keys: &[&str], cursor: &str) -> EntryPage {
        EntryPage {
            entries: keys.iter().map(|k| Entry::new(*k)).collect(),
            next_cursor: cursor.to_string(),
        }
    }

    fn keys(store: &BrowserStore) -> Vec<&str> {
        store.entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn pages_accumulate_in_arrival_order() {
        let mut store = BrowserStore::default();

        let ticket = store.begin_fetch("", true);
        assert!(store.loading);
        store.apply_page(&ticket, page(&["a", "b"], "c1"), false);
        assert!(store.has_more);

        let ticket = store.begin_fetch("", false);
        assert_eq!(ticket.cursor, "c1");
        store.apply_page(&ticket, page(&["c"], "c2"), false);
        assert!(store.has_more);

        let ticket = store.begin_fetch("", false);
        assert_eq!(ticket.cursor, "c2");
        store.apply_page(&ticket, page(&["d", "e"], "c3"), false);

        assert_eq!(keys(&store), vec!["a", "b", "c", "d", "e"]);
        assert!(store.has_more);
        assert!(!store.loading);
        assert_eq!(store.cursor, "c3");
    }

    #[test]
    fn empty_cursor_exhausts_session() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["a", "b"], ""), false);

        assert_eq!(keys(&store), vec!["a", "b"]);
        assert!(!store.has_more);
        assert_eq!(store.cursor, "");
        assert!(!store.can_load_more());
    }

    #[test]
    fn new_search_replaces_previous_entries() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["a", "b"], "c1"), false);
        let ticket = store.begin_fetch("", false);
        store.apply_page(&ticket, page(&["c"], "c2"), false);

        let ticket = store.begin_fetch("us", true);
        assert_eq!(ticket.cursor, "", "fresh search starts from the beginning");
        store.apply_page(&ticket, page(&["user_1"], ""), false);

        assert_eq!(keys(&store), vec!["user_1"]);
        assert_eq!(store.prefix, "us");
        assert!(!store.has_more);
    }

    #[test]
    fn failure_keeps_entries_and_cursor() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["a"], "c1"), false);
        let before = store.clone();

        let ticket = store.begin_fetch("", false);
        assert_eq!(store.apply_failure(&ticket), FetchOutcome::Applied);

        assert_eq!(store.entries, before.entries);
        assert_eq!(store.cursor, "c1");
        assert!(store.has_more);
        assert!(!store.loading);

        // La sesión sigue siendo reanudable con el mismo cursor
        let retry = store.begin_fetch("", false);
        assert_eq!(retry.cursor, "c1");
    }

    #[test]
    fn failed_new_search_keeps_previous_session() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("a", true);
        store.apply_page(&ticket, page(&["a1", "a2"], "c1"), false);

        let ticket = store.begin_fetch("b", true);
        store.apply_failure(&ticket);

        assert_eq!(keys(&store), vec!["a1", "a2"]);
        assert_eq!(store.prefix, "a");
        assert_eq!(store.cursor, "c1");
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut store = BrowserStore::default();
        let first = store.begin_fetch("x", true);
        let second = store.begin_fetch("xy", true);

        // La respuesta de "xy" llega antes que la de "x"
        assert_eq!(store.apply_page(&second, page(&["xy1"], ""), false), FetchOutcome::Applied);
        assert_eq!(store.apply_page(&first, page(&["x1", "x2"], "c"), false), FetchOutcome::Stale);

        assert_eq!(keys(&store), vec!["xy1"]);
        assert_eq!(store.prefix, "xy");
        assert!(!store.has_more);
    }

    #[test]
    fn stale_response_does_not_clear_loading() {
        let mut store = BrowserStore::default();
        let first = store.begin_fetch("x", true);
        let second = store.begin_fetch("xy", true);

        assert_eq!(store.apply_failure(&first), FetchOutcome::Stale);
        assert!(store.loading, "newest request is still in flight");

        store.apply_page(&second, page(&[], ""), false);
        assert!(!store.loading);
    }

    #[test]
    fn reset_invalidates_in_flight_requests() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["old"], "c1"), false);

        let in_flight = store.begin_fetch("", false);
        store.reset();

        assert!(store.entries.is_empty());
        assert!(!store.loading);
        assert_eq!(store.cursor, "");
        assert_eq!(store.apply_page(&in_flight, page(&["late"], "c2"), false), FetchOutcome::Stale);
        assert!(store.entries.is_empty());
    }

    #[test]
    fn duplicates_are_kept_unless_deduping() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["a", "b"], "c1"), false);
        let ticket = store.begin_fetch("", false);
        store.apply_page(&ticket, page(&["b", "c"], ""), false);
        assert_eq!(keys(&store), vec!["a", "b", "b", "c"]);

        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("", true);
        store.apply_page(&ticket, page(&["a", "b", "a"], "c1"), true);
        let ticket = store.begin_fetch("", false);
        store.apply_page(&ticket, page(&["b", "c"], ""), true);
        assert_eq!(keys(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn second_load_more_while_loading_is_refused() {
        let mut store = BrowserStore::default();
        let ticket = store.begin_fetch("us", true);
        store.apply_page(&ticket, page(&["user_1"], "c1"), false);

        // Dos avisos del observer antes del siguiente render
        let first = store.next_page_request();
        assert_eq!(first.as_deref(), Some("us"));
        let ticket = store.begin_fetch(&first.unwrap(), false);
        assert_eq!(store.next_page_request(), None);

        store.apply_page(&ticket, page(&["user_2"], ""), false);
        assert_eq!(store.next_page_request(), None, "session exhausted");
    }

    #[test]
    fn empty_state_waits_for_first_fetch() {
        let mut store = BrowserStore::default();
        assert!(!store.show_empty_state());

        let ticket = store.begin_fetch("", true);
        assert!(!store.show_empty_state());

        store.apply_page(&ticket, page(&[], ""), false);
        assert!(store.show_empty_state());

        // Tras cambiar de datastore la nueva sesión ya está en marcha
        store.reset();
        store.begin_fetch("", true);
        assert!(!store.show_empty_state());
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut store = BrowserStore::default();
        let a = store.begin_fetch("", true).generation;
        let b = store.begin_fetch("", false).generation;
        store.reset();
        let c = store.begin_fetch("", true).generation;
        assert!(a < b && b < c);
        assert_eq!(store.generation(), c);
    }
}
