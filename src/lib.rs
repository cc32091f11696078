// ============================================================================
// DATASTORE ENTRY BROWSER - Yew + WASM
// ============================================================================
// - Models: tipos del endpoint de listado
// - Services: SOLO comunicación HTTP
// - Stores: estado de la sesión de búsqueda (lógica pura)
// - Hooks: paginación, debounce, visibilidad, toasts
// - Components: EntryBrowser y host de ejemplo
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;

pub use components::{App, EntryBrowser, EntryBrowserProps};
pub use context::{Severity, ToastHandle, ToastProvider};
pub use models::{Entry, EntryPage};
pub use services::{DatastoreClient, FetchError};
pub use stores::BrowserStore;
