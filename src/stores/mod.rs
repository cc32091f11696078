pub mod browser_store;

pub use browser_store::{BrowserStore, FetchOutcome, FetchTicket};
