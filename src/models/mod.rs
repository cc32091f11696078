pub mod entry;

pub use entry::{DatastoreTarget, Entry, EntryPage, KeyRecord, ListEntriesQuery, ListEntriesResponse};
