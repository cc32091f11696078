pub mod use_debounce;
pub mod use_entry_pages;
pub mod use_toast;
pub mod use_visibility_trigger;

pub use use_debounce::use_debounce;
pub use use_entry_pages::{use_entry_pages, FetchPageArgs, UseEntryPagesHandle};
pub use use_toast::use_toast;
pub use use_visibility_trigger::use_visibility_trigger;
