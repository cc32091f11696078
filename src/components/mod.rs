pub mod app;
pub mod entry_browser;
pub mod entry_row;
pub mod toast_stack;

pub use app::App;
pub use entry_browser::{EntryBrowser, EntryBrowserProps};
pub use entry_row::EntryRow;
pub use toast_stack::ToastStack;
