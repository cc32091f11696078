use datastore_entry_browser::config::CONFIG;
use datastore_entry_browser::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level_filter()));
    log::info!("🚀 Datastore Entry Browser starting... (API: {})", CONFIG.datastore_api_url);

    yew::Renderer::<App>::new().render();
}
