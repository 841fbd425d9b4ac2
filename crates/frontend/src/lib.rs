pub mod app;
pub mod dashboards;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, config_error) = AppConfig::load();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    match config_error {
        Some(err) => log::warn!("Falling back to default dashboard config: {}", err),
        None => log::debug!("Dashboard config loaded"),
    }

    leptos::mount::mount_to_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
