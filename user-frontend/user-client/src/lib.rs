use wasm_bindgen::prelude::wasm_bindgen;

use leptos::prelude::*;
use user_app::*;

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    log::info!("csr mode - mounting, users from {}", config.users_url());

    leptos::mount::mount_to_body(move || {
        provide_config(config.clone());
        view! { <App /> }
    });
}
