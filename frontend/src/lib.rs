pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod router;
pub mod sessions;
pub mod state;
#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {err}").into());
    }
    log::info!("starting BadmintonBook frontend");
    config::init();
    router::mount_app();
}
