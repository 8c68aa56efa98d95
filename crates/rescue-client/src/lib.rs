#[cfg(target_family = "wasm")]
mod app;
pub mod bridge;
pub mod canvas;
mod diag;
pub mod settings;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();

        if let Err(e) = app::run() {
            diag::console_warn!("Princess Rescue failed to start: {e}");
        }
    }
}
