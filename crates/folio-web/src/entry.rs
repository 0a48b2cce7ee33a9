//! WASM entry points.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::logging;

thread_local! {
    /// The running app; dropped by `stop_effects`.
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Module start: set up logging and bring the page effects up.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();

    match App::start_from_page() {
        Ok(app) => {
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(e) => tracing::warn!(error = %e, "Site effects failed to start"),
    }
}

/// Tears the effects down (frame loop, listeners, observers).
#[wasm_bindgen]
pub fn stop_effects() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if let Some(app) = app {
        app.stop();
        tracing::info!("Site effects stopped");
    }
}
