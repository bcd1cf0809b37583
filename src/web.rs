//! JavaScript entry points (WASM only)

use wasm_bindgen::prelude::*;

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::persistence::LocalStore;
use crate::platform::PageReload;
use crate::{GateConfig, VersionGate};

/// Browser console logging plus panic messages. Safe to call twice.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Compare the LocalStorage marker with this build; may reload the page
#[wasm_bindgen(js_name = checkAndUpdateVersion)]
pub fn check_and_update_version() {
    let store = match LocalStore::open() {
        Ok(store) => store,
        Err(err) => {
            LogSink.report(&err);
            return;
        }
    };
    let mut gate = VersionGate::new(GateConfig::default(), store, PageReload);
    gate.check_and_update_version();
}

#[wasm_bindgen(js_name = getCurrentVersion)]
pub fn get_current_version() -> String {
    crate::current_version().to_string()
}
