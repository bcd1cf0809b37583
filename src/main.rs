//! Version Gate entry point
//!
//! Web: runs the check once when the module starts.
//! Native: runs the check against a JSON file store and re-executes itself
//! on a version change.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    version_gate::web::init_logging();
    log::info!("Version Gate {} starting...", version_gate::current_version());
    version_gate::web::check_and_update_version();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Default store location when no path argument is given
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_STORE_PATH: &str = "version_gate_store.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use version_gate::persistence::FileStore;
    use version_gate::platform::ReExec;
    use version_gate::{CheckOutcome, GateConfig, VersionGate};

    env_logger::init();
    log::info!("Version Gate {} (native) starting...", version_gate::current_version());

    let restart = ReExec::from_env();
    let store_path = restart
        .args()
        .first()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.into());

    // Key overrides only; a bad config file falls back to the defaults
    let config = match std::env::var_os("VERSION_GATE_CONFIG") {
        Some(path) => GateConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring config {}: {}", path.to_string_lossy(), e);
            GateConfig::default()
        }),
        None => GateConfig::default(),
    };

    let mut gate = VersionGate::new(config, FileStore::new(store_path), restart);
    let outcome = gate.check_and_update_version();
    let path = gate.store().path().display();
    match outcome {
        CheckOutcome::Match => println!("{}: up to date ({})", path, gate.current_version()),
        CheckOutcome::FirstRunInitialized => {
            println!("{}: initialized at {}", path, gate.current_version())
        }
        CheckOutcome::MismatchHandled { previous } => {
            println!("{}: migrated {} -> {}", path, previous, gate.current_version())
        }
        CheckOutcome::ErrorSwallowed => println!("{}: check skipped, see log", path),
    }
}
