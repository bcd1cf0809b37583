//! Version Gate - startup cache invalidation for the admin dashboard
//!
//! Core modules:
//! - `gate`: Version check (compare, wipe, keep credential, reload)
//! - `persistence`: Key-value store port and backends (LocalStorage, file, memory)
//! - `platform`: Browser/native restart abstraction
//! - `diagnostics`: Sink for errors the gate absorbs
//! - `config`: Storage keys and the running version

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod gate;
pub mod persistence;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GateConfig;
pub use error::{ConfigError, StorageError};
pub use gate::{CheckOutcome, VersionGate};
pub use persistence::KeyValueStore;
pub use platform::Restart;

/// Build and storage constants
pub mod consts {
    /// Version of this build (`APP_VERSION` at compile time, else the crate version)
    pub const APP_VERSION: &str =
        build_version(option_env!("APP_VERSION"), env!("CARGO_PKG_VERSION"));

    const _: () = assert!(!APP_VERSION.is_empty());

    /// An empty override counts as unset
    pub(crate) const fn build_version(
        overridden: Option<&'static str>,
        package: &'static str,
    ) -> &'static str {
        match overridden {
            Some(version) if !version.is_empty() => version,
            _ => package,
        }
    }

    /// Storage key of the version marker
    pub const VERSION_KEY: &str = "app_version";

    /// Storage key of the auth session, owned by the Supabase client
    pub const CREDENTIAL_KEY: &str = "supabase.auth.token";
}

/// Version of the running build
#[inline]
pub fn current_version() -> &'static str {
    consts::APP_VERSION
}

/// Run the gate once with the default config and log sink
pub fn check_and_update_version<S: KeyValueStore, R: Restart>(store: S, restart: R) -> CheckOutcome {
    VersionGate::new(GateConfig::default(), store, restart).check_and_update_version()
}
