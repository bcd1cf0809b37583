//! Version-gated invalidation of client-local storage
//!
//! Run once at startup, before anything else reads persisted state:
//! - no marker stored: record the running version
//! - marker equals the running version: nothing to do
//! - marker differs (upgrade or rollback alike): wipe the store, keep the
//!   auth credential, record the running version, force a full restart
//!
//! Storage failures never escape. They go to the [`DiagnosticSink`] and the
//! application carries on as if the versions matched.

use crate::config::GateConfig;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::error::StorageError;
use crate::persistence::KeyValueStore;
use crate::platform::Restart;

/// Terminal state of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Stored marker equals the running version
    Match,
    /// Store was wiped and a restart was requested
    MismatchHandled { previous: String },
    /// No marker was stored, the running version was recorded
    FirstRunInitialized,
    /// A storage error was reported and absorbed
    ErrorSwallowed,
}

pub struct VersionGate<S, R, D = LogSink> {
    config: GateConfig,
    store: S,
    restart: R,
    sink: D,
}

impl<S: KeyValueStore, R: Restart> VersionGate<S, R, LogSink> {
    pub fn new(config: GateConfig, store: S, restart: R) -> Self {
        Self::with_sink(config, store, restart, LogSink)
    }
}

impl<S: KeyValueStore, R: Restart, D: DiagnosticSink> VersionGate<S, R, D> {
    pub fn with_sink(config: GateConfig, store: S, restart: R, sink: D) -> Self {
        Self {
            config,
            store,
            restart,
            sink,
        }
    }

    /// Version of the running build
    pub fn current_version(&self) -> &str {
        self.config.current_version()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compare the stored marker with the running version and act on it.
    ///
    /// Never fails. A restart is requested only on `MismatchHandled`.
    pub fn check_and_update_version(&mut self) -> CheckOutcome {
        match self.try_check() {
            Ok(outcome) => outcome,
            Err(err) => {
                self.sink.report(&err);
                CheckOutcome::ErrorSwallowed
            }
        }
    }

    fn try_check(&mut self) -> Result<CheckOutcome, StorageError> {
        let current = self.config.current_version();
        let version_key = self.config.version_key.as_str();

        match self.store.get(version_key)? {
            Some(stored) if stored == current => {
                log::debug!("App version {} unchanged", current);
                Ok(CheckOutcome::Match)
            }
            Some(stored) => {
                // Order matters: anything written before the clear is lost
                let credential_key = self.config.credential_key.as_str();
                let credential = self.store.get(credential_key)?;
                self.store.clear_all()?;
                if let Some(credential) = &credential {
                    self.store.set(credential_key, credential)?;
                }
                self.store.set(version_key, current)?;

                log::info!(
                    "App version changed {} -> {}, cleared storage (credential {}), reloading",
                    stored,
                    current,
                    if credential.is_some() { "kept" } else { "absent" }
                );
                self.restart.restart();
                Ok(CheckOutcome::MismatchHandled { previous: stored })
            }
            None => {
                self.store.set(version_key, current)?;
                log::info!("Recorded app version {}", current);
                Ok(CheckOutcome::FirstRunInitialized)
            }
        }
    }
}
