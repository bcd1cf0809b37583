//! Where swallowed errors go

use crate::error::StorageError;

/// Receives errors the gate absorbs instead of propagating
pub trait DiagnosticSink {
    fn report(&mut self, err: &StorageError);
}

/// Default sink: `log::error!`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, err: &StorageError) {
        log::error!("Version check failed: {}", err);
    }
}

impl<F: FnMut(&StorageError)> DiagnosticSink for F {
    fn report(&mut self, err: &StorageError) {
        self(err)
    }
}
