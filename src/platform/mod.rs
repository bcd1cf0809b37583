//! Platform abstraction layer
//!
//! Handles browser/native differences for forcing a full restart of the
//! running application:
//! - Web: hard `location.reload()`
//! - Native: re-execute the current binary

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReExec;
#[cfg(target_arch = "wasm32")]
pub use web::PageReload;

/// Discard all in-memory application state and start initialization again.
///
/// This is never a soft re-render. Implementations may not return at all.
pub trait Restart {
    fn restart(&mut self);
}

impl<F: FnMut()> Restart for F {
    fn restart(&mut self) {
        self()
    }
}
