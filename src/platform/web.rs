//! Browser restart

use super::Restart;

/// Reloads the current document
#[derive(Debug, Clone, Copy, Default)]
pub struct PageReload;

impl Restart for PageReload {
    fn restart(&mut self) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().reload() {
                    log::error!("Page reload failed: {:?}", e);
                }
            }
            None => log::error!("Page reload failed: no window"),
        }
    }
}
