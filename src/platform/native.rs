//! Native restart

use std::ffi::OsString;
use std::process::Command;

use super::Restart;

/// Runs the current executable again with the same arguments, then exits
/// with the child's status.
#[derive(Debug, Clone)]
pub struct ReExec {
    args: Vec<OsString>,
}

impl ReExec {
    /// Capture the arguments of the running process (minus argv[0])
    pub fn from_env() -> Self {
        Self {
            args: std::env::args_os().skip(1).collect(),
        }
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Restart for ReExec {
    fn restart(&mut self) {
        let exe = match std::env::current_exe() {
            Ok(exe) => exe,
            Err(e) => {
                log::error!("Restart failed, cannot locate executable: {}", e);
                return;
            }
        };

        log::info!("Restarting {}", exe.display());
        match Command::new(&exe).args(&self.args).status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(e) => log::error!("Restart failed: {}", e),
        }
    }
}
