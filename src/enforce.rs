//! Session termination
//!
//! Enforcement sits behind a trait so policy tests can record calls instead
//! of signaling real processes.

use std::process::Command;

use crate::error::SessionError;

pub(crate) trait SessionEnforcer {
    /// Terminate every process owned by the user. Must be a no-op when the
    /// user has nothing left running.
    fn terminate_sessions(&mut self, username: &str) -> Result<(), SessionError>;
}

/// `pkill -u <user>` backed enforcer.
pub(crate) struct Pkill;

impl SessionEnforcer for Pkill {
    fn terminate_sessions(&mut self, username: &str) -> Result<(), SessionError> {
        // pkill exits 1 when no process matched; that is the idempotent
        // already-terminated case, not a failure.
        Command::new("pkill")
            .args(["-u", username])
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SessionError::NotFound { utility: "pkill" }
                } else {
                    SessionError::Spawn {
                        utility: "pkill",
                        source: e,
                    }
                }
            })?;
        Ok(())
    }
}
