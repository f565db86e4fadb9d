//! Subprocess-backed session source
//!
//! Blocking invocations of the OS session utilities. A hung utility hangs
//! the whole run; there is no timeout by design.

use std::process::{Command, Stdio};

use super::{SessionInterval, SessionSource, last, who};
use crate::error::SessionError;

pub(crate) struct SystemSessions;

fn run_utility(utility: &'static str, args: &[&str]) -> Result<String, SessionError> {
    let output = Command::new(utility)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SessionError::NotFound { utility }
            } else {
                SessionError::Spawn { utility, source: e }
            }
        })?;
    if !output.status.success() {
        return Err(SessionError::Failed {
            utility,
            status: output.status,
        });
    }
    String::from_utf8(output.stdout).map_err(|e| SessionError::Utf8 { utility, source: e })
}

impl SessionSource for SystemSessions {
    fn active_sessions(&self, username: &str) -> Result<Vec<SessionInterval>, SessionError> {
        // `who` has no user filter; match on the first field ourselves.
        Ok(who::parse_who(&run_utility("who", &[])?, username))
    }

    fn finished_sessions(&self, username: &str) -> Result<Vec<SessionInterval>, SessionError> {
        Ok(last::parse_last(&run_utility("last", &["-F", username])?))
    }
}
