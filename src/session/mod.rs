//! Session record abstraction layer
//!
//! The fragile text matching over `who`/`last` output lives here, behind a
//! trait that hands the aggregator a typed sequence of intervals.

pub(crate) mod last;
pub(crate) mod system;
pub(crate) mod who;

use chrono::NaiveDateTime;

use crate::error::SessionError;

/// One login session. `logout: None` marks a still-active session whose
/// open end is the evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionInterval {
    pub(crate) login: NaiveDateTime,
    pub(crate) logout: Option<NaiveDateTime>,
}

/// Where session records come from. The real implementation shells out to
/// the OS utilities; tests substitute canned interval lists.
pub(crate) trait SessionSource {
    /// Currently-active sessions for the user.
    fn active_sessions(&self, username: &str) -> Result<Vec<SessionInterval>, SessionError>;

    /// Finished sessions from the historical log. Still-open entries are
    /// excluded (they already appear in `active_sessions`).
    fn finished_sessions(&self, username: &str) -> Result<Vec<SessionInterval>, SessionError>;
}

pub(crate) use system::SystemSessions;
