//! `who` output parser
//!
//! One line per active session, e.g. `alice    pts/0   2025-04-29 08:23 (:0)`.

use chrono::NaiveDateTime;

use super::SessionInterval;
use crate::utils::line_debug_enabled;

pub(super) fn parse_who(output: &str, username: &str) -> Vec<SessionInterval> {
    let mut sessions = Vec::new();
    for line in output.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.first() != Some(&username) {
            continue;
        }
        let (Some(date), Some(time)) = (parts.get(2), parts.get(3)) else {
            if line_debug_enabled() {
                eprintln!("who: skipped short line: {line:?}");
            }
            continue;
        };
        match NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M") {
            Ok(login) => sessions.push(SessionInterval {
                login,
                logout: None,
            }),
            Err(err) => {
                if line_debug_enabled() {
                    eprintln!("who: skipped unparsable login time in {line:?}: {err}");
                }
            }
        }
    }
    sessions
}
