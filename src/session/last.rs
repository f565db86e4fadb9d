//! `last -F` output parser
//!
//! Fixed-format block, one finished session per line:
//!
//! `alice  pts/0  :0  Tue Apr 29 08:00:00 2025 - Tue Apr 29 09:30:00 2025  (01:30)`
//!
//! The block ends with a `wtmp begins ...` sentinel; nothing older exists.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::SessionInterval;
use crate::utils::line_debug_enabled;

const STAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

static INTERVAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\w{3}\s+\w{3}\s+\d+\s+\d+:\d+:\d+\s+\d{4})\s+-\s+(\w{3}\s+\w{3}\s+\d+\s+\d+:\d+:\d+\s+\d{4})",
    )
    .expect("interval pattern compiles")
});

pub(super) fn parse_last(output: &str) -> Vec<SessionInterval> {
    let mut sessions = Vec::new();
    for line in output.lines() {
        if line.contains("still logged in") {
            continue;
        }
        if line.contains("wtmp begins") {
            break;
        }
        let Some(caps) = INTERVAL.captures(line) else {
            if line_debug_enabled() && !line.trim().is_empty() {
                eprintln!("last: skipped non-matching line: {line:?}");
            }
            continue;
        };
        let login = NaiveDateTime::parse_from_str(&caps[1], STAMP_FORMAT);
        let logout = NaiveDateTime::parse_from_str(&caps[2], STAMP_FORMAT);
        match (login, logout) {
            (Ok(login), Ok(logout)) => sessions.push(SessionInterval {
                login,
                logout: Some(logout),
            }),
            (login, logout) => {
                if line_debug_enabled() {
                    let err = login.err().or(logout.err()).map(|e| e.to_string());
                    eprintln!("last: skipped unparsable timestamps in {line:?}: {err:?}");
                }
            }
        }
    }
    sessions
}
