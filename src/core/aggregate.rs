//! Daily total computation
//!
//! Merges currently-active sessions with finished ones from the historical
//! log into a single total for the current calendar day.

use chrono::{Duration, NaiveDateTime};

use crate::error::SessionError;
use crate::session::SessionSource;

/// Total time the user has been logged in today, evaluated at `now`.
///
/// Only sessions whose login falls on `now`'s date count; a session carried
/// over from yesterday contributes nothing even if still open. Zero sessions
/// (including an unknown user) is a zero total, not an error.
pub(crate) fn logged_in_time_today(
    source: &dyn SessionSource,
    username: &str,
    now: NaiveDateTime,
) -> Result<Duration, SessionError> {
    let today = now.date();
    let mut total = Duration::zero();

    for session in source.active_sessions(username)? {
        if session.login.date() == today {
            total += now - session.login;
        }
    }

    for session in source.finished_sessions(username)? {
        let Some(logout) = session.logout else {
            continue;
        };
        if session.login.date() == today {
            total += logout - session.login;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionInterval;
    use chrono::NaiveDate;

    struct FakeSource {
        active: Vec<SessionInterval>,
        finished: Vec<SessionInterval>,
    }

    impl SessionSource for FakeSource {
        fn active_sessions(&self, _: &str) -> Result<Vec<SessionInterval>, SessionError> {
            Ok(self.active.clone())
        }

        fn finished_sessions(&self, _: &str) -> Result<Vec<SessionInterval>, SessionError> {
            Ok(self.finished.clone())
        }
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_no_sessions_is_zero() {
        let source = FakeSource {
            active: vec![],
            finished: vec![],
        };
        let total = logged_in_time_today(&source, "alice", dt(2025, 4, 29, 10, 30)).unwrap();
        assert_eq!(total, Duration::zero());
    }

    #[test]
    fn test_active_session_counts_up_to_now() {
        let source = FakeSource {
            active: vec![SessionInterval {
                login: dt(2025, 4, 29, 8, 0),
                logout: None,
            }],
            finished: vec![],
        };
        let total = logged_in_time_today(&source, "alice", dt(2025, 4, 29, 10, 30)).unwrap();
        assert_eq!(total, Duration::hours(2) + Duration::minutes(30));
    }

    #[test]
    fn test_finished_session_counts_exact_span() {
        let source = FakeSource {
            active: vec![],
            finished: vec![SessionInterval {
                login: dt(2025, 4, 29, 6, 0),
                logout: Some(dt(2025, 4, 29, 7, 45)),
            }],
        };
        let total = logged_in_time_today(&source, "bob", dt(2025, 4, 29, 12, 0)).unwrap();
        assert_eq!(total, Duration::hours(1) + Duration::minutes(45));
    }

    #[test]
    fn test_other_days_contribute_nothing() {
        let source = FakeSource {
            active: vec![SessionInterval {
                // Open since yesterday: excluded despite still running.
                login: dt(2025, 4, 28, 9, 0),
                logout: None,
            }],
            finished: vec![SessionInterval {
                login: dt(2025, 4, 27, 0, 0),
                logout: Some(dt(2025, 4, 27, 23, 0)),
            }],
        };
        let total = logged_in_time_today(&source, "alice", dt(2025, 4, 29, 10, 0)).unwrap();
        assert_eq!(total, Duration::zero());
    }

    #[test]
    fn test_active_and_finished_accumulate() {
        let source = FakeSource {
            active: vec![SessionInterval {
                login: dt(2025, 4, 29, 10, 0),
                logout: None,
            }],
            finished: vec![
                SessionInterval {
                    login: dt(2025, 4, 29, 6, 0),
                    logout: Some(dt(2025, 4, 29, 6, 30)),
                },
                SessionInterval {
                    login: dt(2025, 4, 28, 22, 0),
                    logout: Some(dt(2025, 4, 29, 1, 0)),
                },
            ],
        };
        let total = logged_in_time_today(&source, "alice", dt(2025, 4, 29, 11, 0)).unwrap();
        // 1h active + 30m finished; the session begun yesterday is excluded.
        assert_eq!(total, Duration::minutes(90));
    }
}
