//! Policy evaluation
//!
//! One linear pass over the computed daily total: max-minutes check first,
//! then the independent curfew check. No retries, no state.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::enforce::SessionEnforcer;
use crate::error::SessionError;
use crate::utils::format_duration;

/// Nightly curfew window, both ends anchored to today's wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Curfew {
    pub(crate) bedtime: NaiveTime,
    pub(crate) wakeup: NaiveTime,
}

impl Curfew {
    /// True when `now` is after bedtime or before wakeup. The window is
    /// nightly and wraps past midnight (e.g. 22:00-06:00).
    pub(crate) fn contains(&self, now: NaiveTime) -> bool {
        now > self.bedtime || now < self.wakeup
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Policy {
    pub(crate) max_minutes: Option<i64>,
    pub(crate) kill: bool,
    pub(crate) curfew: Option<Curfew>,
}

pub(crate) fn evaluate(
    username: &str,
    total: Duration,
    now: NaiveDateTime,
    policy: &Policy,
    enforcer: &mut dyn SessionEnforcer,
) -> Result<(), SessionError> {
    match policy.max_minutes {
        Some(max) if total > Duration::minutes(max) => {
            println!("Warning: Total time logged in today for {username} exceeds {max} minutes.");
            if policy.kill {
                println!("Killing all sessions for {username} due to exceeding max time.");
                enforcer.terminate_sessions(username)?;
            }
        }
        _ => println!(
            "Total time logged in today for {username}: {}",
            format_duration(total)
        ),
    }

    // Curfew fires regardless of the max-minutes outcome. With --kill the
    // second termination is a no-op against an already-terminated user.
    if let Some(curfew) = policy.curfew
        && curfew.contains(now.time())
    {
        println!("Warning: {username} is logged in during bedtime hours.");
        if policy.kill {
            println!("Killing all sessions for {username} due to bedtime.");
            enforcer.terminate_sessions(username)?;
        }
    }

    Ok(())
}
