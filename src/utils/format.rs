use chrono::Duration;

/// Render a daily total as `H:MM:SS`, with a leading day count once it
/// passes 24 hours (overlapping terminals can push a total past a day).
pub(crate) fn format_duration(total: Duration) -> String {
    let secs = total.num_seconds();
    let days = secs.div_euclid(86_400);
    let rem = secs.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rem / 3600, rem % 3600 / 60, rem % 60);
    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}
