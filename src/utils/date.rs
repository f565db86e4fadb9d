use chrono::NaiveTime;

/// Parse a wall-clock `HH:MM` value (lenient about zero padding).
pub(crate) fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}
