pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod format;

pub(crate) use date::parse_hhmm;
pub(crate) use debug::{line_debug_enabled, set_line_debug};
pub(crate) use format::format_duration;
