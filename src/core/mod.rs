//! Core module - daily time accounting

mod aggregate;

pub(crate) use aggregate::logged_in_time_today;
