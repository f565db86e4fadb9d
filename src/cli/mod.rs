//! CLI layer

mod args;

pub(crate) use args::{Cli, PolicySettings};
