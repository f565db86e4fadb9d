//! CLI argument definitions
//!
//! Flags go through clap; the `max=`/`bedtime=` policy settings arrive as
//! free-form `key=value` positionals and are parsed here so a malformed
//! value exits with status 1 before anything else runs.

use clap::Parser;

use crate::config::Config;
use crate::error::AppError;
use crate::policy::Curfew;
use crate::utils::parse_hhmm;

#[derive(Parser)]
#[command(name = "usertime")]
#[command(about = "Report and limit a user's daily login time", version)]
pub(crate) struct Cli {
    /// User to report on
    pub(crate) username: Option<String>,

    /// Policy settings: max=<minutes>, bedtime=<HH:MM>-<HH:MM>
    #[arg(value_name = "KEY=VALUE")]
    pub(crate) settings: Vec<String>,

    /// Terminate the user's sessions whenever a policy warning fires
    #[arg(long)]
    pub(crate) kill: bool,

    /// Report skipped session lines to stderr while parsing
    #[arg(long)]
    pub(crate) debug: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct PolicySettings {
    pub(crate) max_minutes: Option<i64>,
    pub(crate) curfew: Option<Curfew>,
}

impl PolicySettings {
    /// Parse `key=value` tokens. Unrecognized keys are ignored; recognized
    /// keys with malformed values are fatal.
    pub(crate) fn parse(tokens: &[String]) -> Result<Self, AppError> {
        let mut settings = PolicySettings::default();
        for token in tokens {
            if let Some(value) = token.strip_prefix("max=") {
                let minutes: u32 = value.parse().map_err(|_| AppError::InvalidMax)?;
                settings.max_minutes = Some(i64::from(minutes));
            } else if let Some(value) = token.strip_prefix("bedtime=") {
                settings.curfew = Some(parse_curfew(value)?);
            }
        }
        Ok(settings)
    }

    /// Fill values the CLI left unset from the config file. A bad bedtime in
    /// the config is a warning, not fatal; only CLI argument errors abort.
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.max_minutes.is_none() {
            self.max_minutes = config.max.map(i64::from);
        }
        if self.curfew.is_none()
            && let Some(ref bedtime) = config.bedtime
        {
            match parse_curfew(bedtime) {
                Ok(curfew) => self.curfew = Some(curfew),
                Err(e) => eprintln!("Warning: ignoring bedtime from config: {e}"),
            }
        }
        self
    }
}

fn parse_curfew(value: &str) -> Result<Curfew, AppError> {
    let (bed, wake) = value.split_once('-').ok_or(AppError::InvalidBedtime)?;
    Ok(Curfew {
        bedtime: parse_hhmm(bed).ok_or(AppError::InvalidBedtime)?,
        wakeup: parse_hhmm(wake).ok_or(AppError::InvalidBedtime)?,
    })
}
