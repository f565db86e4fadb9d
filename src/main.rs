mod cli;
mod config;
mod core;
mod enforce;
mod error;
mod policy;
mod session;
mod utils;

use chrono::Local;
use clap::Parser;

use cli::{Cli, PolicySettings};
use config::Config;
use enforce::Pkill;
use policy::Policy;
use session::SystemSessions;
use utils::set_line_debug;

const USAGE: &str = "Usage: usertime <username> [max=<minutes>] [--kill] [bedtime=<HH:MM>-<HH:MM>]";

fn main() {
    let cli = Cli::parse();

    let Some(username) = cli.username else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    // Argument errors are fatal before any subprocess runs.
    let settings = match PolicySettings::parse(&cli.settings) {
        Ok(settings) => settings,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let config = Config::load();
    set_line_debug(cli.debug || config.debug);
    let settings = settings.with_config(&config);
    let policy = Policy {
        max_minutes: settings.max_minutes,
        kill: cli.kill || config.kill,
        curfew: settings.curfew,
    };

    let now = Local::now().naive_local();
    let total = match crate::core::logged_in_time_today(&SystemSessions, &username, now) {
        Ok(total) => total,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = policy::evaluate(&username, total, now, &policy, &mut Pkill) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
