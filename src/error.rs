use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid max time format. Use max=<minutes>")]
    InvalidMax,

    #[error("Invalid bedtime format. Use bedtime=<HH:MM>-<HH:MM>")]
    InvalidBedtime,
}

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("{utility} not found. Install it or check PATH.")]
    NotFound { utility: &'static str },

    #[error("Failed to run {utility}: {source}")]
    Spawn {
        utility: &'static str,
        source: std::io::Error,
    },

    #[error("{utility} exited with {status}")]
    Failed {
        utility: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("Invalid UTF-8 from {utility}: {source}")]
    Utf8 {
        utility: &'static str,
        source: std::string::FromUtf8Error,
    },
}
