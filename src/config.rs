use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Per-host defaults. CLI arguments always take precedence.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) kill: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// Maximum minutes per day
    #[serde(default)]
    pub(crate) max: Option<u32>,
    /// Curfew window as "HH:MM-HH:MM"
    #[serde(default)]
    pub(crate) bedtime: Option<String>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/usertime/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("usertime").join("config.toml"));
        }

        // 2. Platform config dir (differs from the above on macOS/Windows)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("usertime").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.usertime.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".usertime.toml"));
        }

        paths
    }
}
