use std::fs;
use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

use crate::model::GameRules;

#[serde_as]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub rules: GameRules,

    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_tick_interval")]
    pub tick_interval: Duration,

    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_wrong_square_flash")]
    pub wrong_square_flash: Duration,

    #[serde(default = "default_page_size")]
    pub leaderboard_page_size: usize,

    /// Fixed RNG seed; `None` draws one from the `SEED` variable or the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

// Helper functions for default values
fn default_version() -> u32 {
    2
}
fn default_tick_interval() -> Duration {
    Duration::from_millis(1000)
}
fn default_wrong_square_flash() -> Duration {
    Duration::from_millis(600)
}
fn default_page_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            rules: GameRules::default(),
            tick_interval: default_tick_interval(),
            wrong_square_flash: default_wrong_square_flash(),
            leaderboard_page_size: default_page_size(),
            seed: None,
        }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(target: "settings", "Ignoring invalid settings in {:?}: {}", path, err)
                }
            },
            Err(err) => {
                warn!(target: "settings", "No settings at {:?}: {}", path, err)
            }
        }
        Settings::default()
    }

    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
    }

    fn migrate(&mut self) {
        if self.version < 2 {
            // version 1 stored no leaderboard page size; zero would mean no paging at all
            if self.leaderboard_page_size == 0 {
                self.leaderboard_page_size = default_page_size();
            }
            self.version = 2;
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }

    pub fn effective_seed(&self) -> Option<u64> {
        self.seed.or_else(Self::seed_from_env)
    }
}
