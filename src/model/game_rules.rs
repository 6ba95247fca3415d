use serde::{Deserialize, Serialize};

pub const MAX_LIVES: u32 = 3;
pub const HINT_LEVEL_INTERVAL: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(default = "default_max_lives")]
    pub max_lives: u32,
    /// Levels between hints; also the level the first hint unlocks at.
    #[serde(default = "default_hint_level_interval")]
    pub hint_level_interval: u32,
}

fn default_max_lives() -> u32 {
    MAX_LIVES
}
fn default_hint_level_interval() -> u32 {
    HINT_LEVEL_INTERVAL
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            hint_level_interval: HINT_LEVEL_INTERVAL,
        }
    }
}
