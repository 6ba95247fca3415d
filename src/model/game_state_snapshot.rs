use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{GameSession, HintState, RoundState};

/// Everything a renderer needs for one frame. Taking a snapshot never changes the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub session_id: Uuid,
    pub seed: u64,
    pub round: RoundState,
    pub session: GameSession,
    pub hint: HintState,
    pub wrong_square: Option<usize>,
}

impl GameStateSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
