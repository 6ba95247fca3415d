use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Waiting for the first click.
    #[default]
    Idle,
    /// Timer running, clicks accepted.
    Active,
    /// Out of lives; only a restart leaves this phase.
    Over,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub level: u32,
    pub score: u32,
    pub elapsed_seconds: u64,
    pub lives: u32,
    pub phase: GamePhase,
}

impl GameSession {
    pub fn new(max_lives: u32) -> Self {
        Self {
            level: 1,
            score: 0,
            elapsed_seconds: 0,
            lives: max_lives,
            phase: GamePhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

/// Points awarded for solving a round at `level`: `floor(100 * sqrt(level))`.
pub fn score_for_level(level: u32) -> u32 {
    (100.0 * f64::from(level).sqrt()).floor() as u32
}
