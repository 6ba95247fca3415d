use std::collections::BTreeSet;

use super::{GameStateSnapshot, RoundState, ScheduledTimer, ScoreEntry, ScorePage, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u32,
    pub level: u32,
    pub time: u64,
}

#[derive(Debug, Clone)]
pub enum GameEngineEvent {
    StateChanged(GameStateSnapshot),
    RoundAdvanced {
        level: u32,
        points: u32,
        round: RoundState,
    },
    WrongSquare {
        index: usize,
        lives: u32,
    },
    WrongSquareCleared,
    GameOver(FinalScore),
    HintShown(BTreeSet<usize>),
    TimerScheduled(ScheduledTimer),
    TimerCancelled(TimerHandle),
    LeaderboardUpdated(ScorePage),
    ScoreSubmitted(ScoreEntry),
    LeaderboardFailed(String),
}
