use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard storage failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("leaderboard data could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid player name {0:?}: must be 1 to 20 characters")]
    InvalidName(String),
    #[error("leaderboard rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("scores can only be submitted once the game is over")]
    NotGameOver,
    #[error("this game's score has already been submitted")]
    AlreadySubmitted,
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}
