use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

pub const MAX_NAME_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub level: u32,
    /// seconds
    pub time: u64,
    /// unix seconds
    pub submitted_at: i64,
}

impl ScoreEntry {
    pub fn new(name: &str, score: u32, level: u32, time: u64) -> Result<Self, LeaderboardError> {
        let name = name.trim();
        let length = name.chars().count();
        if length == 0 || length > MAX_NAME_LENGTH {
            return Err(LeaderboardError::InvalidName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            score,
            level,
            time,
            submitted_at: chrono::Utc::now().timestamp(),
        })
    }
}

/// One page of a leaderboard, highest score first. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePage {
    pub entries: Vec<ScoreEntry>,
    pub page: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let entry = ScoreEntry::new("  ada  ", 414, 4, 12).unwrap();
        assert_eq!(entry.name, "ada");
        assert!(entry.submitted_at > 0);
    }

    #[test]
    fn test_rejects_blank_and_long_names() {
        assert!(matches!(
            ScoreEntry::new("   ", 1, 1, 1),
            Err(LeaderboardError::InvalidName(_))
        ));
        assert!(ScoreEntry::new(&"x".repeat(21), 1, 1, 1).is_err());
        assert!(ScoreEntry::new(&"x".repeat(20), 1, 1, 1).is_ok());
        // counted in characters, not bytes
        assert!(ScoreEntry::new(&"é".repeat(20), 1, 1, 1).is_ok());
    }
}
