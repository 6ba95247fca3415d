use std::fs;
use std::path::{Path, PathBuf};

use log::{info, trace};
use uuid::Uuid;

use super::settings::Settings;
use crate::error::LeaderboardError;
use crate::model::{ScoreEntry, ScorePage};

/// Backend that keeps the high score table. Pages are numbered from 1 and ordered by score,
/// highest first.
pub trait LeaderboardStore {
    fn submit(&mut self, entry: &ScoreEntry) -> Result<(), LeaderboardError>;
    fn fetch_page(&self, page: usize) -> Result<ScorePage, LeaderboardError>;
}

/// Identifies an in-flight leaderboard call. Results are only applied while the ticket's session
/// is still the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeaderboardTicket {
    pub session_id: Uuid,
    pub request_id: u64,
}

/// What the UI shows of the leaderboard: the last page loaded and whether a call is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardView {
    pub scores: Vec<ScoreEntry>,
    pub current_page: usize,
    pub total_pages: usize,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl Default for LeaderboardView {
    fn default() -> Self {
        Self {
            scores: Vec::new(),
            current_page: 1,
            total_pages: 1,
            is_loading: false,
            last_error: None,
        }
    }
}

fn sort_by_rank(entries: &mut [ScoreEntry]) {
    // stable, so equal scores keep submission order
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.submitted_at.cmp(&b.submitted_at))
    });
}

/// Leaderboard kept on this machine, optionally mirrored to a JSON file.
#[derive(Debug)]
pub struct LocalLeaderboard {
    path: Option<PathBuf>,
    page_size: usize,
    entries: Vec<ScoreEntry>,
}

impl LocalLeaderboard {
    pub fn in_memory(page_size: usize) -> Self {
        Self {
            path: None,
            page_size: page_size.max(1),
            entries: Vec::new(),
        }
    }

    /// Opens the table stored at `path`; a missing file is an empty table.
    pub fn open(path: &Path, page_size: usize) -> Result<Self, LeaderboardError> {
        let mut entries: Vec<ScoreEntry> = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        sort_by_rank(&mut entries);
        trace!(target: "leaderboard", "Loaded {} scores from {:?}", entries.len(), path);
        Ok(Self {
            path: Some(path.to_path_buf()),
            page_size: page_size.max(1),
            entries,
        })
    }

    /// Opens the table at `path` (or an in-memory one) paged as `settings` asks.
    pub fn from_settings(
        settings: &Settings,
        path: Option<&Path>,
    ) -> Result<Self, LeaderboardError> {
        match path {
            Some(path) => Self::open(path, settings.leaderboard_page_size),
            None => Ok(Self::in_memory(settings.leaderboard_page_size)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self, entries: &[ScoreEntry]) -> Result<(), LeaderboardError> {
        if let Some(path) = &self.path {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let contents = serde_json::to_string_pretty(entries)?;
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

impl LeaderboardStore for LocalLeaderboard {
    fn submit(&mut self, entry: &ScoreEntry) -> Result<(), LeaderboardError> {
        let mut entries = self.entries.clone();
        entries.push(entry.clone());
        sort_by_rank(&mut entries);

        // only keep the entry once it is on disk
        self.save(&entries)?;
        self.entries = entries;
        info!(
            target: "leaderboard",
            "Recorded {} with {} points at level {}",
            entry.name, entry.score, entry.level
        );
        Ok(())
    }

    fn fetch_page(&self, page: usize) -> Result<ScorePage, LeaderboardError> {
        if page == 0 {
            return Err(LeaderboardError::Rejected(
                "page numbers start at 1".to_string(),
            ));
        }
        let total_pages = self.entries.len().div_ceil(self.page_size).max(1);
        let entries = match (page - 1).checked_mul(self.page_size) {
            Some(offset) if offset < self.entries.len() => self
                .entries
                .iter()
                .skip(offset)
                .take(self.page_size)
                .cloned()
                .collect(),
            _ => Vec::new(),
        };
        Ok(ScorePage {
            entries,
            page,
            total_pages,
        })
    }
}
