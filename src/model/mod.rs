mod color;
mod game_engine_command;
mod game_engine_event;
mod game_rules;
mod game_session;
pub mod game_state_snapshot;
mod hint_state;
mod round_state;
mod score_entry;
mod timer_state;

pub use color::Color;
pub use game_engine_command::GameEngineCommand;
pub use game_engine_event::{FinalScore, GameEngineEvent};
pub use game_rules::{GameRules, HINT_LEVEL_INTERVAL, MAX_LIVES};
pub use game_session::{score_for_level, GamePhase, GameSession};
pub use game_state_snapshot::GameStateSnapshot;
pub use hint_state::HintState;
pub use round_state::RoundState;
pub use score_entry::{ScoreEntry, ScorePage, MAX_NAME_LENGTH};
pub use timer_state::{ScheduledTimer, TimerHandle, TimerKind, TimerSchedule};
