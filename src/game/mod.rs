pub mod color_shades;
pub mod game_engine;
pub mod game_state;
pub mod grid_sizer;
pub mod hint_area;
pub mod leaderboard;
pub mod settings;

pub use color_shades::{generate_shades, shade_delta, Shades};
pub use game_engine::GameEngine;
pub use game_state::{generate_round, GameAction, GameState};
pub use grid_sizer::grid_size;
pub use hint_area::calculate_hint_area;
pub use leaderboard::{LeaderboardStore, LeaderboardTicket, LeaderboardView, LocalLeaderboard};
pub use settings::Settings;
