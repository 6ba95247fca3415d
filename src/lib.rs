mod destroyable;
pub mod error;
pub mod events;
pub mod game;
pub mod helpers;
pub mod model;

pub use destroyable::Destroyable;
pub use error::{GameError, LeaderboardError};
