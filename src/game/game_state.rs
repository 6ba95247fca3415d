use log::{debug, trace, warn};
use rand::Rng;

use super::color_shades::generate_shades;
use super::grid_sizer::grid_size;
use super::hint_area::calculate_hint_area;
use crate::model::{score_for_level, GamePhase, GameRules, GameSession, HintState, RoundState};

/// Inputs to the reducer. Timers and UI clicks are both translated into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SquareClicked(usize),
    HintRequested,
    Tick,
    WrongSquareExpired,
    Restart,
}

/// Complete game state. Every change goes through [`GameState::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub rules: GameRules,
    pub round: RoundState,
    pub session: GameSession,
    pub hint: HintState,
    pub wrong_square: Option<usize>,
}

pub fn generate_round<R: Rng>(level: u32, rng: &mut R) -> RoundState {
    let size = grid_size(level);
    let shades = generate_shades(level, rng);
    let different_square_index = rng.random_range(0..size * size);
    RoundState::new(
        size,
        shades.main_color,
        shades.different_color,
        different_square_index,
    )
}

impl GameState {
    /// A fresh game waiting for its first click.
    pub fn new<R: Rng>(rules: GameRules, rng: &mut R) -> Self {
        Self {
            rules,
            round: generate_round(1, rng),
            session: GameSession::new(rules.max_lives),
            hint: HintState::new(rules.hint_level_interval),
            wrong_square: None,
        }
    }

    pub fn reduce<R: Rng>(self, action: &GameAction, rng: &mut R) -> Self {
        trace!(target: "game_state", "Reducing {:?}", action);
        match *action {
            GameAction::SquareClicked(index) => self.square_clicked(index, rng),
            GameAction::HintRequested => self.hint_requested(),
            GameAction::Tick => self.tick(),
            GameAction::WrongSquareExpired => Self {
                wrong_square: None,
                ..self
            },
            GameAction::Restart => self.restart(rng),
        }
    }

    fn square_clicked<R: Rng>(mut self, index: usize, rng: &mut R) -> Self {
        if !self.round.contains(index) {
            warn!(
                target: "game_state",
                "Ignoring click on square {} of a {}x{} grid",
                index, self.round.grid_size, self.round.grid_size
            );
            return self;
        }
        match self.session.phase {
            GamePhase::Over => return self,
            GamePhase::Idle => self.session.phase = GamePhase::Active,
            GamePhase::Active => (),
        }

        if self.round.is_different(index) {
            let previous_level = self.session.level;
            self.session.score += score_for_level(previous_level);
            self.session.level += 1;
            self.round = generate_round(self.session.level, rng);
            self.hint = self.hint.cleared();
            self.wrong_square = None;
            debug!(
                target: "game_state",
                "Level {} solved; score {}",
                previous_level, self.session.score
            );
        } else {
            self.session.lives = self.session.lives.saturating_sub(1);
            if self.session.lives == 0 {
                self.session.phase = GamePhase::Over;
                self.wrong_square = None;
                debug!(
                    target: "game_state",
                    "Game over at level {} with score {}",
                    self.session.level, self.session.score
                );
            } else {
                self.wrong_square = Some(index);
            }
        }
        self
    }

    fn hint_requested(mut self) -> Self {
        if self.session.is_over() || !self.hint.is_available(self.session.level) {
            debug!(
                target: "game_state",
                "Hint unavailable until level {}",
                self.hint.available_at_level
            );
            return self;
        }
        self.hint = HintState {
            is_active: true,
            available_at_level: self.session.level + self.rules.hint_level_interval,
            highlighted_indices: calculate_hint_area(
                self.round.grid_size,
                self.round.different_square_index,
            ),
        };
        self
    }

    fn tick(mut self) -> Self {
        if self.session.is_active() {
            self.session.elapsed_seconds += 1;
        }
        self
    }

    fn restart<R: Rng>(self, rng: &mut R) -> Self {
        let mut state = Self::new(self.rules, rng);
        state.session.phase = GamePhase::Active;
        state
    }
}
