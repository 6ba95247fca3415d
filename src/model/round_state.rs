use serde::{Deserialize, Serialize};

use super::Color;

/// One puzzle: the grid, its two shades and where the odd square sits.
/// Rounds are replaced wholesale when the player advances, never edited.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub grid_size: usize,
    pub main_color: Color,
    pub different_color: Color,
    pub different_square_index: usize,
}

impl RoundState {
    pub fn new(
        grid_size: usize,
        main_color: Color,
        different_color: Color,
        different_square_index: usize,
    ) -> Self {
        assert!(grid_size >= 1, "grid_size must be at least 1");
        assert!(
            different_square_index < grid_size * grid_size,
            "different_square_index {} outside a {}x{} grid",
            different_square_index,
            grid_size,
            grid_size
        );
        Self {
            grid_size,
            main_color,
            different_color,
            different_square_index,
        }
    }

    pub fn square_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.square_count()
    }

    pub fn is_different(&self, index: usize) -> bool {
        index == self.different_square_index
    }

    pub fn color_at(&self, index: usize) -> Option<Color> {
        if !self.contains(index) {
            None
        } else if self.is_different(index) {
            Some(self.different_color)
        } else {
            Some(self.main_color)
        }
    }
}
