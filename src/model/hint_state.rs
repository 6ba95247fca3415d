use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintState {
    pub is_active: bool,
    pub available_at_level: u32,
    pub highlighted_indices: BTreeSet<usize>,
}

impl HintState {
    pub fn new(hint_level_interval: u32) -> Self {
        Self {
            is_active: false,
            available_at_level: hint_level_interval,
            highlighted_indices: BTreeSet::new(),
        }
    }

    pub fn is_available(&self, level: u32) -> bool {
        level >= self.available_at_level
    }

    /// Drops the highlight but keeps the cooldown.
    pub fn cleared(&self) -> Self {
        Self {
            is_active: false,
            available_at_level: self.available_at_level,
            highlighted_indices: BTreeSet::new(),
        }
    }

    /// Highlighted indices while a hint is showing, empty otherwise.
    pub fn visible_area(&self) -> impl Iterator<Item = usize> + '_ {
        self.highlighted_indices
            .iter()
            .copied()
            .filter(move |_| self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_area_follows_is_active() {
        let mut hint = HintState::new(10);
        hint.highlighted_indices = BTreeSet::from([0, 1, 4, 5]);
        assert_eq!(hint.visible_area().count(), 0);

        hint.is_active = true;
        assert_eq!(hint.visible_area().collect::<Vec<_>>(), vec![0, 1, 4, 5]);

        let cleared = hint.cleared();
        assert_eq!(cleared.visible_area().count(), 0);
        assert_eq!(cleared.available_at_level, 10);
    }

    #[test]
    fn test_is_available() {
        let hint = HintState::new(10);
        assert!(!hint.is_available(9));
        assert!(hint.is_available(10));
    }
}
