use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Repeating one-second clock, runs while the session is active.
    GameTick,
    /// One-shot that clears the wrong-square flag.
    WrongSquareFlash,
}

/// Identity of a timer the host has been asked to run. A handle is only honored while it is the
/// live handle for its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle {
    pub kind: TimerKind,
    pub session_id: Uuid,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub handle: TimerHandle,
    pub delay: Duration,
    pub repeating: bool,
}

/// Tracks which timer handles are live. At most one handle per kind.
#[derive(Debug, Default)]
pub struct TimerSchedule {
    next_generation: u64,
    game_tick: Option<TimerHandle>,
    wrong_square: Option<TimerHandle>,
}

impl TimerSchedule {
    fn slot(&mut self, kind: TimerKind) -> &mut Option<TimerHandle> {
        match kind {
            TimerKind::GameTick => &mut self.game_tick,
            TimerKind::WrongSquareFlash => &mut self.wrong_square,
        }
    }

    pub fn live(&self, kind: TimerKind) -> Option<TimerHandle> {
        match kind {
            TimerKind::GameTick => self.game_tick,
            TimerKind::WrongSquareFlash => self.wrong_square,
        }
    }

    pub fn is_live(&self, handle: &TimerHandle) -> bool {
        self.live(handle.kind).as_ref() == Some(handle)
    }

    /// Issues a new handle for `kind`. Returns it with the handle it replaced, which the host
    /// must cancel.
    pub fn schedule(
        &mut self,
        kind: TimerKind,
        session_id: Uuid,
    ) -> (TimerHandle, Option<TimerHandle>) {
        self.next_generation += 1;
        let handle = TimerHandle {
            kind,
            session_id,
            generation: self.next_generation,
        };
        let replaced = self.slot(kind).replace(handle);
        (handle, replaced)
    }

    pub fn cancel(&mut self, kind: TimerKind) -> Option<TimerHandle> {
        self.slot(kind).take()
    }

    pub fn cancel_all(&mut self) -> Vec<TimerHandle> {
        [TimerKind::GameTick, TimerKind::WrongSquareFlash]
            .into_iter()
            .filter_map(|kind| self.cancel(kind))
            .collect()
    }
}
