//! Pull-to-refresh state machine
//!
//! Tracks the vertical pull offset accumulated from pointer drags while the
//! list is scrolled to the top, and decides on release whether the pull
//! crossed the trigger distance. The indicator only ever reads this state.

use crate::constants::DRAG_MULTIPLIER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPhase {
    Idle,
    Dragging,
    Refreshing,
}

#[derive(Debug)]
pub struct PullState {
    offset: f32,
    trigger: f32,
    phase: PullPhase,
}

impl PullState {
    pub fn new(trigger: f32) -> Self {
        Self {
            offset: 0.0,
            trigger,
            phase: PullPhase::Idle,
        }
    }

    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn trigger_distance(&self) -> f32 {
        self.trigger
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == PullPhase::Refreshing
    }

    /// Pull progress ratio, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        (self.offset / self.trigger).clamp(0.0, 1.0)
    }

    /// Feed a pointer y-delta into the pull. Deltas are scaled for
    /// resistance and the offset never goes negative. Ignored while a
    /// refresh is running.
    pub fn drag_by(&mut self, delta_y: f32) {
        if self.phase == PullPhase::Refreshing {
            return;
        }
        self.offset = (self.offset + delta_y * DRAG_MULTIPLIER).max(0.0);
        self.phase = if self.offset > 0.0 {
            PullPhase::Dragging
        } else {
            PullPhase::Idle
        };
    }

    /// End the gesture. Returns true if the pull crossed the trigger
    /// distance, in which case the machine enters `Refreshing` with the
    /// offset pinned at the trigger; otherwise it goes idle and the offset
    /// is left to settle back to zero.
    pub fn release(&mut self) -> bool {
        if self.phase != PullPhase::Dragging {
            return false;
        }
        if self.offset >= self.trigger {
            self.phase = PullPhase::Refreshing;
            self.offset = self.trigger;
            true
        } else {
            self.phase = PullPhase::Idle;
            false
        }
    }

    /// Refresh cycle completed: go idle and let the offset settle away.
    pub fn finish(&mut self) {
        if self.phase == PullPhase::Refreshing {
            self.phase = PullPhase::Idle;
        }
    }

    /// Relax a released offset toward zero, one step per frame. Returns
    /// true while still moving (caller keeps repainting).
    pub fn settle(&mut self) -> bool {
        if self.phase != PullPhase::Idle || self.offset <= 0.0 {
            return false;
        }
        self.offset *= 0.75;
        if self.offset < 0.5 {
            self.offset = 0.0;
        }
        self.offset > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRIGGER_DISTANCE;

    fn pulled(by: f32) -> PullState {
        let mut state = PullState::new(TRIGGER_DISTANCE);
        // Raw pointer distance; drag_by applies the 0.5 multiplier.
        state.drag_by(by / DRAG_MULTIPLIER);
        state
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(pulled(0.0).progress(), 0.0);
        assert_eq!(pulled(-30.0).progress(), 0.0);
        assert_eq!(pulled(TRIGGER_DISTANCE / 2.0).progress(), 0.5);
        assert_eq!(pulled(TRIGGER_DISTANCE).progress(), 1.0);
        assert_eq!(pulled(TRIGGER_DISTANCE * 3.0).progress(), 1.0);
    }

    #[test]
    fn release_below_threshold_goes_idle() {
        let mut state = pulled(TRIGGER_DISTANCE - 1.0);
        assert_eq!(state.phase(), PullPhase::Dragging);
        assert!(!state.release());
        assert_eq!(state.phase(), PullPhase::Idle);
    }

    #[test]
    fn release_at_threshold_triggers() {
        let mut state = pulled(TRIGGER_DISTANCE);
        assert!(state.release());
        assert_eq!(state.phase(), PullPhase::Refreshing);
        assert_eq!(state.offset(), TRIGGER_DISTANCE);
    }

    #[test]
    fn overshoot_pins_offset_to_trigger() {
        let mut state = pulled(TRIGGER_DISTANCE * 2.5);
        assert!(state.release());
        assert_eq!(state.offset(), TRIGGER_DISTANCE);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn drags_are_suppressed_while_refreshing() {
        let mut state = pulled(TRIGGER_DISTANCE);
        state.release();
        state.drag_by(100.0);
        assert_eq!(state.offset(), TRIGGER_DISTANCE);
        assert_eq!(state.phase(), PullPhase::Refreshing);
    }

    #[test]
    fn release_while_idle_does_not_trigger() {
        let mut state = PullState::new(TRIGGER_DISTANCE);
        assert!(!state.release());
        assert_eq!(state.phase(), PullPhase::Idle);
    }

    #[test]
    fn settle_converges_to_zero() {
        let mut state = pulled(TRIGGER_DISTANCE - 10.0);
        state.release();
        let mut steps = 0;
        while state.settle() {
            steps += 1;
            assert!(steps < 100, "settle did not converge");
        }
        assert_eq!(state.offset(), 0.0);
        assert!(!state.settle());
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut state = pulled(TRIGGER_DISTANCE);
        state.release();
        state.finish();
        assert_eq!(state.phase(), PullPhase::Idle);
        // Leftover offset settles away afterwards.
        while state.settle() {}
        assert_eq!(state.offset(), 0.0);
    }
}
