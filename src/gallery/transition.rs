// SPDX-License-Identifier: MPL-2.0
//! Directional gallery transition state machine.
//!
//! A directional move (next/previous) does not swap the image
//! synchronously. The machine enters `Transitioning` holding the outgoing
//! and incoming indices; the view crossfades both slots from
//! [`Transition::progress`], and the committed index only changes once the
//! settle delay has elapsed. Until then the navigator still reports the
//! outgoing index.
//!
//! A new directional request while a transition is in flight cancels and
//! restarts: the in-flight target is committed immediately and the new
//! transition starts from it. Direct thumbnail selection cancels any
//! in-flight transition and commits with no animation.

use crate::config::TRANSITION_SETTLE_MS;
use std::time::{Duration, Instant};

/// Direction of travel for a gallery transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the next image.
    Forward,
    /// Towards the previous image.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
        started_at: Instant,
    },
}

/// The gallery crossfade machine: `Idle` or `Transitioning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    phase: Phase,
}

impl Transition {
    /// Creates an idle transition.
    #[must_use]
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Starts a transition from `from` to `to`, replacing any in-flight one.
    pub fn start(&mut self, from: usize, to: usize, direction: Direction, now: Instant) {
        self.phase = Phase::Transitioning {
            from,
            to,
            direction,
            started_at: now,
        };
    }

    /// Cancels an in-flight transition without committing anything.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Returns true while a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Returns the incoming index of an in-flight transition.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { to, .. } => Some(to),
            Phase::Idle => None,
        }
    }

    /// Returns the outgoing index of an in-flight transition.
    #[must_use]
    pub fn source(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { from, .. } => Some(from),
            Phase::Idle => None,
        }
    }

    /// Returns the direction of an in-flight transition.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.phase {
            Phase::Transitioning { direction, .. } => Some(direction),
            Phase::Idle => None,
        }
    }

    /// Crossfade progress in `0.0..=1.0` at `now`; `1.0` when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 1.0,
            Phase::Transitioning { started_at, .. } => {
                let elapsed = now.saturating_duration_since(started_at).as_millis() as f32;
                (elapsed / TRANSITION_SETTLE_MS as f32).clamp(0.0, 1.0)
            }
        }
    }

    /// Commits the transition if the settle delay has elapsed at `now`.
    ///
    /// Returns the incoming index to commit, or `None` when the transition
    /// is still in flight (or the machine is idle). On commit the machine
    /// returns to `Idle`.
    pub fn settle(&mut self, now: Instant) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { to, started_at, .. }
                if now.saturating_duration_since(started_at) >= settle_delay() =>
            {
                self.phase = Phase::Idle;
                Some(to)
            }
            _ => None,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed settle delay before a directional move commits.
#[must_use]
pub fn settle_delay() -> Duration {
    Duration::from_millis(TRANSITION_SETTLE_MS)
}
