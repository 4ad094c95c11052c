// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Initialization guard that keeps feedback quiet while the first snap settles.
//!
//! When a dial first appears, the host scrolls it to the bound value. That
//! initial scroll must not produce selection feedback, so the guard holds a
//! short settling phase before enabling it:
//!
//! ```text
//! Uninitialized --first viewport measurement--> Settling --timer fires--> Initialized
//! ```
//!
//! The guard never reads a clock. On entering [`GuardPhase::Settling`] it hands
//! out a [`SettleTimer`] that the host schedules on its UI event loop; when it
//! fires, the host calls [`InitGuard::on_timer`] with the timer's token. Hosts
//! that prefer polling can call [`InitGuard::poll`] with the current time
//! instead. Timestamps are caller-provided milliseconds.
//!
//! ```
//! use understory_dial::{GuardPhase, InitGuard};
//!
//! let mut guard = InitGuard::new(500);
//! let timer = guard.on_viewport_measured(1_000).unwrap();
//! assert_eq!(timer.deadline, 1_500);
//! assert!(!guard.feedback_enabled());
//!
//! assert!(guard.on_timer(timer.token));
//! assert_eq!(guard.phase(), GuardPhase::Initialized);
//! assert!(guard.feedback_enabled());
//! ```

/// Default settling delay in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Phase of the initialization guard.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GuardPhase {
    /// No viewport size is known yet.
    #[default]
    Uninitialized,
    /// The initial scroll position is set; waiting for the settle timer.
    Settling,
    /// Terminal: selection feedback fires on every centered-tick change.
    Initialized,
}

/// Identifies one scheduled settle timer.
///
/// Tokens from before a [`InitGuard::reset`] are stale and ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A one-shot timer the host should schedule on its UI event loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SettleTimer {
    /// Token to pass back to [`InitGuard::on_timer`].
    pub token: TimerToken,
    /// Time (caller milliseconds) at which the timer is due.
    pub deadline: u64,
    /// Delay from scheduling to `deadline`.
    pub delay: u64,
}

/// Three-phase guard gating selection feedback.
#[derive(Clone, Debug)]
pub struct InitGuard {
    phase: GuardPhase,
    delay: u64,
    generation: u64,
    deadline: Option<u64>,
}

impl Default for InitGuard {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY_MS)
    }
}

impl InitGuard {
    /// Creates an uninitialized guard that settles `delay_ms` after the first measurement.
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            phase: GuardPhase::Uninitialized,
            delay: delay_ms,
            generation: 0,
            deadline: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GuardPhase {
        self.phase
    }

    /// Settling delay in milliseconds.
    #[must_use]
    pub const fn delay(&self) -> u64 {
        self.delay
    }

    /// Returns `true` once the guard reached [`GuardPhase::Initialized`].
    #[must_use]
    pub const fn feedback_enabled(&self) -> bool {
        matches!(self.phase, GuardPhase::Initialized)
    }

    /// Deadline of the pending settle timer, if one is outstanding.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Records a viewport measurement at time `now`.
    ///
    /// The first call moves the guard to [`GuardPhase::Settling`] and returns
    /// the timer to schedule. Every later call returns `None`.
    pub fn on_viewport_measured(&mut self, now: u64) -> Option<SettleTimer> {
        if self.phase != GuardPhase::Uninitialized {
            return None;
        }
        let deadline = now.saturating_add(self.delay);
        self.phase = GuardPhase::Settling;
        self.deadline = Some(deadline);
        tracing::debug!(deadline, delay = self.delay, "dial guard settling");
        Some(SettleTimer {
            token: TimerToken(self.generation),
            deadline,
            delay: self.delay,
        })
    }

    /// Delivers a fired settle timer. Returns `true` if the guard became initialized.
    ///
    /// Stale tokens, or timers delivered in any phase other than
    /// [`GuardPhase::Settling`], are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if token.0 != self.generation || self.phase != GuardPhase::Settling {
            tracing::trace!(?token, phase = ?self.phase, "ignoring settle timer");
            return false;
        }
        self.initialize();
        true
    }

    /// Polling alternative to [`InitGuard::on_timer`]: initializes once `now`
    /// reaches the pending deadline. Returns `true` on that transition.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if self.phase == GuardPhase::Settling && now >= deadline => {
                self.initialize();
                true
            }
            _ => false,
        }
    }

    /// Returns to [`GuardPhase::Uninitialized`] and invalidates any pending timer.
    ///
    /// Used when the owning dial is torn down; a timer that fires afterwards
    /// carries a stale token and has no effect.
    pub fn reset(&mut self) {
        self.phase = GuardPhase::Uninitialized;
        self.deadline = None;
        self.generation = self.generation.wrapping_add(1);
    }

    fn initialize(&mut self) {
        self.phase = GuardPhase::Initialized;
        self.deadline = None;
        tracing::debug!("dial guard initialized");
    }
}
