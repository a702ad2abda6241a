//! Key-repeat timing for held keys.
//!
//! While a bound key is held, its action replays after an initial delay
//! and then at a fixed interval. The binding is data: a [`RepeatTable`]
//! maps each action kind to its timing, consulted when a key-down is
//! dispatched, and the armed [`KeyRepeat`] stores the action value itself
//! so replay needs no callbacks.
//!
//! At most one action is armed at a time. Arming a new one replaces the
//! old state unconditionally; the old key's later release is ignored
//! because it is no longer in the armed set.

use std::collections::HashMap;

use crate::error::EditError;
use crate::event::Key;
use crate::messages::{EditKind, EditMsg};

/// Delay before the first repeat, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;
/// Interval between repeats after the delay, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// Repeat timing for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    pub delay_ms: u64,
    pub interval_ms: u64,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

/// Table mapping action kinds to repeat timing.
///
/// Every editing action repeats with the default 500/50 timing out of the
/// box; individual kinds can be overridden or disabled.
#[derive(Debug, Clone)]
pub struct RepeatTable {
    timings: HashMap<EditKind, RepeatTiming>,
}

impl Default for RepeatTable {
    fn default() -> Self {
        let mut timings = HashMap::new();
        for kind in [
            EditKind::Newline,
            EditKind::Backspace,
            EditKind::DeleteForward,
            EditKind::InsertTab,
            EditKind::Move,
        ] {
            timings.insert(kind, RepeatTiming::default());
        }
        Self { timings }
    }
}

impl RepeatTable {
    /// The timing for an action kind, or `None` when it does not repeat.
    pub fn timing(&self, kind: EditKind) -> Option<RepeatTiming> {
        self.timings.get(&kind).copied()
    }

    /// Overrides the timing for one action kind.
    pub fn set(&mut self, kind: EditKind, timing: RepeatTiming) {
        self.timings.insert(kind, timing);
    }

    /// Removes an action kind from the table so it never repeats.
    pub fn disable(&mut self, kind: EditKind) {
        self.timings.remove(&kind);
    }
}

/// The armed state: which keys hold the repeat, what replays, and the
/// clock bookkeeping.
#[derive(Debug, Clone)]
struct RepeatState {
    keys: Vec<Key>,
    action: EditMsg,
    timing: RepeatTiming,
    started_at_ms: u64,
    /// Time since the last replay. Starts saturated so the first replay
    /// fires on the first tick past the delay.
    since_fire_ms: u64,
}

/// Frame-driven repeat controller.
///
/// Idle until [`arm`](Self::arm) is called from a key-down; back to idle
/// when any armed key is released. While armed, [`tick`](Self::tick)
/// yields at most one replay per frame.
#[derive(Debug, Clone, Default)]
pub struct KeyRepeat {
    state: Option<RepeatState>,
}

impl KeyRepeat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `action`, replacing any previously armed state.
    ///
    /// `keys` is the set whose release disarms the controller; `now_ms`
    /// is the current monotonic clock reading.
    pub fn arm(&mut self, keys: Vec<Key>, action: EditMsg, timing: RepeatTiming, now_ms: u64) {
        tracing::trace!(?action, ?keys, now_ms, "repeat armed");
        self.state = Some(RepeatState {
            keys,
            action,
            timing,
            started_at_ms: now_ms,
            since_fire_ms: u64::MAX,
        });
    }

    /// Handles a key release.
    ///
    /// Disarms when `key` is in the armed set. A release for any other
    /// key (including keys whose state was already replaced) reports
    /// `InvalidTransition`; callers treat it as a no-op.
    pub fn release(&mut self, key: Key) -> Result<(), EditError> {
        match &self.state {
            Some(state) if state.keys.contains(&key) => {
                tracing::trace!(?key, "repeat disarmed");
                self.state = None;
                Ok(())
            }
            _ => Err(EditError::InvalidTransition),
        }
    }

    /// True while an action is armed.
    pub fn is_armed(&self) -> bool {
        self.state.is_some()
    }

    /// The armed action, if any.
    pub fn armed_action(&self) -> Option<EditMsg> {
        self.state.as_ref().map(|state| state.action)
    }

    /// Advances the controller by one frame.
    ///
    /// `now_ms` is the current monotonic clock reading and `elapsed_ms`
    /// the frame's elapsed time. Before the delay has passed nothing
    /// happens; afterwards the accumulated time since the last replay is
    /// checked against the interval, and at most one replay is returned.
    pub fn tick(&mut self, now_ms: u64, elapsed_ms: u64) -> Option<EditMsg> {
        let state = self.state.as_mut()?;
        let mut fired = None;
        if now_ms.saturating_sub(state.started_at_ms) >= state.timing.delay_ms {
            if state.since_fire_ms >= state.timing.interval_ms {
                fired = Some(state.action);
                state.since_fire_ms = 0;
            }
            state.since_fire_ms = state.since_fire_ms.saturating_add(elapsed_ms);
        }
        fired
    }
}
