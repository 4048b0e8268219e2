//! Game time and top-level run configuration.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one round
//! of decisions: every agent decides once, then every move is committed.
//! There is no wall-clock mapping in the engine; pacing belongs to the caller.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute game tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and passed to the game builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Ticks to play when calling `run`.
    pub total_ticks: u64,

    /// Call the observer's snapshot hook every N ticks.  0 disables it.
    pub snapshot_interval_ticks: u64,
}

impl GameConfig {
    /// The tick at which a full run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if `tick` falls on a snapshot boundary.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed:                    0,
            total_ticks:             1_000,
            snapshot_interval_ticks: 0,
        }
    }
}
