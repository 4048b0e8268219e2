//! The shy personality: wanders while the target is far away and runs home
//! once it gets close.

use gn_agent::AgentMemory;
use gn_core::{AgentId, Direction, TileId};
use tracing::trace;

use crate::select::{fallback, step_toward};
use crate::{NavContext, Strategy, StrategyResult};

/// Configuration for [`ShyChaser`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShyConfig {
    /// Manhattan distance at or below which the agent retreats.
    pub threshold: u32,

    /// Where the agent retreats to.
    pub retreat: TileId,
}

impl ShyConfig {
    pub const DEFAULT_THRESHOLD: u32 = 8;

    /// Default threshold, retreating to `retreat`.
    pub fn new(retreat: TileId) -> Self {
        Self { threshold: Self::DEFAULT_THRESHOLD, retreat }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Threshold chaser.
///
/// | Target distance        | Move                                          |
/// |------------------------|-----------------------------------------------|
/// | unknown                | random fallback                               |
/// | `> threshold`          | random fallback                               |
/// | `<= threshold`         | greedy step toward `retreat`, else random     |
///
/// The target is `ctx.target`, or the last one the agent saw.
pub struct ShyChaser {
    pub config: ShyConfig,
}

impl ShyChaser {
    pub fn new(config: ShyConfig) -> Self {
        Self { config }
    }
}

impl Strategy for ShyChaser {
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        let tile = ctx.current_tile(agent)?;
        let target = memory.remember_target(ctx.target);
        let near = target
            .and_then(|t| ctx.distance(tile, t))
            .is_some_and(|d| d <= self.config.threshold);

        if near {
            let retreat = self.config.retreat;
            if let Some(dir) = step_toward(ctx, tile, retreat, agent, |a, b| ctx.distance(a, b)) {
                trace!(%agent, %tile, %retreat, %dir, "retreat");
                return Ok(Some(dir));
            }
        }
        Ok(fallback(ctx, tile, agent, &mut memory.rng))
    }
}
