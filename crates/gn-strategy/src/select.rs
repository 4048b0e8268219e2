//! The shared move selectors.
//!
//! Everything here is a stateless free function over a [`TileGraph`], so
//! every strategy uses the same rules and tests can drive the selectors with
//! stub graphs and stub random sources.
//!
//! # Random fallback
//!
//! [`random_move`] looks at the four neighbours in canonical order
//! (`Direction::ALL`), keeps those that exist and are accessible to the
//! agent, and draws one uniformly.  An empty candidate set is the *trapped*
//! outcome and yields `None`.
//!
//! # Greedy step
//!
//! [`step_toward`] keeps the accessible neighbours that are strictly closer
//! to a goal and takes the closest, earliest in canonical order on ties.
//! It never searches further than one step.

use gn_board::TileGraph;
use gn_core::{AgentId, Direction, TileId};
use rand::Rng;
use tracing::{debug, trace};

use crate::{NavContext, StrategyResult};

/// The neighbour of `tile` in `dir` if it exists and `agent` may enter it.
#[inline]
pub fn accessible_step<G>(graph: &G, tile: TileId, dir: Direction, agent: AgentId) -> Option<TileId>
where
    G: TileGraph + ?Sized,
{
    graph.neighbor(tile, dir).filter(|&next| graph.is_accessible_to(next, agent))
}

/// Directions out of `tile` that `agent` may take, in canonical order.
pub fn accessible_directions<G>(graph: &G, tile: TileId, agent: AgentId) -> Vec<Direction>
where
    G: TileGraph + ?Sized,
{
    Direction::ALL
        .into_iter()
        .filter(|&dir| accessible_step(graph, tile, dir, agent).is_some())
        .collect()
}

/// Uniformly random accessible direction out of `tile`, or `None` when the
/// agent is trapped.
///
/// Draws from `rng` only when there are two or more candidates.
pub fn random_move<G, R>(graph: &G, tile: TileId, agent: AgentId, rng: &mut R) -> Option<Direction>
where
    G: TileGraph + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates = [Direction::North; 4];
    let mut n = 0;
    for dir in Direction::ALL {
        if accessible_step(graph, tile, dir, agent).is_some() {
            candidates[n] = dir;
            n += 1;
        }
    }
    match n {
        0 => None,
        1 => Some(candidates[0]),
        _ => Some(candidates[rng.gen_range(0..n)]),
    }
}

/// [`random_move`] from the agent's current tile.
///
/// # Errors
///
/// Fails if the agent is unknown or has not been placed.
pub fn random_move_for<R>(ctx: &NavContext<'_>, agent: AgentId, rng: &mut R) -> StrategyResult<Option<Direction>>
where
    R: Rng + ?Sized,
{
    let tile = ctx.current_tile(agent)?;
    Ok(random_move(ctx, tile, agent, rng))
}

/// The accessible direction that brings `agent` strictly closer to `goal`,
/// or `None` if no neighbour does.
///
/// `distance` is the metric; a `None` distance (e.g. a tile without a grid
/// position) disqualifies that tile.
pub fn step_toward<G, F>(
    graph:    &G,
    tile:     TileId,
    goal:     TileId,
    agent:    AgentId,
    distance: F,
) -> Option<Direction>
where
    G: TileGraph + ?Sized,
    F: Fn(TileId, TileId) -> Option<u32>,
{
    let here = distance(tile, goal)?;
    Direction::ALL
        .into_iter()
        .filter_map(|dir| {
            let next = accessible_step(graph, tile, dir, agent)?;
            let d = distance(next, goal)?;
            (d < here).then_some((d, dir))
        })
        .min_by_key(|&(d, _)| d)
        .map(|(_, dir)| dir)
}

/// Random fallback with the agent's own RNG, logging the trapped outcome.
pub(crate) fn fallback<R>(ctx: &NavContext<'_>, tile: TileId, agent: AgentId, rng: &mut R) -> Option<Direction>
where
    R: Rng + ?Sized,
{
    let dir = random_move(ctx, tile, agent, rng);
    match dir {
        Some(d) => trace!(%agent, %tile, dir = %d, "random move"),
        None    => debug!(%agent, %tile, tick = %ctx.tick, "trapped"),
    }
    dir
}
