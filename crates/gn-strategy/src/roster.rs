//! Per-kind strategy dispatch.

use gn_agent::AgentMemory;
use gn_core::{AgentId, AgentKind, Direction, GnError, TileId};

use crate::{Idle, NavContext, Pursuer, ShyChaser, ShyConfig, Strategy, StrategyResult, Wanderer};

/// Maps each [`AgentKind`] to the strategy that decides for it.
///
/// A `Roster` is itself a [`Strategy`]: it looks up the agent's kind and
/// forwards.  Kinds without an entry never move.
///
/// ```rust
/// use gn_core::AgentKind;
/// use gn_strategy::{Roster, Wanderer};
///
/// let roster = Roster::new().with(AgentKind::Blinky, Wanderer);
/// assert!(roster.get(AgentKind::Blinky).is_some());
/// assert!(roster.get(AgentKind::Clyde).is_none());
/// ```
pub struct Roster {
    slots: [Option<Box<dyn Strategy>>; AgentKind::COUNT],
}

impl Roster {
    /// An empty roster: nobody moves.
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| None) }
    }

    /// The four classic ghost personalities, with the player idle.
    ///
    /// | Kind   | Strategy                      |
    /// |--------|-------------------------------|
    /// | Player | [`Idle`]                      |
    /// | Blinky | [`Wanderer`]                  |
    /// | Pinky  | [`Pursuer`]                   |
    /// | Inky   | [`Wanderer`]                  |
    /// | Clyde  | [`ShyChaser`] home to `clyde_home` |
    pub fn classic(clyde_home: TileId) -> Self {
        Self::new()
            .with(AgentKind::Player, Idle)
            .with(AgentKind::Blinky, Wanderer)
            .with(AgentKind::Pinky, Pursuer)
            .with(AgentKind::Inky, Wanderer)
            .with(AgentKind::Clyde, ShyChaser::new(ShyConfig::new(clyde_home)))
    }

    pub fn with(mut self, kind: AgentKind, strategy: impl Strategy) -> Self {
        self.set(kind, Box::new(strategy));
        self
    }

    /// Replace the strategy for `kind`.
    pub fn set(&mut self, kind: AgentKind, strategy: Box<dyn Strategy>) {
        self.slots[kind.ordinal()] = Some(strategy);
    }

    pub fn get(&self, kind: AgentKind) -> Option<&dyn Strategy> {
        self.slots[kind.ordinal()].as_deref()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Roster {
    fn next_move(
        &self,
        agent:  AgentId,
        ctx:    &NavContext<'_>,
        memory: &mut AgentMemory,
    ) -> StrategyResult<Option<Direction>> {
        let kind = ctx.agents.kind(agent).ok_or(GnError::AgentNotFound(agent))?;
        match self.get(kind) {
            Some(strategy) => strategy.next_move(agent, ctx, memory),
            None => {
                ctx.current_tile(agent)?;
                Ok(None)
            }
        }
    }
}
