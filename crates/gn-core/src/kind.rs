//! Agent kind tag shared by the board (terrain admission), the agent store,
//! and the strategy roster.

/// What an agent is.  The kind selects the strategy variant for ghosts and
/// decides which terrain the agent may enter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// The pursued, externally steered agent.
    #[default]
    Player,
    /// Red ghost.
    Blinky,
    /// Pink ghost.
    Pinky,
    /// Cyan ghost.
    Inky,
    /// Orange ghost.
    Clyde,
}

impl AgentKind {
    /// Number of variants; sizes per-kind lookup tables.
    pub const COUNT: usize = 5;

    pub const GHOSTS: [AgentKind; 4] = [
        AgentKind::Blinky,
        AgentKind::Pinky,
        AgentKind::Inky,
        AgentKind::Clyde,
    ];

    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, AgentKind::Player)
    }

    #[inline]
    pub fn is_ghost(self) -> bool {
        !self.is_player()
    }

    /// Stable index in `0..COUNT`.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Player => "player",
            AgentKind::Blinky => "blinky",
            AgentKind::Pinky  => "pinky",
            AgentKind::Inky   => "inky",
            AgentKind::Clyde  => "clyde",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
