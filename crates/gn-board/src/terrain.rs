//! Static terrain and which agent kinds it admits.

use gn_core::AgentKind;

/// What a tile is made of.  Terrain never changes after the board is built.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open floor, passable by everyone.
    #[default]
    Floor,
    /// Never passable.
    Wall,
    /// Passable by the player only (ghosts treat it as a wall).
    PlayerOnly,
}

impl Terrain {
    /// Static admission rule, ignoring occupants.
    #[inline]
    pub fn admits(self, kind: AgentKind) -> bool {
        match self {
            Terrain::Floor      => true,
            Terrain::Wall       => false,
            Terrain::PlayerOnly => kind.is_player(),
        }
    }

    /// Map symbol used by the ASCII loader.
    pub fn symbol(self) -> char {
        match self {
            Terrain::Floor      => ' ',
            Terrain::Wall       => '#',
            Terrain::PlayerOnly => '=',
        }
    }
}
