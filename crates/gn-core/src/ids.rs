//! Strongly typed identifier wrappers.
//!
//! Tiles and agents live in flat arenas (`Vec`s) owned by the board and the
//! agent store; these ids are indices into them.  All ids are
//! `Copy + Ord + Hash` so they can be map keys and sort keys without ceremony.
//!
//! There is deliberately no "invalid" sentinel: an absent tile or agent is
//! always spelled `Option::None`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent (player or ghost) in the agent store.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a tile in the board's tile arena.
    pub struct TileId(u32);
}
