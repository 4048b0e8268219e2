//! ASCII map loader for fixtures and demos.
//!
//! # Map format
//!
//! One string per row; row 0 is the top (north) edge.  Every character
//! becomes one tile at `(column, row)`:
//!
//! | Char        | Tile                                   |
//! |-------------|----------------------------------------|
//! | `#`         | `Terrain::Wall`                        |
//! | ` ` or `.`  | `Terrain::Floor`                       |
//! | `=`         | `Terrain::PlayerOnly`                  |
//! | `P`         | `Terrain::Floor`, player spawn point   |
//! | `G`         | `Terrain::Floor`, ghost spawn point    |
//!
//! Rows may have different lengths; missing cells are simply absent tiles,
//! so their neighbours report `None` in that direction.  Tiles are linked as
//! a grid (see [`BoardBuilder::connect_grid`]).
//!
//! ```
//! use gn_board::parse_rows;
//!
//! let board = parse_rows(&["###", "#P#", "###"], false).unwrap();
//! assert_eq!(board.tile_count(), 9);
//! assert_eq!(board.player_starts().len(), 1);
//! ```

use gn_core::GridPos;

use crate::{Board, BoardBuilder, BoardError, BoardResult, Terrain};

/// Parse a map given as individual rows.
pub fn parse_rows<S: AsRef<str>>(rows: &[S], wrap: bool) -> BoardResult<Board> {
    let mut b = BoardBuilder::new();

    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.as_ref().chars().enumerate() {
            let pos = GridPos::new(col as i32, row as i32);
            let terrain = match ch {
                '#'       => Terrain::Wall,
                ' ' | '.' => Terrain::Floor,
                '='       => Terrain::PlayerOnly,
                'P' | 'G' => Terrain::Floor,
                other     => return Err(BoardError::UnknownSymbol { row, col, ch: other }),
            };
            let tile = b.add_tile(pos, terrain);
            match ch {
                'P' => b.mark_player_start(tile),
                'G' => b.mark_ghost_start(tile),
                _   => {}
            }
        }
    }

    b.connect_grid(wrap);
    b.build()
}

/// Parse a multi-line map.  Leading and trailing blank lines are ignored so
/// raw string literals can start on their own line.
pub fn parse_ascii(text: &str, wrap: bool) -> BoardResult<Board> {
    let rows: Vec<&str> = text.lines().collect();
    let first = rows.iter().position(|l| !l.trim().is_empty()).unwrap_or(rows.len());
    let last = rows.iter().rposition(|l| !l.trim().is_empty()).map_or(first, |i| i + 1);
    parse_rows(&rows[first..last], wrap)
}
