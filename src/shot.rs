//! Shot resolution against a board.

use crate::board::Board;
use crate::common::{BoardError, CellState, Coord};
use crate::ship::ShipKind;

/// Outcome of one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    pub at: Coord,
    pub hit: bool,
    /// Ship sunk by this very shot, if any.
    pub sunk: Option<ShipKind>,
}

/// Fire at `at` on `board`.
///
/// A cell that is already hit or missed is rejected with
/// [`BoardError::AlreadyTargeted`] and nothing changes. Otherwise the cell
/// becomes `Hit` or `Miss`, the owning ship's segment is marked, and the
/// result reports a ship that went down with this shot.
pub fn shoot(board: &mut Board, at: Coord) -> Result<ShotResult, BoardError> {
    if board.cell(at)?.is_tried() {
        return Err(BoardError::AlreadyTargeted);
    }

    let mut sunk = None;
    let mut hit = false;
    for ship in board.ships_mut().filter(|s| s.is_afloat()) {
        if ship.register_hit(at) {
            hit = true;
            if ship.is_sunk() {
                sunk = Some(ship.kind());
            }
            break;
        }
    }

    board.set_cell(at, if hit { CellState::Hit } else { CellState::Miss });
    log::debug!(
        "shot at {}: {}{}",
        at,
        if hit { "hit" } else { "miss" },
        sunk.map(|k| alloc::format!(", sank {}", k)).unwrap_or_default()
    );
    Ok(ShotResult { at, hit, sunk })
}
