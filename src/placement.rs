//! Ship placement: manual commits from a cursor footprint and randomized
//! placement of a whole fleet.

use alloc::vec::Vec;

use crate::board::{Board, Mask};
use crate::common::{BoardError, CellState, Coord};
use crate::config::BOARD_SIZE;
use crate::random::RandomSource;
use crate::ship::{Orientation, Ship, ShipKind};

/// Cells a ship of `length` covers from `origin` in `orientation`.
pub fn footprint(
    origin: Coord,
    length: usize,
    orientation: Orientation,
) -> Result<Vec<Coord>, BoardError> {
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => Coord::try_new(origin.x + i, origin.y),
            Orientation::Vertical => Coord::try_new(origin.x, origin.y + i),
        })
        .collect()
}

/// Straight, gap-free line in either direction.
fn is_line(cells: &[Coord]) -> bool {
    if cells.len() < 2 {
        return true;
    }
    let same_row = cells.iter().all(|c| c.y == cells[0].y);
    let same_col = cells.iter().all(|c| c.x == cells[0].x);
    let mut along: Vec<usize> = match (same_row, same_col) {
        (true, _) => cells.iter().map(|c| c.x).collect(),
        (_, true) => cells.iter().map(|c| c.y).collect(),
        _ => return false,
    };
    along.sort_unstable();
    along.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Commit `kind` onto `board` over `cells`.
///
/// Rejects without touching the board if the ship is already placed, the
/// footprint has the wrong size or shape, or any cell is occupied.
pub fn place(board: &mut Board, kind: ShipKind, cells: &[Coord]) -> Result<(), BoardError> {
    if board.is_placed(kind) {
        return Err(BoardError::ShipAlreadyPlaced(kind));
    }
    let ship = Ship::new(kind, cells)?;
    if let Some(at) = cells.iter().find(|c| !c.in_bounds()) {
        return Err(BoardError::OutOfBounds { x: at.x, y: at.y });
    }
    if !is_line(cells) {
        return Err(BoardError::NotALine);
    }
    let footprint = Mask::from_coords(cells.iter().copied())?;
    if footprint.intersects(&board.occupied()) {
        return Err(BoardError::OverlapRejected);
    }
    for &at in cells {
        board.set_cell(at, CellState::Occupied(kind));
    }
    board.insert_ship(ship);
    log::debug!("placed {} at {:?}", kind, cells);
    Ok(())
}

/// Place every ship not yet on `board` at a random free footprint, in fleet
/// order.
///
/// Each ship samples an orientation and an origin that keeps the whole
/// footprint on the board, resampling until the footprint misses every ship
/// already placed.
pub fn auto_place_all<R: RandomSource + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), BoardError> {
    for kind in board.unplaced() {
        let len = kind.length();
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let orientation = if rng.uniform_int(0, 1) == 0 {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - len, BOARD_SIZE - 1),
                Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - len),
            };
            let origin = Coord::new(rng.uniform_int(0, max_x), rng.uniform_int(0, max_y));
            let cells = footprint(origin, len, orientation)?;
            let mask = Mask::from_coords(cells.iter().copied())?;
            if mask.intersects(&board.occupied()) {
                log::trace!("{} at {} {:?} overlaps, resampling", kind, origin, orientation);
                continue;
            }
            place(board, kind, &cells)?;
            log::debug!("auto-placed {} after {} samples", kind, attempts);
            break;
        }
    }
    Ok(())
}
