//! Board state: a matrix of cell states plus the registry of placed ships.
//!
//! The board only exposes queries publicly. Mutation goes through
//! [`crate::placement`] and [`crate::shot`], which keep the matrix and the
//! ship registry in agreement.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, CellState, Coord};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::ship::{Ship, ShipKind};

/// Cell mask sized for the game board.
pub type Mask = BitBoard<u128, BOARD_SIZE>;

/// One side's grid and fleet.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Indexed `[y][x]`.
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    /// Indexed by [`ShipKind::index`].
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Board {
    /// Empty board with no ships placed.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: [None; NUM_SHIPS],
        }
    }

    pub fn cell(&self, at: Coord) -> Result<CellState, BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OutOfBounds { x: at.x, y: at.y });
        }
        Ok(self.cells[at.y][at.x])
    }

    /// In bounds and neither hit nor missed yet.
    pub fn is_untried(&self, at: Coord) -> bool {
        self.cell(at).map(|c| !c.is_tried()).unwrap_or(false)
    }

    pub fn ship(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships[kind.index()].as_ref()
    }

    /// Placed ships in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.iter().flatten()
    }

    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.ships[kind.index()].is_some()
    }

    /// Kinds not yet on the board, in fleet order.
    pub fn unplaced(&self) -> Vec<ShipKind> {
        FLEET.iter().copied().filter(|k| !self.is_placed(*k)).collect()
    }

    /// Kinds of placed ships with at least one unhit segment, in fleet order.
    pub fn ships_afloat(&self) -> Vec<ShipKind> {
        self.ships()
            .filter(|s| s.is_afloat())
            .map(|s| s.kind())
            .collect()
    }

    /// True once no placed ship is afloat.
    pub fn is_fleet_destroyed(&self) -> bool {
        !self.ships().any(|s| s.is_afloat())
    }

    /// Cells covered by any placed ship.
    pub fn occupied(&self) -> Mask {
        let mut mask = Mask::new();
        for at in self.ships().flat_map(|s| s.cells()) {
            // ship cells are validated on placement
            let _ = mask.insert(at);
        }
        mask
    }

    /// Cells already hit or missed.
    pub fn tried(&self) -> Mask {
        let mut mask = Mask::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, state) in row.iter().enumerate() {
                if state.is_tried() {
                    let _ = mask.insert(Coord::new(x, y));
                }
            }
        }
        mask
    }

    /// Cells still open to a shot.
    pub fn untried(&self) -> Mask {
        !self.tried()
    }

    pub(crate) fn set_cell(&mut self, at: Coord, state: CellState) {
        self.cells[at.y][at.x] = state;
    }

    pub(crate) fn ships_mut(&mut self) -> impl Iterator<Item = &mut Ship> + '_ {
        self.ships.iter_mut().flatten()
    }

    pub(crate) fn insert_ship(&mut self, ship: Ship) {
        self.ships[ship.kind().index()] = Some(ship);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for state in row.iter() {
                let ch = match state {
                    CellState::Empty => '.',
                    CellState::Occupied(kind) => kind.name().chars().next().unwrap_or('?'),
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}
