//! Common types for the game core: coordinates, cell states, sides and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// A cell address on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Checked constructor rejecting anything outside the board.
    pub fn try_new(x: usize, y: usize) -> Result<Self, BoardError> {
        let coord = Self { x, y };
        if coord.in_bounds() {
            Ok(coord)
        } else {
            Err(BoardError::OutOfBounds { x, y })
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The cell shifted by (`dx`, `dy`), or `None` if that leaves the board.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let coord = Self { x, y };
        coord.in_bounds().then_some(coord)
    }

    /// In-bounds orthogonal neighbours, ordered left, right, up, down.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    /// Board notation: column letter then 1-based row, e.g. `C7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.x as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

/// State of a single board cell.
///
/// `Empty` and `Occupied` become `Hit` or `Miss` exactly once and never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Occupied(ShipKind),
    Hit,
    Miss,
}

impl CellState {
    /// Whether a shot has already landed here.
    pub fn is_tried(&self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// The two participants of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

/// Errors returned by cursor, placement and shot operations.
///
/// None of these are fatal: the rejected command leaves all state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cursor move/rotate/resize would leave the board or wrap around it.
    InvalidSelection,
    /// Placement intersects a cell that is already occupied.
    OverlapRejected,
    /// Shot aimed at a cell that is already hit or missed.
    AlreadyTargeted,
    /// Coordinate outside the board.
    OutOfBounds { x: usize, y: usize },
    /// This kind of ship is already on the board.
    ShipAlreadyPlaced(ShipKind),
    /// Footprint size differs from the ship's length.
    LengthMismatch {
        kind: ShipKind,
        expected: usize,
        found: usize,
    },
    /// Footprint is not a straight, contiguous line.
    NotALine,
    /// Operation needs a placement-mode cursor.
    WrongMode,
    /// Underlying mask error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSelection => write!(f, "Selection would leave the board"),
            BoardError::OverlapRejected => write!(f, "Ships cannot overlap other ships"),
            BoardError::AlreadyTargeted => write!(f, "You've already targeted that cell"),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Cell ({}, {}) is outside the board", x, y)
            }
            BoardError::ShipAlreadyPlaced(kind) => {
                write!(f, "{} is already placed on the board", kind)
            }
            BoardError::LengthMismatch {
                kind,
                expected,
                found,
            } => write!(
                f,
                "{} needs {} cells but the selection covers {}",
                kind, expected, found
            ),
            BoardError::NotALine => write!(f, "Ships must lie in a straight line"),
            BoardError::WrongMode => write!(f, "Cursor is not in placement mode"),
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
