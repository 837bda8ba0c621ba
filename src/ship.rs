//! Ship kinds and placed ships with per-segment hit tracking.

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::MAX_SHIP_LEN;

/// The five kinds of ship in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser | ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Position in the fleet order; indexes the board's ship registry.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of a straight line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells share a row; the line runs along x.
    Horizontal,
    /// Cells share a column; the line runs along y.
    Vertical,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// One cell of a ship and whether it has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub at: Coord,
    pub hit: bool,
}

/// A ship placed on a board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    segments: [Segment; MAX_SHIP_LEN],
}

impl Ship {
    /// Build an unhit ship over `cells`, which must match the kind's length.
    pub fn new(kind: ShipKind, cells: &[Coord]) -> Result<Self, BoardError> {
        if cells.len() != kind.length() {
            return Err(BoardError::LengthMismatch {
                kind,
                expected: kind.length(),
                found: cells.len(),
            });
        }
        let mut segments = [Segment::default(); MAX_SHIP_LEN];
        for (segment, &at) in segments.iter_mut().zip(cells) {
            segment.at = at;
        }
        Ok(Ship { kind, segments })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Segments in placement order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments[..self.kind.length()]
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments().iter().map(|s| s.at)
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells().any(|c| c == at)
    }

    /// Mark the segment at `at` as hit. Returns `false` if the ship does
    /// not cover that cell.
    pub fn register_hit(&mut self, at: Coord) -> bool {
        let len = self.kind.length();
        match self.segments[..len].iter_mut().find(|s| s.at == at) {
            Some(segment) => {
                segment.hit = true;
                true
            }
            None => false,
        }
    }

    pub fn is_afloat(&self) -> bool {
        self.segments().iter().any(|s| !s.hit)
    }

    pub fn is_sunk(&self) -> bool {
        !self.is_afloat()
    }

    pub fn hits(&self) -> usize {
        self.segments().iter().filter(|s| s.hit).count()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ kind: {}, cells: [", self.kind)?;
        for (i, s) in self.segments().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}{}", s.at, if s.hit { "*" } else { "" })?;
        }
        write!(f, "], hits: {} }}", self.hits())
    }
}
