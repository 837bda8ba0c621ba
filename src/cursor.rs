//! Cursor over the grid: a single cell in battle mode, a straight line of
//! cells in placement mode.
//!
//! Every operation builds the candidate row and column index sets, checks
//! them with the same rule and only then commits. A rejected operation
//! leaves the selection untouched.
//!
//! The long axis of a line is ordered: its first index is the line's origin
//! and the pivot of any rotation, and the line runs from there towards
//! higher or lower indices.

use alloc::vec::Vec;

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Which way a line runs from its origin along its long axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards higher indices.
    #[default]
    Forward,
    /// Towards lower indices.
    Backward,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// What the cursor currently covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Battle mode: one target cell.
    Single(Coord),
    /// Placement mode: `length` cells from `origin` in `direction`.
    Line {
        origin: Coord,
        length: usize,
        orientation: Orientation,
        direction: Direction,
    },
}

impl Selection {
    /// First cell of the selection, which is the rotation pivot.
    pub fn origin(&self) -> Coord {
        match *self {
            Selection::Single(at) => at,
            Selection::Line { origin, .. } => origin,
        }
    }

    pub fn length(&self) -> usize {
        match *self {
            Selection::Single(_) => 1,
            Selection::Line { length, .. } => length,
        }
    }

    /// Selected cells, starting at the origin.
    pub fn cells(&self) -> Vec<Coord> {
        let axes = Axes::of(self);
        let mut cells = Vec::with_capacity(axes.cols.len() * axes.rows.len());
        for &y in &axes.rows {
            for &x in &axes.cols {
                cells.push(Coord::new(x, y));
            }
        }
        cells
    }

    pub fn contains(&self, at: Coord) -> bool {
        let axes = Axes::of(self);
        axes.cols.contains(&at.x) && axes.rows.contains(&at.y)
    }
}

/// Raw index sets: the selection is their cross product. The long axis is
/// kept in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Axes {
    cols: Vec<usize>,
    rows: Vec<usize>,
}

impl Axes {
    fn of(selection: &Selection) -> Self {
        match *selection {
            Selection::Single(at) => Axes::point(at),
            Selection::Line {
                origin,
                length,
                orientation,
                direction,
            } => Self::line(origin, length, orientation, direction)
                .unwrap_or_else(|| Axes::point(origin)),
        }
    }

    fn point(at: Coord) -> Self {
        Axes {
            cols: alloc::vec![at.x],
            rows: alloc::vec![at.y],
        }
    }

    /// Line of `length` cells starting at `pivot`. `None` when a backward
    /// line runs below zero.
    fn line(pivot: Coord, length: usize, orientation: Orientation, direction: Direction) -> Option<Self> {
        let start = match orientation {
            Orientation::Horizontal => pivot.x,
            Orientation::Vertical => pivot.y,
        };
        let long = (0..length as isize)
            .map(|i| start.checked_add_signed(i * direction.step()))
            .collect::<Option<Vec<usize>>>()?;
        Some(Self::with_long(pivot, long, orientation))
    }

    fn with_long(pivot: Coord, long: Vec<usize>, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Axes {
                cols: long,
                rows: alloc::vec![pivot.y],
            },
            Orientation::Vertical => Axes {
                cols: alloc::vec![pivot.x],
                rows: long,
            },
        }
    }

    fn long(&self, orientation: Orientation) -> &[usize] {
        match orientation {
            Orientation::Horizontal => &self.cols,
            Orientation::Vertical => &self.rows,
        }
    }

    /// Shift every index by the delta, wrapping around the board.
    fn shifted(&self, dx: isize, dy: isize) -> Self {
        let n = BOARD_SIZE as isize;
        let wrap = |i: usize, d: isize| (i as isize + d.rem_euclid(n)).rem_euclid(n) as usize;
        Axes {
            cols: self.cols.iter().map(|&x| wrap(x, dx)).collect(),
            rows: self.rows.iter().map(|&y| wrap(y, dy)).collect(),
        }
    }

    /// Out of range on either axis, or both board edges present in one axis
    /// (a line that wrapped around).
    fn is_invalid(&self) -> bool {
        let spans_edges =
            |axis: &[usize]| axis.contains(&0) && axis.contains(&(BOARD_SIZE - 1));
        self.cols.iter().chain(&self.rows).any(|&i| i >= BOARD_SIZE)
            || spans_edges(&self.cols)
            || spans_edges(&self.rows)
    }

    fn origin(&self) -> Coord {
        let x = self.cols.first().copied().unwrap_or(0);
        let y = self.rows.first().copied().unwrap_or(0);
        Coord::new(x, y)
    }

    /// Re-express validated index sets in the shape of `like`. A line of one
    /// cell keeps the direction of `like`.
    fn to_selection(&self, like: &Selection, orientation: Orientation) -> Selection {
        match *like {
            Selection::Single(_) => Selection::Single(self.origin()),
            Selection::Line { direction, .. } => {
                let long = self.long(orientation);
                let direction = match long {
                    [first, second, ..] if second < first => Direction::Backward,
                    [_, _, ..] => Direction::Forward,
                    _ => direction,
                };
                Selection::Line {
                    origin: self.origin(),
                    length: long.len(),
                    orientation,
                    direction,
                }
            }
        }
    }
}

/// The player's selection over one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    selection: Selection,
}

impl Cursor {
    /// Placement cursor: a vertical line of `length` cells at the top-left.
    pub fn placement(length: usize) -> Self {
        Cursor {
            selection: Selection::Line {
                origin: Coord::new(0, 0),
                length,
                orientation: Orientation::Vertical,
                direction: Direction::Forward,
            },
        }
    }

    /// Battle cursor: the top-left cell.
    pub fn battle() -> Self {
        Cursor {
            selection: Selection::Single(Coord::new(0, 0)),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cells(&self) -> Vec<Coord> {
        self.selection.cells()
    }

    /// The targeted cell when in battle mode.
    pub fn target(&self) -> Option<Coord> {
        match self.selection {
            Selection::Single(at) => Some(at),
            Selection::Line { .. } => None,
        }
    }

    pub fn is_placement(&self) -> bool {
        matches!(self.selection, Selection::Line { .. })
    }

    fn orientation(&self) -> Orientation {
        match self.selection {
            Selection::Line { orientation, .. } => orientation,
            Selection::Single(_) => Orientation::Vertical,
        }
    }

    fn commit(&mut self, axes: Option<Axes>, orientation: Orientation) -> Result<Selection, BoardError> {
        match axes {
            Some(axes) if !axes.is_invalid() => {
                self.selection = axes.to_selection(&self.selection, orientation);
                Ok(self.selection)
            }
            _ => Err(BoardError::InvalidSelection),
        }
    }

    /// Shift the selection by (`dx`, `dy`), wrapping around the board edges.
    pub fn move_by(&mut self, dx: isize, dy: isize) -> Result<Selection, BoardError> {
        let moved = Axes::of(&self.selection).shifted(dx, dy);
        let orientation = self.orientation();
        self.commit(Some(moved), orientation).inspect_err(|_| {
            log::trace!("cursor move ({}, {}) rejected at {:?}", dx, dy, self.selection);
        })
    }

    /// Swap orientation around the origin cell, which stays the origin. The
    /// new line runs from the pivot towards higher indices, or towards lower
    /// ones if that does not fit. A single cell rotates onto itself.
    pub fn rotate(&mut self) -> Result<Selection, BoardError> {
        let (pivot, length, orientation) = match self.selection {
            Selection::Single(_) => return Ok(self.selection),
            Selection::Line {
                origin,
                length,
                orientation,
                ..
            } => (origin, length, orientation.flipped()),
        };
        let forward = Axes::line(pivot, length, orientation, Direction::Forward);
        if let Ok(sel) = self.commit(forward, orientation) {
            return Ok(sel);
        }
        let backward = Axes::line(pivot, length, orientation, Direction::Backward);
        self.commit(backward, orientation)
    }

    /// Change the line length. Shrinking drops cells from the far end;
    /// growing extends past the far end, or by the same amount before the
    /// origin when the far end would leave the board.
    pub fn resize(&mut self, new_length: usize) -> Result<Selection, BoardError> {
        let (origin, length, orientation, direction) = match self.selection {
            Selection::Single(_) => return Err(BoardError::WrongMode),
            Selection::Line {
                origin,
                length,
                orientation,
                direction,
            } => (origin, length, orientation, direction),
        };
        if new_length == 0 {
            return Err(BoardError::InvalidSelection);
        }
        let long = Axes::of(&self.selection).long(orientation).to_vec();
        if new_length <= length {
            let kept = long.iter().copied().take(new_length).collect();
            return self.commit(Some(Axes::with_long(origin, kept, orientation)), orientation);
        }

        let incr = new_length - length;
        let step = direction.step();
        let Some(&last) = long.last() else {
            return Err(BoardError::InvalidSelection);
        };
        let past_end = (1..=incr as isize)
            .map(|k| last.checked_add_signed(k * step))
            .collect::<Option<Vec<usize>>>()
            .map(|tail| {
                let mut grown = long.clone();
                grown.extend(tail);
                Axes::with_long(origin, grown, orientation)
            });
        if let Ok(sel) = self.commit(past_end, orientation) {
            return Ok(sel);
        }

        let first = long[0];
        let before_origin = (1..=incr as isize)
            .rev()
            .map(|k| first.checked_add_signed(-k * step))
            .collect::<Option<Vec<usize>>>()
            .map(|mut head| {
                head.extend_from_slice(&long);
                let start = head[0];
                let pivot = match orientation {
                    Orientation::Horizontal => Coord::new(start, origin.y),
                    Orientation::Vertical => Coord::new(origin.x, start),
                };
                Axes::with_long(pivot, head, orientation)
            });
        self.commit(before_origin, orientation)
    }
}
