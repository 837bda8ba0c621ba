//! The computer's shot selection.
//!
//! The engine is a two-state machine. In [`Mode::Hunt`] it fires uniformly at
//! random among untried cells. A hit switches it to [`Mode::Target`], where it
//! keeps an ordered list of [`Run`]s (hits believed to belong to one ship
//! still afloat) and always works on the front run:
//!
//! * one hit: try an untried orthogonal neighbour;
//! * a vertical or horizontal line: try the cell just past either end;
//! * hits that are not collinear: the run mixed up two ships, so it is split
//!   into one single-hit run per cell and the pursuit restarts on the first.
//!
//! When the front run offers no untried candidate the engine falls back to a
//! hunting shot. The engine reads only whether cells were tried, never where
//! the ships are.

use alloc::vec;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::Coord;
use crate::random::RandomSource;
use crate::shot::ShotResult;

/// Confirmed hits believed to belong to one ship that is still afloat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    cells: Vec<Coord>,
}

/// Geometry of a run, which decides where to shoot next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunShape {
    Single(Coord),
    /// All hits share column `x`, spanning rows `top..=bottom`.
    Vertical { x: usize, top: usize, bottom: usize },
    /// All hits share row `y`, spanning columns `left..=right`.
    Horizontal { y: usize, left: usize, right: usize },
    /// Hits in more than one direction.
    Scattered,
}

impl Run {
    pub fn new(at: Coord) -> Self {
        Run { cells: vec![at] }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    fn push(&mut self, at: Coord) {
        self.cells.push(at);
    }

    pub fn shape(&self) -> RunShape {
        let first = match self.cells.as_slice() {
            [] => return RunShape::Scattered,
            [only] => return RunShape::Single(*only),
            [first, ..] => *first,
        };
        if self.cells.iter().all(|c| c.x == first.x) {
            let rows = self.cells.iter().map(|c| c.y);
            RunShape::Vertical {
                x: first.x,
                top: rows.clone().min().unwrap_or(first.y),
                bottom: rows.max().unwrap_or(first.y),
            }
        } else if self.cells.iter().all(|c| c.y == first.y) {
            let cols = self.cells.iter().map(|c| c.x);
            RunShape::Horizontal {
                y: first.y,
                left: cols.clone().min().unwrap_or(first.x),
                right: cols.max().unwrap_or(first.x),
            }
        } else {
            RunShape::Scattered
        }
    }

    /// Cells that would extend this run, before filtering for tried cells.
    /// `None` for a scattered run.
    fn extensions(&self) -> Option<Vec<Coord>> {
        match self.shape() {
            RunShape::Single(at) => Some(at.neighbors().collect()),
            RunShape::Vertical { x, top, bottom } => Some(
                [top.checked_sub(1), Some(bottom + 1)]
                    .into_iter()
                    .flatten()
                    .map(|y| Coord::new(x, y))
                    .collect(),
            ),
            RunShape::Horizontal { y, left, right } => Some(
                [left.checked_sub(1), Some(right + 1)]
                    .into_iter()
                    .flatten()
                    .map(|x| Coord::new(x, y))
                    .collect(),
            ),
            RunShape::Scattered => None,
        }
    }
}

/// Search mode of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Hunt,
    /// Never empty; the front run is the current pursuit.
    Target(Vec<Run>),
}

/// Hunt-and-target shot selection against one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingEngine {
    state: State,
}

impl TargetingEngine {
    pub fn new() -> Self {
        TargetingEngine { state: State::Hunt }
    }

    pub fn mode(&self) -> Mode {
        match self.state {
            State::Hunt => Mode::Hunt,
            State::Target(_) => Mode::Target,
        }
    }

    /// Open runs, front first.
    pub fn runs(&self) -> &[Run] {
        match &self.state {
            State::Hunt => &[],
            State::Target(runs) => runs.as_slice(),
        }
    }

    /// Untried cells that would advance the front run. Empty in hunt mode.
    ///
    /// A scattered front run is split into single-hit runs first, which is
    /// why this takes `&mut self`.
    pub fn candidates(&mut self, board: &Board) -> Vec<Coord> {
        let runs = match &mut self.state {
            State::Hunt => return Vec::new(),
            State::Target(runs) => runs,
        };
        loop {
            match runs[0].extensions() {
                Some(cells) => {
                    return cells.into_iter().filter(|c| board.is_untried(*c)).collect();
                }
                None => split_front(runs),
            }
        }
    }

    /// Choose the next cell to fire at on `board`. `None` only when every
    /// cell has been tried.
    ///
    /// Only the front run is consulted. If it has no untried candidate the
    /// shot is a random hunting shot, even when a later run still has open
    /// neighbours; the front run stays queued for the next hit.
    pub fn next_shot<R: RandomSource + ?Sized>(
        &mut self,
        board: &Board,
        rng: &mut R,
    ) -> Option<Coord> {
        let candidates = self.candidates(board);
        if let Some(&at) = rng.uniform_choice(&candidates) {
            return Some(at);
        }
        if let State::Target(runs) = &self.state {
            log::debug!("run {:?} has no open cells, hunting", runs[0].cells());
        }
        let open: Vec<Coord> = board.untried().iter().collect();
        rng.uniform_choice(&open).copied()
    }

    /// Feed back the outcome of the shot last chosen by this engine.
    ///
    /// A sinking shot closes the front run. Any other hit extends the front
    /// run, or opens the first one when hunting. Misses change nothing.
    pub fn record(&mut self, shot: &ShotResult) {
        if let Some(kind) = shot.sunk {
            match &mut self.state {
                State::Target(runs) => {
                    let closed = runs.remove(0);
                    log::debug!("{} sunk, closing run {:?}", kind, closed.cells());
                    if runs.is_empty() {
                        log::debug!("no open runs, back to hunting");
                        self.state = State::Hunt;
                    }
                }
                State::Hunt => log::warn!("{} sunk at {} without an open run", kind, shot.at),
            }
            return;
        }
        if !shot.hit {
            return;
        }
        if let State::Target(runs) = &mut self.state {
            runs[0].push(shot.at);
        } else {
            log::debug!("hit at {}, targeting", shot.at);
            self.state = State::Target(vec![Run::new(shot.at)]);
        }
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace the front run with one single-hit run per cell, in order.
fn split_front(runs: &mut Vec<Run>) {
    let front = runs.remove(0);
    log::debug!("splitting scattered run {:?}", front.cells());
    let rest = core::mem::take(runs);
    runs.extend(front.cells.into_iter().map(Run::new));
    runs.extend(rest);
}
