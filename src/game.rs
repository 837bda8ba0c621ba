//! A human-versus-computer session: both boards, the placement menu, the
//! cursor and the computer's targeting engine.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Board;
use crate::common::{BoardError, Coord, Side};
use crate::config::FLEET;
use crate::cursor::{Cursor, Selection};
use crate::placement;
use crate::random::RandomSource;
use crate::ship::ShipKind;
use crate::shot::{self, ShotResult};
use crate::targeting::TargetingEngine;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The human is placing ships on their own board.
    Placement,
    /// Shots are being exchanged.
    Battle,
    /// One fleet is gone.
    Over { winner: Side },
}

/// A ship accepted onto the human's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub kind: ShipKind,
    /// Next ship in the menu, or `None` when the battle has begun.
    pub next: Option<ShipKind>,
}

/// One resolved shot and, if it ended the game, the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub shot: ShotResult,
    pub winner: Option<Side>,
}

/// Errors returned by session commands. State is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// Command not available in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// The placement menu is empty.
    NoShipSelected,
    /// Every cell of the board under attack has been tried.
    BoardExhausted,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Not possible now: expected {:?}, game is in {:?}", expected, actual)
            }
            GameError::NoShipSelected => write!(f, "No ship left to place"),
            GameError::BoardExhausted => write!(f, "Every cell has already been targeted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

/// Session state for one game.
#[derive(Debug, Clone)]
pub struct Game {
    /// The human's fleet, placed by hand and attacked by the computer.
    own: Board,
    /// The computer's fleet, placed at random and attacked by the human.
    target: Board,
    cursor: Cursor,
    /// Ships still to place, in fleet order.
    menu: Vec<ShipKind>,
    selected: usize,
    phase: Phase,
    engine: TargetingEngine,
}

impl Game {
    /// Start a session: the computer's fleet is placed at random and the
    /// human is handed the placement cursor with the first ship selected.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut target = Board::new();
        placement::auto_place_all(&mut target, rng)?;
        let first = FLEET[0];
        Ok(Game {
            own: Board::new(),
            target,
            cursor: Cursor::placement(first.length()),
            menu: FLEET.to_vec(),
            selected: 0,
            phase: Phase::Placement,
            engine: TargetingEngine::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Over { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn own_board(&self) -> &Board {
        &self.own
    }

    pub fn target_board(&self) -> &Board {
        &self.target
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Ships still to place.
    pub fn menu(&self) -> &[ShipKind] {
        &self.menu
    }

    pub fn selected_ship(&self) -> Option<ShipKind> {
        self.menu.get(self.selected).copied()
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }

    fn require(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn require_active(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Placement | Phase::Battle => Ok(()),
            actual => Err(GameError::WrongPhase {
                expected: Phase::Battle,
                actual,
            }),
        }
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) -> Result<Selection, GameError> {
        self.require_active()?;
        Ok(self.cursor.move_by(dx, dy)?)
    }

    pub fn rotate_cursor(&mut self) -> Result<Selection, GameError> {
        self.require_active()?;
        Ok(self.cursor.rotate()?)
    }

    pub fn resize_cursor(&mut self, length: usize) -> Result<Selection, GameError> {
        self.require(Phase::Placement)?;
        Ok(self.cursor.resize(length)?)
    }

    /// Move the menu selector by `step` entries, wrapping, and fit the
    /// cursor to the newly selected ship.
    pub fn select_ship(&mut self, step: isize) -> Result<ShipKind, GameError> {
        self.require(Phase::Placement)?;
        if self.menu.is_empty() {
            return Err(GameError::NoShipSelected);
        }
        let len = self.menu.len() as isize;
        let selected = (self.selected as isize + step).rem_euclid(len) as usize;
        let kind = self.menu[selected];
        self.cursor.resize(kind.length())?;
        self.selected = selected;
        Ok(kind)
    }

    /// Place the selected ship under the cursor. On success the menu moves
    /// on; placing the last ship starts the battle. Nothing changes on error.
    pub fn place_selected(&mut self) -> Result<Placed, GameError> {
        self.require(Phase::Placement)?;
        let kind = self.selected_ship().ok_or(GameError::NoShipSelected)?;

        let mut menu = self.menu.clone();
        menu.remove(self.selected);
        let selected = if menu.is_empty() { 0 } else { self.selected % menu.len() };
        let next = menu.get(selected).copied();
        let mut cursor = self.cursor;
        if let Some(next) = next {
            cursor.resize(next.length())?;
        }

        placement::place(&mut self.own, kind, &self.cursor.cells())?;
        self.menu = menu;
        self.selected = selected;
        self.cursor = cursor;
        if next.is_none() {
            self.begin_battle();
        }
        Ok(Placed { kind, next })
    }

    /// Place every remaining ship at random and start the battle.
    pub fn auto_place_remaining<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.require(Phase::Placement)?;
        placement::auto_place_all(&mut self.own, rng)?;
        self.menu.clear();
        self.begin_battle();
        Ok(())
    }

    fn begin_battle(&mut self) {
        log::info!("fleet placed, battle begins");
        self.phase = Phase::Battle;
        self.cursor = Cursor::battle();
    }

    /// Fire at the cell under the cursor.
    pub fn fire(&mut self) -> Result<Turn, GameError> {
        self.require(Phase::Battle)?;
        let at = self.cursor.target().ok_or(BoardError::WrongMode)?;
        self.fire_at(at)
    }

    /// Fire at `at` on the computer's board. A cell already targeted is
    /// rejected and costs no turn.
    pub fn fire_at(&mut self, at: Coord) -> Result<Turn, GameError> {
        self.require(Phase::Battle)?;
        let shot = shot::shoot(&mut self.target, at)?;
        Ok(self.conclude(shot, Side::Human))
    }

    /// Let the computer choose and fire its shot at the human's board.
    pub fn opponent_turn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<Turn, GameError> {
        self.require(Phase::Battle)?;
        let at = self
            .engine
            .next_shot(&self.own, rng)
            .ok_or(GameError::BoardExhausted)?;
        let shot = shot::shoot(&mut self.own, at)?;
        self.engine.record(&shot);
        Ok(self.conclude(shot, Side::Computer))
    }

    fn conclude(&mut self, shot: ShotResult, shooter: Side) -> Turn {
        let defender = match shooter {
            Side::Human => &self.target,
            Side::Computer => &self.own,
        };
        let winner = defender.is_fleet_destroyed().then_some(shooter);
        if let Some(winner) = winner {
            log::info!("{:?} wins", winner);
            self.phase = Phase::Over { winner };
        }
        Turn { shot, winner }
    }
}
