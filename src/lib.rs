#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod cursor;
mod game;
pub mod placement;
pub mod random;
mod ship;
pub mod shot;
mod targeting;
#[cfg(feature = "std")]
pub mod input;
#[cfg(feature = "std")]
pub mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use cursor::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use random::RandomSource;
pub use ship::*;
pub use shot::ShotResult;
pub use targeting::*;
