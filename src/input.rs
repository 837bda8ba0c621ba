#![cfg(feature = "std")]

//! Line-based key mapping for the terminal front-end.

use std::fmt;
use std::str::FromStr;

/// One player action read from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the cursor by (dx, dy).
    Move(isize, isize),
    Rotate,
    PrevShip,
    NextShip,
    /// Place the selected ship, fire, or acknowledge a pause.
    Confirm,
    /// Place all remaining ships at random.
    AutoPlace,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown command '{}' (w/a/s/d move, r rotate, z/x pick ship, enter confirm, auto, q)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let cmd = match input.trim().to_ascii_lowercase().as_str() {
            "" | "space" | "f" | "p" | "fire" | "place" => Command::Confirm,
            "w" | "up" | "k" => Command::Move(0, -1),
            "s" | "down" | "j" => Command::Move(0, 1),
            "a" | "left" | "h" => Command::Move(-1, 0),
            "d" | "right" | "l" => Command::Move(1, 0),
            "r" | "tab" | "rotate" => Command::Rotate,
            "z" => Command::PrevShip,
            "x" => Command::NextShip,
            "auto" => Command::AutoPlace,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(UnknownCommand(input.trim().to_string())),
        };
        Ok(cmd)
    }
}
