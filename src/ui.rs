#![cfg(feature = "std")]

//! Plain-text rendering of a session for the terminal front-end.

use std::fmt::Write;

use crate::board::Board;
use crate::common::{CellState, Coord, Side};
use crate::config::BOARD_SIZE;
use crate::cursor::Selection;
use crate::game::{Game, Phase};
use crate::ship::ShipKind;
use crate::shot::ShotResult;

/// Letter drawn for a ship on its owner's board.
pub fn ship_glyph(kind: ShipKind) -> char {
    let initial = kind.name().chars().next().unwrap_or('?');
    match kind {
        ShipKind::Carrier | ShipKind::Battleship => initial.to_ascii_uppercase(),
        _ => initial.to_ascii_lowercase(),
    }
}

fn own_glyph(state: CellState) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Occupied(kind) => ship_glyph(kind),
        CellState::Hit => 'X',
        CellState::Miss => '•',
    }
}

fn target_glyph(state: CellState) -> char {
    match state {
        CellState::Hit => 'X',
        CellState::Miss => ' ',
        CellState::Empty | CellState::Occupied(_) => '~',
    }
}

fn header(out: &mut String) {
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", (b'A' + c as u8) as char);
    }
    out.push_str("\n\n");
}

/// Draw one board. `own` boards reveal ships and are bracketed; cells under
/// `cursor` are wrapped in colons.
pub fn render_board(out: &mut String, board: &Board, own: bool, cursor: Option<&Selection>) {
    let (l, r) = if own { ('[', ']') } else { (' ', ' ') };
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "{:>2} ", y + 1);
        for x in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            let state = board.cell(at).unwrap_or_default();
            let ch = if own { own_glyph(state) } else { target_glyph(state) };
            if cursor.is_some_and(|sel| sel.contains(at)) {
                let _ = write!(out, ":{}:", ch);
            } else {
                let _ = write!(out, "{}{}{}", l, ch, r);
            }
        }
        out.push('\n');
    }
}

/// Status headline for the current phase.
pub fn headline(game: &Game) -> &'static str {
    match game.phase() {
        Phase::Placement => "Place your ships!",
        Phase::Battle => "Battle!",
        Phase::Over {
            winner: Side::Human,
        } => "You are victorious!",
        Phase::Over {
            winner: Side::Computer,
        } => "Your fleet was annihilated.",
    }
}

/// One-line report of a shot for the status bar.
pub fn describe_shot(shot: &ShotResult, shooter: Side) -> String {
    let who = match shooter {
        Side::Human => "You",
        Side::Computer => "The enemy",
    };
    let mut text = if shot.hit {
        format!("{} fired at {}. A direct hit!", who, shot.at)
    } else {
        format!("{} fired at {}. {} missed!", who, shot.at, who)
    };
    if let Some(kind) = shot.sunk {
        match shooter {
            Side::Human => {
                let _ = write!(text, " You sank the enemy's {}!", kind);
            }
            Side::Computer => {
                let _ = write!(text, " The enemy sank your {}!", kind);
            }
        }
    }
    text
}

/// Full screen: target board, own board, status bar, ship menu or scorecard.
pub fn render(game: &Game, note: Option<&str>) -> String {
    let mut out = String::new();
    let selection = game.cursor().selection();
    let (on_target, on_own) = match game.phase() {
        Phase::Placement => (None, Some(&selection)),
        Phase::Battle => (Some(&selection), None),
        Phase::Over { .. } => (None, None),
    };

    header(&mut out);
    render_board(&mut out, game.target_board(), false, on_target);
    out.push('\n');
    render_board(&mut out, game.own_board(), true, on_own);
    out.push('\n');

    out.push_str(headline(game));
    if let Some(note) = note {
        let _ = write!(out, " ** ({})", note);
    }
    out.push('\n');

    match game.phase() {
        Phase::Placement => {
            out.push('\n');
            let selected = game.selected_ship();
            let options: Vec<String> = game
                .menu()
                .iter()
                .map(|kind| {
                    let marker = if Some(*kind) == selected { " -> " } else { "    " };
                    format!("{}{}", marker, kind)
                })
                .collect();
            out.push_str(&options.join(" "));
            out.push('\n');
        }
        Phase::Battle | Phase::Over { .. } => {
            let _ = writeln!(
                out,
                "\nScorecard: Your ships: {}   The enemy's ships: {}",
                game.own_board().ships_afloat().len(),
                game.target_board().ships_afloat().len()
            );
        }
    }
    out
}
