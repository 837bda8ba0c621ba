#![cfg(feature = "std")]

use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::input::{Command, UnknownCommand};
use salvo::logging::level_from;
use salvo::ui::{describe_shot, render, ship_glyph};
use salvo::{Coord, Game, ShipKind, ShotResult, Side};

#[test]
fn test_parse_commands() {
    assert_eq!("w".parse::<Command>(), Ok(Command::Move(0, -1)));
    assert_eq!(" D ".parse::<Command>(), Ok(Command::Move(1, 0)));
    assert_eq!("down".parse::<Command>(), Ok(Command::Move(0, 1)));
    assert_eq!("h".parse::<Command>(), Ok(Command::Move(-1, 0)));
    assert_eq!("".parse::<Command>(), Ok(Command::Confirm));
    assert_eq!("fire".parse::<Command>(), Ok(Command::Confirm));
    assert_eq!("r".parse::<Command>(), Ok(Command::Rotate));
    assert_eq!("z".parse::<Command>(), Ok(Command::PrevShip));
    assert_eq!("x".parse::<Command>(), Ok(Command::NextShip));
    assert_eq!("auto".parse::<Command>(), Ok(Command::AutoPlace));
    assert_eq!("Quit".parse::<Command>(), Ok(Command::Quit));
    assert_eq!(
        "xyzzy".parse::<Command>(),
        Err(UnknownCommand("xyzzy".to_string()))
    );
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(None), LevelFilter::Warn);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("loud")), LevelFilter::Warn);
}

#[test]
fn test_ship_glyphs() {
    assert_eq!(ship_glyph(ShipKind::Carrier), 'C');
    assert_eq!(ship_glyph(ShipKind::Battleship), 'B');
    assert_eq!(ship_glyph(ShipKind::Cruiser), 'c');
    assert_eq!(ship_glyph(ShipKind::Submarine), 's');
    assert_eq!(ship_glyph(ShipKind::Destroyer), 'd');
}

#[test]
fn test_describe_shot() {
    let sinking = ShotResult {
        at: Coord::new(2, 6),
        hit: true,
        sunk: Some(ShipKind::Destroyer),
    };
    assert_eq!(
        describe_shot(&sinking, Side::Human),
        "You fired at C7. A direct hit! You sank the enemy's Destroyer!"
    );
    let miss = ShotResult {
        at: Coord::new(0, 0),
        hit: false,
        sunk: None,
    };
    assert_eq!(
        describe_shot(&miss, Side::Computer),
        "The enemy fired at A1. The enemy missed!"
    );
}

#[test]
fn test_render_placement_screen() {
    let mut rng = SmallRng::seed_from_u64(21);
    let game = Game::new(&mut rng).unwrap();
    let screen = render(&game, Some("Ships cannot overlap other ships"));

    assert!(screen.contains("Place your ships! ** (Ships cannot overlap other ships)"));
    assert!(screen.contains(" -> Carrier"));
    assert!(screen.contains("    Destroyer"));
    // the enemy fleet stays hidden
    assert!(screen.contains(" 1  ~  ~  ~ "));
    assert_eq!(screen.matches('~').count(), 100);
    // the vertical placement cursor covers column A of rows 1 to 5
    assert!(screen.contains(" 1 : :[ ][ ]"));
    assert!(screen.contains(" 5 : :[ ]"));
    assert!(screen.contains(" 6 [ ][ ]"));
}

#[test]
fn test_render_battle_screen() {
    let mut rng = SmallRng::seed_from_u64(22);
    let mut game = Game::new(&mut rng).unwrap();
    game.auto_place_remaining(&mut rng).unwrap();
    let screen = render(&game, None);

    assert!(screen.starts_with("    A  B  C "));
    assert!(screen.contains("Battle!\n"));
    assert!(screen.contains("Scorecard: Your ships: 5   The enemy's ships: 5"));
    assert!(screen.contains(" 1 :~:"));
    assert!(screen.contains("[C]"));
}
