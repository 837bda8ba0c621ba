use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    BoardError, CellState, Coord, Direction, Game, GameError, Mode, Orientation, Phase, Placed, Selection,
    ShipKind, Side, FLEET, TOTAL_SHIP_CELLS,
};

fn new_game(seed: u64) -> (Game, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let game = Game::new(&mut rng).unwrap();
    (game, rng)
}

/// Place the fleet in columns 0, 2, 4, 6 and 8, vertically from the top.
fn place_in_columns(game: &mut Game) {
    for (i, kind) in FLEET.iter().enumerate() {
        assert_eq!(game.selected_ship(), Some(*kind));
        let placed = game.place_selected().unwrap();
        assert_eq!(placed.kind, *kind);
        assert_eq!(placed.next, FLEET.get(i + 1).copied());
        if placed.next.is_some() {
            game.move_cursor(2, 0).unwrap();
        }
    }
}

fn battle(seed: u64) -> (Game, SmallRng) {
    let (mut game, mut rng) = new_game(seed);
    game.auto_place_remaining(&mut rng).unwrap();
    (game, rng)
}

#[test]
fn test_new_game() {
    let (game, _) = new_game(1);
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.winner(), None);
    assert_eq!(game.menu(), &FLEET);
    assert_eq!(game.selected_ship(), Some(ShipKind::Carrier));
    assert_eq!(
        game.cursor().selection(),
        Selection::Line {
            origin: Coord::new(0, 0),
            length: 5,
            orientation: Orientation::Vertical,
            direction: Direction::Forward,
        }
    );
    assert_eq!(game.target_board().occupied().len(), TOTAL_SHIP_CELLS);
    assert!(game.own_board().occupied().is_empty());
    assert_eq!(game.engine().mode(), Mode::Hunt);
}

#[test]
fn test_place_carrier_advances_menu() {
    let (mut game, _) = new_game(2);
    let placed = game.place_selected().unwrap();
    assert_eq!(
        placed,
        Placed {
            kind: ShipKind::Carrier,
            next: Some(ShipKind::Battleship)
        }
    );
    assert_eq!(game.menu().len(), 4);
    assert_eq!(game.cursor().selection().length(), 4);
    assert_eq!(
        game.own_board().cell(Coord::new(0, 4)).unwrap(),
        CellState::Occupied(ShipKind::Carrier)
    );
}

#[test]
fn test_select_wraps_and_fits_cursor() {
    let (mut game, _) = new_game(3);
    assert_eq!(game.select_ship(-1).unwrap(), ShipKind::Destroyer);
    assert_eq!(
        game.cursor().cells(),
        vec![Coord::new(0, 0), Coord::new(0, 1)]
    );
    game.rotate_cursor().unwrap();
    assert_eq!(
        game.cursor().cells(),
        vec![Coord::new(0, 0), Coord::new(1, 0)]
    );

    let placed = game.place_selected().unwrap();
    assert_eq!(placed.kind, ShipKind::Destroyer);
    assert_eq!(placed.next, Some(ShipKind::Carrier));
    for x in 0..2 {
        assert_eq!(
            game.own_board().cell(Coord::new(x, 0)).unwrap(),
            CellState::Occupied(ShipKind::Destroyer)
        );
    }
    // the selector wrapped back to the carrier; the line stays horizontal
    assert_eq!(
        game.cursor().selection(),
        Selection::Line {
            origin: Coord::new(0, 0),
            length: 5,
            orientation: Orientation::Horizontal,
            direction: Direction::Forward,
        }
    );
    assert_eq!(game.select_ship(1).unwrap(), ShipKind::Battleship);
}

#[test]
fn test_overlap_keeps_menu() {
    let (mut game, _) = new_game(4);
    game.place_selected().unwrap();
    let menu = game.menu().to_vec();
    let own = *game.own_board();

    assert_eq!(
        game.place_selected(),
        Err(GameError::Board(BoardError::OverlapRejected))
    );
    assert_eq!(game.menu(), menu.as_slice());
    assert_eq!(game.own_board(), &own);
    assert_eq!(game.selected_ship(), Some(ShipKind::Battleship));
}

#[test]
fn test_rejected_placement_changes_nothing() {
    let (mut game, _) = new_game(12);
    game.select_ship(2).unwrap();
    game.rotate_cursor().unwrap();
    game.move_cursor(7, 9).unwrap();
    assert_eq!(game.place_selected().unwrap().next, Some(ShipKind::Submarine));

    // the cursor was fitted to the submarine from where the cruiser stood
    let fitted = game.cursor().selection();
    assert_eq!(
        fitted,
        Selection::Line {
            origin: Coord::new(7, 9),
            length: 3,
            orientation: Orientation::Horizontal,
            direction: Direction::Forward,
        }
    );

    let menu = game.menu().to_vec();
    let own = *game.own_board();
    assert_eq!(
        game.place_selected(),
        Err(GameError::Board(BoardError::OverlapRejected))
    );
    assert_eq!(game.menu(), menu.as_slice());
    assert_eq!(game.selected_ship(), Some(ShipKind::Submarine));
    assert_eq!(game.cursor().selection(), fitted);
    assert_eq!(game.own_board(), &own);
    assert_eq!(game.phase(), Phase::Placement);
}

#[test]
fn test_placing_last_ship_starts_battle() {
    let (mut game, _) = new_game(5);
    place_in_columns(&mut game);
    assert_eq!(game.phase(), Phase::Battle);
    assert!(game.menu().is_empty());
    assert_eq!(game.selected_ship(), None);
    assert_eq!(game.cursor().selection(), Selection::Single(Coord::new(0, 0)));
    assert_eq!(game.own_board().occupied().len(), TOTAL_SHIP_CELLS);
    assert_eq!(
        game.own_board().cell(Coord::new(8, 1)).unwrap(),
        CellState::Occupied(ShipKind::Destroyer)
    );
}

#[test]
fn test_commands_checked_against_phase() {
    let (mut game, mut rng) = new_game(6);
    assert!(matches!(game.fire(), Err(GameError::WrongPhase { .. })));
    assert!(matches!(
        game.opponent_turn(&mut rng),
        Err(GameError::WrongPhase { .. })
    ));

    game.auto_place_remaining(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Battle);
    assert!(matches!(game.select_ship(1), Err(GameError::WrongPhase { .. })));
    assert!(matches!(game.place_selected(), Err(GameError::WrongPhase { .. })));
    assert!(matches!(game.resize_cursor(3), Err(GameError::WrongPhase { .. })));
    assert!(matches!(
        game.auto_place_remaining(&mut rng),
        Err(GameError::WrongPhase { .. })
    ));
}

#[test]
fn test_auto_place_after_manual_ships() {
    let (mut game, mut rng) = new_game(7);
    game.place_selected().unwrap();
    let carrier: Vec<Coord> = game
        .own_board()
        .ship(ShipKind::Carrier)
        .unwrap()
        .cells()
        .collect();
    game.auto_place_remaining(&mut rng).unwrap();
    assert_eq!(game.own_board().occupied().len(), TOTAL_SHIP_CELLS);
    let after: Vec<Coord> = game
        .own_board()
        .ship(ShipKind::Carrier)
        .unwrap()
        .cells()
        .collect();
    assert_eq!(carrier, after);
}

#[test]
fn test_repeat_shot_costs_no_turn() {
    let (mut game, _) = battle(8);
    let turn = game.fire().unwrap();
    assert_eq!(turn.shot.at, Coord::new(0, 0));
    let target = *game.target_board();

    assert_eq!(
        game.fire(),
        Err(GameError::Board(BoardError::AlreadyTargeted))
    );
    assert_eq!(game.target_board(), &target);
    assert_eq!(game.phase(), Phase::Battle);
}

#[test]
fn test_battle_cursor_fires_where_it_points() {
    let (mut game, _) = battle(9);
    game.move_cursor(-1, 3).unwrap();
    let turn = game.fire().unwrap();
    assert_eq!(turn.shot.at, Coord::new(9, 3));
    assert!(game.target_board().cell(Coord::new(9, 3)).unwrap() != CellState::Empty);
}

#[test]
fn test_human_wins_on_last_hit() {
    let (mut game, _) = battle(10);
    let targets: Vec<Coord> = game.target_board().occupied().iter().collect();
    let (last, rest) = targets.split_last().unwrap();
    for at in rest {
        let turn = game.fire_at(*at).unwrap();
        assert!(turn.shot.hit);
        assert_eq!(turn.winner, None);
    }
    let turn = game.fire_at(*last).unwrap();
    assert_eq!(turn.winner, Some(Side::Human));
    assert_eq!(game.phase(), Phase::Over { winner: Side::Human });
    assert_eq!(game.winner(), Some(Side::Human));

    assert!(matches!(
        game.fire_at(Coord::new(0, 0)),
        Err(GameError::WrongPhase { .. })
    ));
    assert!(matches!(game.move_cursor(1, 0), Err(GameError::WrongPhase { .. })));
}

#[test]
fn test_opponent_turns_until_computer_wins() {
    let (mut game, mut rng) = battle(11);
    let mut turns = 0;
    loop {
        let before = game.own_board().tried().len();
        let turn = game.opponent_turn(&mut rng).unwrap();
        turns += 1;
        assert_eq!(game.own_board().tried().len(), before + 1);
        assert!(game.target_board().tried().is_empty());
        if let Some(winner) = turn.winner {
            assert_eq!(winner, Side::Computer);
            break;
        }
        assert!(turns < 100);
    }
    assert!(game.own_board().is_fleet_destroyed());
    assert_eq!(game.phase(), Phase::Over { winner: Side::Computer });
    assert!(turns >= TOTAL_SHIP_CELLS);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GameError::Board(BoardError::OverlapRejected).to_string(),
        "Ships cannot overlap other ships"
    );
    assert_eq!(
        GameError::Board(BoardError::AlreadyTargeted).to_string(),
        "You've already targeted that cell"
    );
}
