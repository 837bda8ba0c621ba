use rand::{rngs::SmallRng, SeedableRng};
use salvo::{init_logging, Game, TargetingEngine};
use serde_json::json;

/// Play one game where both sides are driven by the targeting engine.
fn simulate(seed: u64) -> anyhow::Result<serde_json::Value> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(&mut rng)?;
    game.auto_place_remaining(&mut rng)?;

    let mut gunner = TargetingEngine::new();
    let mut turns = 0usize;
    let mut human_shots = 0usize;
    let mut computer_shots = 0usize;

    while game.winner().is_none() {
        turns += 1;
        let at = gunner
            .next_shot(game.target_board(), &mut rng)
            .ok_or_else(|| anyhow::anyhow!("no untried cells left"))?;
        let turn = game.fire_at(at)?;
        gunner.record(&turn.shot);
        human_shots += 1;
        if turn.winner.is_some() {
            break;
        }
        game.opponent_turn(&mut rng)?;
        computer_shots += 1;
    }

    Ok(json!({
        "seed": seed,
        "winner": game.winner(),
        "turns": turns,
        "human_shots": human_shots,
        "computer_shots": computer_shots,
    }))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    for i in 0..games {
        let report = simulate(seed.wrapping_add(i))?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}
