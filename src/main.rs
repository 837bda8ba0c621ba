use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use salvo::input::Command;
use salvo::{init_logging, ui, Game, Phase, Side};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn draw(game: &Game, note: Option<&str>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    // clear screen, cursor home
    write!(stdout, "\x1B[2J\x1B[H{}", ui::render(game, note))?;
    stdout.flush()
}

fn play(seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        log::info!("using fixed seed {}", s);
    }
    let mut rng = seeded_rng(seed);
    let mut game = Game::new(&mut rng)?;
    let mut note: Option<String> = None;
    let mut lines = io::stdin().lock().lines();

    loop {
        draw(&game, note.take().as_deref())?;
        if game.winner().is_some() {
            break;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                note = Some(e.to_string());
                continue;
            }
        };

        let outcome = match command {
            Command::Quit => break,
            Command::Move(dx, dy) => game.move_cursor(dx, dy).map(|_| ()),
            Command::Rotate => game.rotate_cursor().map(|_| ()),
            Command::PrevShip => game.select_ship(-1).map(|_| ()),
            Command::NextShip => game.select_ship(1).map(|_| ()),
            Command::AutoPlace => game.auto_place_remaining(&mut rng),
            Command::Confirm if game.phase() == Phase::Placement => {
                game.place_selected().map(|_| ())
            }
            Command::Confirm => match game.fire() {
                Ok(turn) => {
                    let mut report = ui::describe_shot(&turn.shot, Side::Human);
                    if turn.winner.is_none() {
                        draw(&game, Some(report.as_str()))?;
                        println!("\nPress enter to continue.");
                        if lines.next().transpose()?.is_none() {
                            break;
                        }
                        let reply = game.opponent_turn(&mut rng)?;
                        report.push(' ');
                        report.push_str(&ui::describe_shot(&reply.shot, Side::Computer));
                    }
                    note = Some(report);
                    Ok(())
                }
                Err(e) => Err(e),
            },
        };
        if let Err(e) = outcome {
            note = Some(e.to_string());
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => play(seed)?,
    }
    Ok(())
}
