use clap::Parser;
use minesweeper::{AutoPlayer, Game, GameStatus, Limits};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one game with the automatic player and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 9)]
    width: usize,
    #[arg(long, default_value_t = 9)]
    height: usize,
    #[arg(long, default_value_t = 10)]
    mines: usize,
}

fn main() -> anyhow::Result<()> {
    minesweeper::init_logging();
    let args = Args::parse();
    let limits = Limits::default();
    if !limits.mines_ok(args.height, args.width, args.mines) {
        anyhow::bail!(
            "{} mines on {}x{} is outside the allowed range",
            args.mines,
            args.width,
            args.height
        );
    }

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut game = Game::build(args.width, args.height, args.mines, &mut rng)?;
    let mut player = AutoPlayer::new();
    let max_turns = args.width * args.height * 2;

    game.mark_start();
    while !game.is_ended() && (game.turns() as usize) < max_turns {
        let Some(cmd) = player.next_command(game.board(), &mut rng) else {
            break;
        };
        game.apply(cmd)?;
    }

    let result = json!({
        "seed": args.seed,
        "status": game.status(),
        "won": game.status() == GameStatus::Won,
        "turns": game.turns(),
        "revealed": game.board().revealed_count(),
        "flags": game.board().flag_count(),
        "limits": limits,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
