#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minesweeper::{init_logging, Limits, Session, UserStore, DEFAULT_USER_FILE};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Terminal Minesweeper", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible mine layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = DEFAULT_USER_FILE, help = "User score file")]
    users: PathBuf,
    #[arg(long, help = "Largest board height the menu accepts")]
    max_height: Option<usize>,
    #[arg(long, help = "Largest board width the menu accepts")]
    max_width: Option<usize>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut limits = Limits::default();
    if let Some(h) = cli.max_height {
        limits.max_height = h.max(limits.min_height);
    }
    if let Some(w) = cli.max_width {
        limits.max_width = w.max(limits.min_width);
    }

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (mine layouts will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let users = UserStore::load(&cli.users)?;
    let stdin = io::stdin();
    let mut session =
        Session::new(stdin.lock(), io::stdout(), users, limits, rng).with_store_path(cli.users);
    session.run()
}
