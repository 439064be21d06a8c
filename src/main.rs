#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{
    init_logging,
    ui::{NullRenderer, TerminalRenderer},
    AiPlayer, CliPlayer, GameConfig, GameEngine, GameHistory, GameRunner, DEFAULT_TARGET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively with W/A/S/D.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_TARGET, help = "Tile value that wins the game")]
        target: u32,
    },
    /// Let the built-in AI play.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, default_value_t = DEFAULT_TARGET, help = "Tile value that wins the game")]
        target: u32,
        #[arg(long, help = "Keep merging after reaching the target")]
        keep_going: bool,
        #[arg(long, help = "Redraw the board after every move")]
        show: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut history = GameHistory::new();

    match cli.command {
        Commands::Play { seed, target } => {
            let config = GameConfig::default().with_target(target);
            let mut rng = make_rng(seed);
            let engine = GameEngine::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let mut runner = GameRunner::new(
                Box::new(CliPlayer::stdio()),
                Box::new(TerminalRenderer),
                engine,
                rng,
            );
            runner.run(&mut history)?;
        }
        Commands::Auto {
            seed,
            games,
            target,
            keep_going,
            show,
        } => {
            anyhow::ensure!(games > 0, "--games must be at least 1");
            let config = GameConfig::default().with_target(target);
            let mut rng = make_rng(seed);
            let engine = GameEngine::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let player = AiPlayer::new(games).continue_after_win(keep_going);
            let mut runner = if show {
                GameRunner::new(Box::new(player), Box::new(TerminalRenderer), engine, rng)
            } else {
                GameRunner::new(Box::new(player), Box::new(NullRenderer), engine, rng)
            };
            runner.run(&mut history)?;
        }
    }

    print!("{}", history);
    if let Some(best) = history.best_score() {
        println!("Best score: {}", best);
    }
    Ok(())
}
