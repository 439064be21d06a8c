use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use twenty48::{ui::NullRenderer, AiPlayer, GameConfig, GameEngine, GameHistory, GameRunner};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    anyhow::ensure!(games > 0, "games must be at least 1");

    let mut rng = SmallRng::seed_from_u64(seed);
    let engine =
        GameEngine::new(GameConfig::default(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut runner = GameRunner::new(
        Box::new(AiPlayer::new(games)),
        Box::new(NullRenderer),
        engine,
        rng,
    );
    let mut history = GameHistory::new();
    runner.run(&mut history)?;

    let result = json!({
        "seed": seed,
        "games": history.records(),
        "best_score": history.best_score(),
        "best_tile": history.records().iter().map(|r| r.max_tile).max(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
