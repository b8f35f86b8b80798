use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use noughtbot::search::{DepthLimit, SearchParams, Searcher};
use noughtbot::selfplay::{play_game, summarize, write_jsonl};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "noughtbot-selfplay", about = "Play engine games and report the results")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    depth: DepthLimit,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// X plays random moves instead of searching
    #[arg(long, default_value_t = false)]
    random_x: bool,
    /// Write one JSON game record per line to stdout
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let a = Args::parse();
    eprintln!("Playing {} games (depth={}, threads={}, random_x={})", a.games, a.depth, a.threads, a.random_x);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed_precise}")
            .context("bad progress template")?,
    );
    let mut rng = SmallRng::seed_from_u64(a.seed);
    let mut searcher = Searcher::new(SearchParams { depth: a.depth, threads: a.threads, seed: a.seed });
    let mut games = Vec::with_capacity(a.games);
    for _ in 0..a.games {
        games.push(play_game(&mut searcher, &mut rng, a.random_x)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let t = summarize(&games);
    eprintln!("X wins: {}  O wins: {}  draws: {}", t.wins, t.losses, t.draws);
    if a.json {
        write_jsonl(&games, std::io::stdout().lock()).context("failed to write game records")?;
    }
    Ok(())
}
