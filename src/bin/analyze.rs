use anyhow::{Context, Result};
use clap::Parser;
use noughtbot::board::{Board, Player};
use noughtbot::search::{DepthLimit, SearchParams, Searcher};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "noughtbot-analyze", version, about = "Score every move for the side to move")]
struct Args {
    /// Board string, row-major, e.g. "OO.XX...." ('.', '_' or '-' for empty)
    board: String,

    /// Depth limit in plies past the candidate move
    #[arg(long, default_value = "9", allow_negative_numbers = true)]
    depth: DepthLimit,

    /// Side to search for; defaults to the side implied by the mark counts
    #[arg(long)]
    side: Option<char>,

    /// Threads for root-split search
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn parse_side(c: char) -> Result<Player> {
    match c.to_ascii_uppercase() {
        'X' => Ok(Player::X),
        'O' => Ok(Player::O),
        _ => anyhow::bail!("Invalid side: use 'X' or 'O'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board: Board = args.board.parse().with_context(|| format!("bad board {:?}", args.board))?;
    let side = match args.side {
        Some(c) => parse_side(c)?,
        None => board.side_to_move().context("cannot infer side to move, pass --side")?,
    };
    // The engine always maximizes for O; searching for X means swapping marks.
    let view = if side == Player::X { board.swap_marks() } else { board };

    print!("{}", board);
    let mut s = Searcher::new(SearchParams { depth: args.depth, threads: args.threads, ..SearchParams::default() });
    let t0 = Instant::now();
    let scores = s.root_scores(&view)?;
    let res = s.best_move(&view)?;
    let dt = t0.elapsed();

    for (m, score) in &scores {
        let marker = if *m == res.bestmove { " *" } else { "" };
        println!("move {} (row {}, col {}) score {}{}", m, m / 3, m % 3, score, marker);
    }
    println!(
        "side={} bestmove={} score={} nodes={} elapsed={:.3}s",
        side, res.bestmove, res.score, res.nodes, dt.as_secs_f64()
    );
    Ok(())
}
