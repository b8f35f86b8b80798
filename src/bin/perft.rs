use noughtbot::board::Board;
use noughtbot::perft::perft;
use rayon::prelude::*;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for noughtbot")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board string (e.g. "X...O....") or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Split the root moves across threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let board: Board = if args.board == "empty" { Board::empty() } else { args.board.parse()? };
    let to_move = board
        .side_to_move()
        .ok_or_else(|| anyhow::anyhow!("mark counts do not come from an X-first game: {}", board.to_compact()))?;

    let t0 = Instant::now();
    let nodes = if args.threads <= 1 || args.depth == 0 {
        perft(&board, to_move, args.depth)
    } else {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads).build()?;
        pool.install(|| {
            if noughtbot::rules::is_terminal(&board) { return 1; }
            noughtbot::rules::legal_moves(&board)
                .par_iter()
                .map(|&m| perft(&board.with_move(m, to_move), to_move.opponent(), args.depth - 1))
                .sum::<u64>()
        })
    };
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
