use anyhow::{Context, Result};
use clap::Parser;
use noughtbot::board::{Player, CELLS};
use noughtbot::game::{Game, GameError, Tally};
use noughtbot::rules::Outcome;
use noughtbot::search::{DepthLimit, Difficulty, SearchParams, Searcher};
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against the alpha-beta engine", long_about = None)]
struct Args {
    /// Engine strength: easy (1 ply), medium (3), hard (5)
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Explicit depth limit, overrides --difficulty
    #[arg(long, allow_negative_numbers = true)]
    depth: Option<DepthLimit>,

    /// Number cells 0-8 instead of 1-9
    #[arg(long)]
    zero_based: bool,

    /// Threads for root-split search
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print search statistics
    #[arg(long)]
    verbose: bool,
}

fn print_help(offset: usize) {
    println!("Cells are numbered row by row, {} to {}:", offset, offset + CELLS - 1);
    for row in 0..3 {
        let n = |c: usize| row * 3 + c + offset;
        println!("  {} {} {}", n(0), n(1), n(2));
    }
    println!("Commands: <cell>, new, help, quit");
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Win(Player::X) => println!("You win!"),
        Outcome::Win(Player::O) => println!("The engine wins."),
        Outcome::Draw => println!("It's a draw."),
        Outcome::InProgress => {}
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let depth = args.depth.unwrap_or_else(|| args.difficulty.depth());
    let mut searcher = Searcher::new(SearchParams { depth, threads: args.threads, ..SearchParams::default() });
    let offset = if args.zero_based { 0 } else { 1 };

    let mut game = Game::new();
    let mut tally = Tally::default();
    println!("You are X and move first. The engine plays O at depth {}.", depth);
    print_help(offset);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!("\n{}", game.board());

        let outcome = game.outcome();
        if outcome != Outcome::InProgress {
            announce(outcome);
            tally.record(outcome);
            println!("Session: {} wins, {} losses, {} draws", tally.wins, tally.losses, tally.draws);
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            if line.context("failed to read stdin")?.trim().eq_ignore_ascii_case("y") {
                game.reset();
                continue;
            }
            break;
        }

        if game.to_move() == Player::O {
            let t0 = Instant::now();
            let res = game.engine_move(&mut searcher)?;
            println!("Engine plays {}", res.bestmove + offset);
            if args.verbose {
                println!("score={} nodes={} elapsed={:.3}s", res.score, res.nodes, t0.elapsed().as_secs_f64());
            }
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        match input {
            "quit" | "q" => break,
            "new" => { game.reset(); continue; }
            "help" | "?" => { print_help(offset); continue; }
            _ => {}
        }
        let index = match input.parse::<usize>().ok().and_then(|c| c.checked_sub(offset)) {
            Some(i) if i < CELLS => i,
            _ => {
                println!("Enter a cell from {} to {}, or 'help'", offset, offset + CELLS - 1);
                continue;
            }
        };
        match game.play(index) {
            Ok(_) => {}
            Err(GameError::Board(e)) => println!("Illegal move: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    println!("Final: {} wins, {} losses, {} draws over {} games", tally.wins, tally.losses, tally.draws, tally.games());
    Ok(())
}
