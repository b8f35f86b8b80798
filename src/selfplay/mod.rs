use crate::board::{Board, Player};
use crate::game::Tally;
use crate::rules::{legal_moves, outcome, Outcome};
use crate::search::{DepthLimit, SearchError, SearchParams, Searcher};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub depth: DepthLimit,
    pub seed: u64,
    pub threads: usize,
    pub random_x: bool, // X plays uniformly random moves instead of searching
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, depth: DepthLimit::default(), seed: 42, threads: 1, random_x: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: Outcome,
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>, SearchError> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut searcher = Searcher::new(SearchParams { depth: params.depth, threads: params.threads, seed: params.seed });
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let record = play_game(&mut searcher, &mut rng, params.random_x)?;
        debug!("game {} moves={:?} outcome={:?}", gi, record.moves, record.outcome);
        games.push(record);
    }
    Ok(games)
}

pub fn play_game(searcher: &mut Searcher, rng: &mut SmallRng, random_x: bool) -> Result<GameRecord, SearchError> {
    let mut board = Board::empty();
    let mut player = Player::X;
    let mut moves = Vec::with_capacity(9);
    while outcome(&board) == Outcome::InProgress {
        let mv = if random_x && player == Player::X {
            let legal = legal_moves(&board);
            legal[rng.gen_range(0..legal.len())]
        } else {
            searcher.best_move_for(&board, player)?.bestmove
        };
        board = board.with_move(mv, player);
        moves.push(mv);
        player = player.opponent();
    }
    Ok(GameRecord { moves, outcome: outcome(&board) })
}

pub fn summarize(games: &[GameRecord]) -> Tally {
    let mut t = Tally::default();
    for g in games { t.record(g.outcome); }
    t
}

/// One JSON object per line.
pub fn write_jsonl<W: Write>(games: &[GameRecord], mut out: W) -> std::io::Result<()> {
    for g in games {
        serde_json::to_writer(&mut out, g)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
