use crate::board::{Board, Player};
use crate::rules::{legal_moves, outcome, Outcome};
use crate::search::depth::DepthLimit;
use crate::search::eval::{terminal_score, INF};
use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: DepthLimit,
    pub threads: usize,
    /// Seeds the pre-search default move only; never changes the result.
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DepthLimit::default(), threads: 1, seed: 42 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub bestmove: usize,
    pub score: i32,
    pub nodes: u64,
    /// True if no root move was scored and the random default was returned.
    pub fallback: bool,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("depth limit must be non-negative, got {0}")]
    NegativeDepth(i64),
    #[error("invalid depth limit {0:?}")]
    InvalidDepth(String),
    #[error("cannot search a finished game ({0:?})")]
    GameOver(Outcome),
}

/// Depth-limited minimax with alpha-beta pruning. O maximizes, X minimizes.
pub struct Searcher {
    params: SearchParams,
    pub(crate) nodes: u64,
    rng: SmallRng,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0, rng: SmallRng::seed_from_u64(params.seed) }
    }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn set_depth(&mut self, depth: DepthLimit) { self.params.depth = depth; }

    pub fn get_threads(&self) -> usize { self.params.threads.max(1) }

    pub fn nodes(&self) -> u64 { self.nodes }

    /// Chooses O's move on a board that is still in progress.
    pub fn best_move(&mut self, board: &Board) -> Result<SearchResult, SearchError> {
        let state = outcome(board);
        if state != Outcome::InProgress { return Err(SearchError::GameOver(state)); }
        self.nodes = 0;
        let moves = legal_moves(board);
        // Pre-search default. The scored loop below overwrites it on its first move.
        let mut bestmove = *moves.choose(&mut self.rng).ok_or(SearchError::GameOver(state))?;
        let mut best_score = -INF;
        let mut fallback = true;
        for (m, score) in self.score_root(board, &moves) {
            trace!("root move {} score {}", m, score);
            if score > best_score {
                best_score = score;
                bestmove = m;
                fallback = false;
            }
        }
        if fallback { warn!("no root move scored, returning default move {}", bestmove); }
        debug!(
            "search depth={} bestmove={} score={} nodes={}",
            self.params.depth, bestmove, best_score, self.nodes
        );
        Ok(SearchResult { bestmove, score: best_score, nodes: self.nodes, fallback })
    }

    /// Chooses a move for `player` by searching the board with marks swapped
    /// when `player` is X. The score is from `player`'s point of view.
    pub fn best_move_for(&mut self, board: &Board, player: Player) -> Result<SearchResult, SearchError> {
        match player {
            Player::O => self.best_move(board),
            Player::X => self.best_move(&board.swap_marks()),
        }
    }

    /// Minimax score of every legal O move, ascending by index.
    pub fn root_scores(&mut self, board: &Board) -> Result<Vec<(usize, i32)>, SearchError> {
        let state = outcome(board);
        if state != Outcome::InProgress { return Err(SearchError::GameOver(state)); }
        self.nodes = 0;
        let moves = legal_moves(board);
        Ok(self.score_root(board, &moves))
    }

    fn score_root(&mut self, board: &Board, moves: &[usize]) -> Vec<(usize, i32)> {
        if self.get_threads() > 1 && moves.len() > 1 {
            return self.score_root_parallel(board, moves);
        }
        let mut out = Vec::with_capacity(moves.len());
        for &m in moves {
            let child = board.with_move(m, Player::O);
            let score = self.minimax(&child, 0, Player::X, -INF, INF);
            out.push((m, score));
        }
        out
    }

    // Every root move gets its own worker and a full window, same as the
    // serial loop, so the reduction order alone decides ties.
    fn score_root_parallel(&mut self, board: &Board, moves: &[usize]) -> Vec<(usize, i32)> {
        let params = SearchParams { threads: 1, ..self.params };
        let results: Vec<(usize, i32, u64)> = moves.par_iter().map(|&m| {
            let mut w = Searcher::new(params);
            let child = board.with_move(m, Player::O);
            let score = w.minimax(&child, 0, Player::X, -INF, INF);
            (m, score, w.nodes)
        }).collect();
        self.nodes += results.iter().map(|&(_, _, n)| n).sum::<u64>();
        results.into_iter().map(|(m, s, _)| (m, s)).collect()
    }

    fn minimax(&mut self, board: &Board, depth: u32, to_move: Player, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if let Some(score) = terminal_score(board, depth, self.params.depth.plies()) { return score; }
        let maximizing = to_move == Player::O;
        let mut best = if maximizing { -INF } else { INF };
        for m in legal_moves(board) {
            let child = board.with_move(m, to_move);
            let score = self.minimax(&child, depth + 1, to_move.opponent(), alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha { break; }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(depth: u32) -> Searcher {
        Searcher::new(SearchParams { depth: DepthLimit::new(depth), ..SearchParams::default() })
    }

    #[test]
    fn counts_nodes() {
        let mut s = searcher(1);
        let r = s.best_move(&Board::empty()).unwrap();
        // 9 root children, each with 8 replies cut at the horizon.
        assert_eq!(r.nodes, 81);
        assert_eq!(s.nodes(), 81);
    }

    #[test]
    fn depth_zero_scores_only_immediate_wins() {
        let mut s = searcher(0);
        let r = s.best_move(&"XO.XO....".parse().unwrap()).unwrap();
        assert_eq!((r.bestmove, r.score), (7, 10));
        let r = s.best_move(&"X.O.X....".parse().unwrap()).unwrap();
        assert_eq!((r.bestmove, r.score), (1, 0));
    }

    #[test]
    fn terminal_board_is_an_error() {
        let mut s = searcher(3);
        let won: Board = "XXXOO....".parse().unwrap();
        assert!(matches!(s.best_move(&won), Err(SearchError::GameOver(Outcome::Win(Player::X)))));
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert!(matches!(s.root_scores(&drawn), Err(SearchError::GameOver(Outcome::Draw))));
    }

    #[test]
    fn best_move_for_x_uses_swapped_board() {
        // X to move can win at 2.
        let b: Board = "XX.OO....".parse().unwrap();
        let mut s = searcher(3);
        let r = s.best_move_for(&b, Player::X).unwrap();
        assert_eq!((r.bestmove, r.score), (2, 10));
    }

    #[test]
    fn root_scores_cover_all_moves() {
        let mut s = searcher(3);
        let scores = s.root_scores(&"OO.XX....".parse().unwrap()).unwrap();
        let moves: Vec<usize> = scores.iter().map(|&(m, _)| m).collect();
        assert_eq!(moves, vec![2, 5, 6, 7, 8]);
        assert_eq!(scores[0], (2, 10));
        assert_eq!(scores[1], (5, 0));
        assert!(scores[2..].iter().all(|&(_, s)| s == -9));
    }
}
