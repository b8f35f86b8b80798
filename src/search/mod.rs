//! Depth-limited minimax search with alpha-beta pruning.
//!
//! ```
//! use noughtbot::board::Board;
//! use noughtbot::search::best_move;
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! let r = best_move(&board, 3).unwrap();
//! assert_eq!((r.bestmove, r.score), (2, 10));
//! ```

pub mod alphabeta;
pub mod depth;
pub mod eval;

pub use alphabeta::{SearchError, SearchParams, SearchResult, Searcher};
pub use depth::{DepthLimit, Difficulty};

use crate::board::Board;

/// One-shot search for O's move. Negative `depth_limit` is rejected.
pub fn best_move(board: &Board, depth_limit: i64) -> Result<SearchResult, SearchError> {
    let depth = DepthLimit::try_from(depth_limit)?;
    Searcher::new(SearchParams { depth, ..SearchParams::default() }).best_move(board)
}
