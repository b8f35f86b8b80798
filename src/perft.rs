use crate::board::{Board, Player};
use crate::rules::{is_terminal, legal_moves};

// Copy-per-child perft; finished games count as leaves.
pub fn perft(board: &Board, to_move: Player, depth: u32) -> u64 {
    if depth == 0 || is_terminal(board) { return 1; }
    let mut nodes = 0u64;
    for m in legal_moves(board) {
        let child = board.with_move(m, to_move);
        nodes += perft(&child, to_move.opponent(), depth - 1);
    }
    nodes
}

/// Perft from the side to move implied by the mark counts (X opens).
pub fn perft_from(board: &Board, depth: u32) -> Option<u64> {
    board.side_to_move().map(|p| perft(board, p, depth))
}
