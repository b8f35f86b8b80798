//! Win, draw and move-generation rules. Pure functions of the board.

use crate::board::{Board, Cell, Player, CELLS};
use serde::{Deserialize, Serialize};

/// Rows, then columns, then diagonals.
pub static LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for &[a, b, c] in LINES.iter() {
        if let Cell::Mark(p) = cells[a] {
            if cells[b] == cells[a] && cells[c] == cells[a] { return Some(p); }
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

/// Empty cell indices in ascending order. Search tie-breaks rely on the order.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELLS).filter(|&i| board.cell(i).is_empty()).collect()
}

pub fn outcome(board: &Board) -> Outcome {
    if let Some(p) = winner(board) { return Outcome::Win(p); }
    if is_draw(board) { Outcome::Draw } else { Outcome::InProgress }
}

pub fn is_terminal(board: &Board) -> bool {
    outcome(board) != Outcome::InProgress
}
