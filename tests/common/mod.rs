#![allow(dead_code)]

use noughtbot::board::{Board, Player};
use noughtbot::rules::{is_terminal, legal_moves, winner};
use std::collections::{HashMap, HashSet};

/// Every position reachable from the empty board with X opening, including
/// finished ones.
pub fn reachable_positions() -> HashSet<Board> {
    fn walk(b: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(b) || is_terminal(&b) { return; }
        for m in legal_moves(&b) { walk(b.with_move(m, to_move), to_move.opponent(), seen); }
    }
    let mut seen = HashSet::new();
    walk(Board::empty(), Player::X, &mut seen);
    seen
}

/// Game-theoretic value from O's side: 1 O wins, 0 draw, -1 X wins.
pub fn game_value(b: Board, to_move: Player, memo: &mut HashMap<(Board, Player), i32>) -> i32 {
    if let Some(v) = memo.get(&(b, to_move)) { return *v; }
    let v = match winner(&b) {
        Some(Player::O) => 1,
        Some(Player::X) => -1,
        None if b.is_full() => 0,
        None => {
            let vals = legal_moves(&b)
                .into_iter()
                .map(|m| game_value(b.with_move(m, to_move), to_move.opponent(), memo));
            if to_move == Player::O { vals.max().unwrap_or(0) } else { vals.min().unwrap_or(0) }
        }
    };
    memo.insert((b, to_move), v);
    v
}
