use crate::board::{Board, Player};
use crate::rules::{is_draw, winner};

// Win scores are biased by depth: faster wins and slower losses score better.
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;
// Outside any reachable score; stands in for -inf/+inf in alpha-beta windows.
pub const INF: i32 = 1_000;

/// Score of a node from O's perspective if the search stops here.
///
/// Checks run in a fixed order: O wins, X wins, draw, horizon.
pub fn terminal_score(board: &Board, depth: u32, limit: u32) -> Option<i32> {
    let d = depth as i32;
    match winner(board) {
        Some(Player::O) => return Some(WIN_SCORE - d),
        Some(Player::X) => return Some(d - WIN_SCORE),
        None => {}
    }
    if is_draw(board) { return Some(DRAW_SCORE); }
    if depth >= limit { return Some(DRAW_SCORE); }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &str) -> Board { s.parse().unwrap() }

    #[test]
    fn wins_are_depth_biased() {
        assert_eq!(terminal_score(&b("OOOXX.X.."), 0, 5), Some(10));
        assert_eq!(terminal_score(&b("OOOXX.X.."), 3, 5), Some(7));
        assert_eq!(terminal_score(&b("XXXOO.O.."), 2, 5), Some(-8));
    }

    #[test]
    fn win_is_scored_past_the_horizon() {
        assert_eq!(terminal_score(&b("OOOXX.X.."), 6, 5), Some(4));
    }

    #[test]
    fn horizon_and_draw_score_zero() {
        assert_eq!(terminal_score(&b("XOXXOOOXX"), 0, 5), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&b("X...O...."), 1, 1), Some(DRAW_SCORE));
        assert_eq!(terminal_score(&b("X...O...."), 0, 1), None);
    }
}
