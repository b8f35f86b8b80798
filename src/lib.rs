// Tic-tac-toe engine: rules + depth-limited alpha-beta search
pub mod board;
pub mod rules;
pub mod search;
pub mod game;
pub mod perft;
pub mod selfplay;

// Re-exports kept minimal: the two entry points the game loop needs
pub use rules::{is_draw, winner};
pub use search::best_move;
