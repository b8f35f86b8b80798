//! Board value type for the 3x3 grid.
//!
//! A `Board` is a `Copy` array of nine cells, row-major. Placing a mark
//! returns a new board, so search code can branch without undo logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self { Player::X => Player::O, Player::O => Player::X }
    }

    pub fn mark(self) -> Cell { Cell::Mark(self) }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Player::X => write!(f, "X"), Player::O => write!(f, "O") }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool { self == Cell::Empty }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mark(Player::X) => 'X',
            Cell::Mark(Player::O) => 'O',
        }
    }

    fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Mark(Player::X)),
            'O' | 'o' => Some(Cell::Mark(Player::O)),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
    #[error("expected 9 cells, found {0}")]
    WrongLength(usize),
    #[error("cell index {0} is out of range (0..=8)")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    Occupied(usize),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn empty() -> Self { Self::default() }

    pub fn from_cells(cells: [Cell; CELLS]) -> Self { Self { cells } }

    pub fn cells(&self) -> &[Cell; CELLS] { &self.cells }

    pub fn cell(&self, index: usize) -> Cell { self.cells[index] }

    /// Returns a copy of the board with `player`'s mark at `index`.
    ///
    /// Unchecked: callers inside the search only pass indices taken from
    /// `rules::legal_moves`. Use [`Board::try_place`] for external input.
    pub fn with_move(&self, index: usize, player: Player) -> Board {
        debug_assert!(self.cells[index].is_empty(), "cell {index} already marked");
        let mut next = *self;
        next.cells[index] = player.mark();
        next
    }

    pub fn try_place(&self, index: usize, player: Player) -> Result<Board, BoardError> {
        if index >= CELLS { return Err(BoardError::OutOfRange(index)); }
        if !self.cells[index].is_empty() { return Err(BoardError::Occupied(index)); }
        Ok(self.with_move(index, player))
    }

    /// Replays alternating moves from the empty board, X first.
    pub fn from_moves(moves: &[usize]) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        let mut player = Player::X;
        for &m in moves {
            board = board.try_place(m, player)?;
            player = player.opponent();
        }
        Ok(board)
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == player.mark()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool { self.empty_count() == 0 }

    /// Side to move assuming X opened the game.
    ///
    /// Returns `None` for mark counts no legal game can produce.
    pub fn side_to_move(&self) -> Option<Player> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x == o { Some(Player::X) } else if x == o + 1 { Some(Player::O) } else { None }
    }

    /// Exchanges X and O marks. Searching the swapped board yields X's move.
    pub fn swap_marks(&self) -> Board {
        let mut cells = self.cells;
        for c in &mut cells {
            if let Cell::Mark(p) = *c { *c = Cell::Mark(p.opponent()); }
        }
        Board { cells }
    }

    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut n = 0usize;
        for ch in s.trim().chars() {
            if ch == '/' || ch == '|' || ch == '\n' || ch == '\t' || ch == '\r' { continue; }
            let cell = Cell::from_char(ch).ok_or(BoardError::InvalidCell(ch))?;
            if n < CELLS { cells[n] = cell; }
            n += 1;
        }
        if n != CELLS { return Err(BoardError::WrongLength(n)); }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let r = &self.cells[row * 3..row * 3 + 3];
            writeln!(f, " {} | {} | {}", r[0].to_char(), r[1].to_char(), r[2].to_char())?;
            if row < 2 { writeln!(f, "---+---+---")?; }
        }
        Ok(())
    }
}
