//! Game session driver: a human playing X against the engine playing O.
//!
//! The session owns the board; the search only ever sees a copy. Outcome is
//! recomputed from the board on every query instead of being cached.

use crate::board::{Board, BoardError, Player};
use crate::rules::{outcome, Outcome};
use crate::search::{SearchError, SearchResult, Searcher};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is over ({0:?})")]
    Finished(Outcome),
    #[error("it is {0}'s turn")]
    WrongTurn(Player),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub player: Player,
    pub index: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    history: Vec<Ply>,
}

impl Game {
    pub fn new() -> Self { Self::default() }

    pub fn board(&self) -> &Board { &self.board }

    pub fn history(&self) -> &[Ply] { &self.history }

    pub fn last_move(&self) -> Option<usize> { self.history.last().map(|p| p.index) }

    pub fn outcome(&self) -> Outcome { outcome(&self.board) }

    /// X opens and sides alternate, so the history length decides the turn.
    pub fn to_move(&self) -> Player {
        if self.history.len() % 2 == 0 { Player::X } else { Player::O }
    }

    /// Plays `index` for the side to move.
    pub fn play(&mut self, index: usize) -> Result<Outcome, GameError> {
        let state = self.outcome();
        if state != Outcome::InProgress { return Err(GameError::Finished(state)); }
        let player = self.to_move();
        self.board = self.board.try_place(index, player)?;
        self.history.push(Ply { player, index });
        Ok(self.outcome())
    }

    /// Asks the engine for O's reply and plays it.
    pub fn engine_move(&mut self, searcher: &mut Searcher) -> Result<SearchResult, GameError> {
        let state = self.outcome();
        if state != Outcome::InProgress { return Err(GameError::Finished(state)); }
        if self.to_move() != Player::O { return Err(GameError::WrongTurn(Player::X)); }
        let res = searcher.best_move(&self.board)?;
        self.play(res.bestmove)?;
        Ok(res)
    }

    pub fn reset(&mut self) { *self = Self::new(); }
}

/// Results across the games of one process, from the human's side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.wins += 1,
            Outcome::Win(Player::O) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        info!("tally now {}W/{}L/{}D", self.wins, self.losses, self.draws);
    }

    pub fn games(&self) -> u32 { self.wins + self.losses + self.draws }
}
