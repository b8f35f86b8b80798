//! Search depth limits and the difficulty tiers that map onto them.

use std::fmt;
use std::str::FromStr;

use super::alphabeta::SearchError;

/// Number of plies the search may look past the candidate move.
///
/// Constructed only from non-negative values; negative input is an error
/// rather than being clamped to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepthLimit(u32);

impl DepthLimit {
    /// Enough plies to reach the end of any game from the empty board.
    pub const FULL: DepthLimit = DepthLimit(9);

    pub const fn new(plies: u32) -> Self { Self(plies) }

    pub const fn plies(self) -> u32 { self.0 }
}

impl Default for DepthLimit {
    fn default() -> Self { Difficulty::default().depth() }
}

impl TryFrom<i64> for DepthLimit {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 { return Err(SearchError::NegativeDepth(value)); }
        Ok(Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }
}

impl FromStr for DepthLimit {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: i64 = s.trim().parse().map_err(|_| SearchError::InvalidDepth(s.to_string()))?;
        DepthLimit::try_from(v)
    }
}

impl fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn depth(self) -> DepthLimit {
        match self {
            Difficulty::Easy => DepthLimit(1),
            Difficulty::Medium => DepthLimit(3),
            Difficulty::Hard => DepthLimit(5),
        }
    }
}

impl From<Difficulty> for DepthLimit {
    fn from(d: Difficulty) -> Self { d.depth() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_depth_is_rejected() {
        assert!(matches!(DepthLimit::try_from(-1), Err(SearchError::NegativeDepth(-1))));
        assert!(matches!("-3".parse::<DepthLimit>(), Err(SearchError::NegativeDepth(-3))));
    }

    #[test]
    fn zero_and_positive_depths_accepted() {
        assert_eq!(DepthLimit::try_from(0).unwrap().plies(), 0);
        assert_eq!("5".parse::<DepthLimit>().unwrap(), DepthLimit::new(5));
    }

    #[test]
    fn garbage_depth_is_rejected() {
        assert!(matches!("deep".parse::<DepthLimit>(), Err(SearchError::InvalidDepth(_))));
    }

    #[test]
    fn difficulty_tiers() {
        assert_eq!(Difficulty::Easy.depth().plies(), 1);
        assert_eq!(Difficulty::Medium.depth().plies(), 3);
        assert_eq!(Difficulty::Hard.depth().plies(), 5);
        assert_eq!(DepthLimit::default(), DepthLimit::new(3));
    }
}
