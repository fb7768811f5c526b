use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Scissors,
    Paper,
}

impl Move {
    // Display order of the move buttons
    pub const ALL: [Move; 3] = [Move::Rock, Move::Scissors, Move::Paper];

    /// The move that this move defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Move::Rock => "✊🏼",
            Move::Scissors => "✌🏼",
            Move::Paper => "👋🏼",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Scissors => "scissors",
            Move::Paper => "paper",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Paper.beats(), Move::Rock);
        assert_eq!(Move::Scissors.beats(), Move::Paper);

        // Every move beats exactly one other move and is beaten by exactly one
        for mv in Move::ALL {
            assert_ne!(mv.beats(), mv);
            let beaten_by = Move::ALL.iter().filter(|other| other.beats() == mv).count();
            assert_eq!(beaten_by, 1);
        }
    }

    #[test]
    fn test_display_symbol() {
        assert_eq!(Move::Scissors.to_string(), "✌🏼");
        assert_eq!(Move::Rock.to_string(), "✊🏼");
        assert_eq!(Move::Paper.name(), "paper");
    }
}
