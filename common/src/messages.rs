use crate::config::Labels;
use crate::{Move, PlayerNum};
use serde::{Deserialize, Serialize};

// Outcome of a resolved round from one player's point of view
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    YourTurn,
    Waiting,
    Finished(Outcome),
}

impl Status {
    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Status::YourTurn => labels.your_turn.as_str(),
            Status::Waiting => labels.waiting.as_str(),
            Status::Finished(Outcome::Win) => labels.win.as_str(),
            Status::Finished(Outcome::Lose) => labels.lose.as_str(),
            Status::Finished(Outcome::Draw) => labels.draw.as_str(),
        }
    }
}

/// Everything one player's half of the table shows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerPanel {
    pub player: PlayerNum,
    pub allowed_moves: Vec<Move>,
    pub status: Status,
    // Only set once both players have chosen
    pub revealed_move: Option<Move>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        let labels = Labels {
            win: "Won".to_string(),
            lose: "Lost".to_string(),
            ..Labels::default()
        };
        assert_eq!(Status::Finished(Outcome::Win).label(&labels), "Won");
        assert_eq!(Status::Finished(Outcome::Lose).label(&labels), "Lost");
        assert_eq!(Status::Waiting.label(&labels), "...");
        assert_eq!(Status::YourTurn.label(&Labels::default()), "");
    }
}
