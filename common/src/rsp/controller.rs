use crate::config::Labels;
use crate::messages::{Outcome, PlayerPanel, Status};
use crate::rsp::input::{MoveError, ValidMove};
use crate::rsp::moves::Move;
use crate::rsp::player::PlayerNum;
use crate::rsp::round::{Round, RoundResult};
use tracing::{info, warn};

/// Query and command surface that the view drives. Owns the only copy of the
/// round; views poll [`Controller::panel`] after every command.
#[derive(Debug, Default)]
pub struct Controller {
    round: Round,
    labels: Labels,
}

impl Controller {
    pub fn new() -> Self {
        Controller::with_labels(Labels::default())
    }

    pub fn with_labels(labels: Labels) -> Self {
        Controller {
            round: Round::new(),
            labels,
        }
    }

    #[cfg(test)]
    pub(crate) fn round(&self) -> &Round {
        &self.round
    }

    pub fn allowed_moves(&self, player_num: PlayerNum) -> Vec<Move> {
        if self.round.active_player() == player_num && !self.round.is_game_over() {
            Move::ALL.to_vec()
        } else {
            Vec::new()
        }
    }

    pub fn outcome(&self, player_num: PlayerNum) -> Option<Outcome> {
        let result = self.round.evaluate_result()?;
        // evaluate_result is from Player 1's side
        let result = match player_num {
            PlayerNum::P1 => result,
            PlayerNum::P2 => result.inverted(),
        };
        let outcome = match result {
            RoundResult::Win => Outcome::Win,
            RoundResult::Loss => Outcome::Lose,
            RoundResult::Draw => Outcome::Draw,
        };
        Some(outcome)
    }

    pub fn status(&self, player_num: PlayerNum) -> Status {
        match self.outcome(player_num) {
            Some(outcome) => Status::Finished(outcome),
            None if self.round.active_player() == player_num => Status::YourTurn,
            None => Status::Waiting,
        }
    }

    pub fn status_text(&self, player_num: PlayerNum) -> String {
        self.status(player_num).label(&self.labels).to_string()
    }

    // Moves stay hidden until both players have committed
    pub fn revealed(&self, player_num: PlayerNum) -> Option<Move> {
        if self.round.is_game_over() {
            self.round.move_of(player_num)
        } else {
            None
        }
    }

    pub fn revealed_move(&self, player_num: PlayerNum) -> String {
        self.revealed(player_num)
            .map(|mv| mv.symbol().to_string())
            .unwrap_or_default()
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_game_over()
    }

    pub fn choose_move(&mut self, mv: Move, player_num: PlayerNum) -> Result<(), MoveError> {
        let valid_move = match ValidMove::new(mv, &self.round, player_num) {
            Ok(valid_move) => valid_move,
            Err(err) => {
                warn!("Rejected {} from {}: {}", mv.name(), player_num, err);
                return Err(err);
            }
        };
        info!("{} chose {}", player_num, mv);
        self.round.update(valid_move)?;
        if self.round.is_game_over() {
            match self.round.winner() {
                Some(winner) => info!("Round resolved, {} wins", winner),
                None => info!("Round resolved as a draw"),
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        info!("Resetting round");
        self.round.reset();
    }

    pub fn panel(&self, player_num: PlayerNum) -> PlayerPanel {
        PlayerPanel {
            player: player_num,
            allowed_moves: self.allowed_moves(player_num),
            status: self.status(player_num),
            revealed_move: self.revealed(player_num),
        }
    }
}
