use crate::rsp::input::{check_turn, MoveError, ValidMove};
use crate::rsp::moves::Move;
use crate::rsp::player::{Moves, PlayerNum};
use serde::Serialize;
use tracing::debug;

/// Result of a round from the first mover's perspective.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Win,
    Draw,
    Loss,
}

impl RoundResult {
    // The same result seen from the other player's side
    pub fn inverted(self) -> RoundResult {
        match self {
            RoundResult::Win => RoundResult::Loss,
            RoundResult::Loss => RoundResult::Win,
            RoundResult::Draw => RoundResult::Draw,
        }
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    // Fewer than two moves have been chosen
    Pending,
    Resolved,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Round {
    moves: Moves,
    active_player: PlayerNum,
}

impl Default for Round {
    fn default() -> Self {
        Round::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Round {
            moves: Moves::default(),
            active_player: PlayerNum::P1,
        }
    }

    pub fn active_player(&self) -> PlayerNum {
        self.active_player
    }

    pub fn move_of(&self, player_num: PlayerNum) -> Option<Move> {
        self.moves[player_num]
    }

    pub fn first_move(&self) -> Option<Move> {
        self.moves[PlayerNum::P1]
    }

    pub fn second_move(&self) -> Option<Move> {
        self.moves[PlayerNum::P2]
    }

    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::Resolved
        } else {
            Phase::Pending
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.moves.both().is_some()
    }

    pub fn evaluate_result(&self) -> Option<RoundResult> {
        let (first, second) = self.moves.both()?;
        if first == second {
            return Some(RoundResult::Draw);
        }
        if first.beats() == second {
            Some(RoundResult::Win)
        } else {
            Some(RoundResult::Loss)
        }
    }

    pub fn winner(&self) -> Option<PlayerNum> {
        match self.evaluate_result()? {
            RoundResult::Win => Some(PlayerNum::P1),
            RoundResult::Loss => Some(PlayerNum::P2),
            RoundResult::Draw => None,
        }
    }

    // Records the move and hands the turn to the other player. Once both
    // moves are in, the active player stays put until the round is reset.
    pub fn update(&mut self, valid_move: ValidMove) -> Result<(), MoveError> {
        let player_num = valid_move.player_num();
        check_turn(self, player_num)?;
        self.moves[player_num] = Some(valid_move.get());
        if !self.is_game_over() {
            self.active_player = player_num.other();
        }
        debug!(
            "Round after {} moved: active {}, phase {:?}",
            player_num,
            self.active_player,
            self.phase()
        );
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Round::new();
    }
}
