use crate::rsp::moves::Move;
use crate::rsp::player::PlayerNum;
use crate::rsp::round::Round;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error("Round is already resolved. Reset it to play again")]
    RoundResolved,
    #[error("It is not {player}'s turn. Active player: {active}")]
    OutOfTurn { player: PlayerNum, active: PlayerNum },
}

// Fails unless the round is pending and it is player_num's turn
pub(crate) fn check_turn(round: &Round, player_num: PlayerNum) -> Result<(), MoveError> {
    if round.is_game_over() {
        return Err(MoveError::RoundResolved);
    }
    let active = round.active_player();
    if player_num != active {
        return Err(MoveError::OutOfTurn {
            player: player_num,
            active,
        });
    }
    Ok(())
}

// A move that has been checked against the round it will be applied to. The
// round checks the turn again when the move is applied, so a stale move is
// rejected rather than overwriting an earlier choice.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidMove {
    player_num: PlayerNum,
    mv: Move,
}

impl ValidMove {
    // validates:
    // - the round is still pending
    // - the player choosing is the active player
    //
    // The active player never has a move set while the round is pending, so a
    // valid move can't overwrite an earlier choice.
    pub fn new(mv: Move, round: &Round, player_num: PlayerNum) -> Result<Self, MoveError> {
        check_turn(round, player_num)?;
        Ok(ValidMove { player_num, mv })
    }

    pub fn get(self) -> Move {
        self.mv
    }

    pub fn player_num(&self) -> PlayerNum {
        self.player_num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_valid_move() {
        let mut round = Round::new();

        let valid = ValidMove::new(Move::Rock, &round, PlayerNum::P1).unwrap();
        assert_eq!(valid.player_num(), PlayerNum::P1);
        assert_eq!(valid.clone().get(), Move::Rock);

        let out_of_turn = ValidMove::new(Move::Rock, &round, PlayerNum::P2);
        assert_eq!(
            out_of_turn,
            Err(MoveError::OutOfTurn {
                player: PlayerNum::P2,
                active: PlayerNum::P1,
            })
        );

        round.update(valid).unwrap();
        let second_attempt = ValidMove::new(Move::Paper, &round, PlayerNum::P1);
        assert_eq!(
            second_attempt,
            Err(MoveError::OutOfTurn {
                player: PlayerNum::P1,
                active: PlayerNum::P2,
            })
        );

        let valid = ValidMove::new(Move::Scissors, &round, PlayerNum::P2).unwrap();
        round.update(valid).unwrap();
        for player_num in [PlayerNum::P1, PlayerNum::P2] {
            assert_eq!(
                ValidMove::new(Move::Rock, &round, player_num),
                Err(MoveError::RoundResolved)
            );
        }
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfTurn {
            player: PlayerNum::P2,
            active: PlayerNum::P1,
        };
        assert_eq!(
            err.to_string(),
            "It is not Player 2's turn. Active player: Player 1"
        );
    }
}
