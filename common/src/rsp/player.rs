use crate::rsp::moves::Move;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn other(self) -> PlayerNum {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerNum::P1 => write!(f, "Player 1"),
            PlayerNum::P2 => write!(f, "Player 2"),
        }
    }
}

// The first element is Player 1's move and the second is Player 2's move
#[derive(Serialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Moves([Option<Move>; 2]);

impl Moves {
    pub fn both(&self) -> Option<(Move, Move)> {
        match self.0 {
            [Some(first), Some(second)] => Some((first, second)),
            _ => None,
        }
    }
}

impl Index<PlayerNum> for Moves {
    type Output = Option<Move>;

    fn index(&self, player_num: PlayerNum) -> &Self::Output {
        match player_num {
            PlayerNum::P1 => &self.0[0],
            PlayerNum::P2 => &self.0[1],
        }
    }
}

impl IndexMut<PlayerNum> for Moves {
    fn index_mut(&mut self, player_num: PlayerNum) -> &mut Self::Output {
        match player_num {
            PlayerNum::P1 => &mut self.0[0],
            PlayerNum::P2 => &mut self.0[1],
        }
    }
}
