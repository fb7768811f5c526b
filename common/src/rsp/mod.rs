mod controller;
mod input;
mod moves;
mod player;
mod round;

pub use controller::Controller;
pub use input::{MoveError, ValidMove};
pub use moves::Move;
pub use player::{Moves, PlayerNum};
pub use round::{Phase, Round, RoundResult};
