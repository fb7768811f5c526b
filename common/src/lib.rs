pub mod config;
pub mod messages;
mod rsp;

pub use rsp::*;
