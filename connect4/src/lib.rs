#![allow(clippy::inconsistent_digit_grouping)]
#![allow(clippy::unusual_byte_groupings)]

pub mod engine;
pub mod game_state;

mod board;

use board::*;

pub use self::engine::*;
pub use game_state::*;
