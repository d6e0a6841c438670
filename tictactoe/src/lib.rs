pub mod engine;
pub mod game_state;

mod symmetry;

pub use self::engine::*;
pub use game_state::*;
