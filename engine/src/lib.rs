pub mod engine;
pub mod players;
pub mod value;

pub use crate::engine::*;
pub use crate::players::*;
pub use crate::value::*;
