use serde::{Deserialize, Serialize};

/// A single training example produced by self-play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionMetrics<S> {
    /// Canonical state the policy was computed for.
    pub game_state: S,
    /// Search policy over every action index.
    pub policy: Vec<f32>,
    /// Final game result from the perspective of the player to move in `game_state`.
    pub score: f32,
}

impl<S> PositionMetrics<S> {
    pub fn new(game_state: S, policy: Vec<f32>, score: f32) -> Self {
        Self {
            game_state,
            policy,
            score,
        }
    }
}
