/// Policy/value oracle queried once per expanded state.
pub trait GameAnalyzer {
    type State;

    /// Evaluates a canonical state from the perspective of the player to move.
    fn get_state_analysis(&self, game_state: &Self::State) -> GameStateAnalysis;
}

impl<T: GameAnalyzer + ?Sized> GameAnalyzer for &T {
    type State = T::State;

    fn get_state_analysis(&self, game_state: &Self::State) -> GameStateAnalysis {
        (**self).get_state_analysis(game_state)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameStateAnalysis {
    /// Prior over every action index, summing to ~1 before legality masking.
    pub policy_scores: Vec<f32>,
    /// Value estimate in `[-1, 1]`.
    pub value_score: f32,
}

impl GameStateAnalysis {
    pub fn new(value_score: f32, policy_scores: Vec<f32>) -> Self {
        GameStateAnalysis {
            policy_scores,
            value_score,
        }
    }
}
