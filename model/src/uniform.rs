use std::marker::PhantomData;

use super::analytics::{GameAnalyzer, GameStateAnalysis};

/// Oracle that knows nothing: equal priors over every action and a constant value.
pub struct UniformAnalyzer<S> {
    action_count: usize,
    value_score: f32,
    _phantom: PhantomData<fn(&S)>,
}

impl<S> UniformAnalyzer<S> {
    pub fn new(action_count: usize) -> Self {
        Self::with_value(action_count, 0.0)
    }

    pub fn with_value(action_count: usize, value_score: f32) -> Self {
        Self {
            action_count,
            value_score,
            _phantom: PhantomData,
        }
    }
}

impl<S> GameAnalyzer for UniformAnalyzer<S> {
    type State = S;

    fn get_state_analysis(&self, _: &Self::State) -> GameStateAnalysis {
        let policy_score = if self.action_count == 0 {
            0.0
        } else {
            1.0 / self.action_count as f32
        };

        GameStateAnalysis::new(self.value_score, vec![policy_score; self.action_count])
    }
}
