use engine::{Outcome, Player};
use model::PositionMetrics;

/// Result of a single self-play episode.
#[derive(Debug)]
pub struct SelfPlayMetrics<S> {
    examples: Vec<PositionMetrics<S>>,
    terminal_state: S,
    player_to_move: Player,
    outcome: Outcome,
    num_moves: usize,
}

impl<S> SelfPlayMetrics<S> {
    pub fn new(
        examples: Vec<PositionMetrics<S>>,
        terminal_state: S,
        player_to_move: Player,
        outcome: Outcome,
        num_moves: usize,
    ) -> Self {
        Self {
            examples,
            terminal_state,
            player_to_move,
            outcome,
            num_moves,
        }
    }

    pub fn into_examples(self) -> Vec<PositionMetrics<S>> {
        self.examples
    }

    pub fn examples(&self) -> &[PositionMetrics<S>] {
        &self.examples
    }

    pub fn terminal_state(&self) -> &S {
        &self.terminal_state
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    /// Outcome from the perspective of the player to move at the terminal state.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Outcome from the perspective of `player`.
    pub fn outcome_for(&self, player: Player) -> Outcome {
        if player == self.player_to_move {
            self.outcome
        } else {
            self.outcome.reversed()
        }
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }
}
