use std::fmt::Debug;
use std::hash::Hash;

use super::players::Player;
use super::value::Outcome;

/// Rules of a two-player zero-sum board game.
///
/// Every method is a pure function over an opaque state. Actions are indices in
/// `0..action_count()`, one of which is reserved for "no move available".
pub trait GameEngine {
    type State: Clone + PartialEq + Debug;
    /// Identity of a canonical state. Must be injective over distinct canonical states.
    type Key: Clone + Eq + Hash + Debug;

    fn action_count(&self) -> usize;

    fn initial_state(&self) -> Self::State;

    /// Folds the acting player into the state so that `player` is viewed as `Player::One`.
    fn canonicalize(&self, state: &Self::State, player: Player) -> Self::State;

    fn take_action(
        &self,
        state: &Self::State,
        action: usize,
        player: Player,
    ) -> (Self::State, Player);

    /// Legality mask of length `action_count()`. Has at least one set entry when the game is not over.
    fn legal_actions(&self, state: &Self::State) -> Vec<bool>;

    fn outcome(&self, state: &Self::State, player: Player) -> Outcome;

    fn state_key(&self, state: &Self::State) -> Self::Key;

    /// Equivalent `(state, policy)` pairs under the symmetries of the board.
    fn symmetries(&self, state: &Self::State, policy: &[f32]) -> Vec<(Self::State, Vec<f32>)> {
        vec![(state.clone(), policy.to_vec())]
    }
}
