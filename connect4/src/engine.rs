use engine::{GameEngine, Outcome, Player};

use super::GameState;
use crate::COLS;

pub const PASS_ACTION: usize = COLS;
pub const ACTION_COUNT: usize = COLS + 1;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type State = GameState;
    type Key = u128;

    fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    fn initial_state(&self) -> Self::State {
        GameState::initial()
    }

    fn canonicalize(&self, game_state: &Self::State, player: Player) -> Self::State {
        match player {
            Player::One => *game_state,
            Player::Two => game_state.swapped(),
        }
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: usize,
        player: Player,
    ) -> (Self::State, Player) {
        if action == PASS_ACTION {
            return (*game_state, player.opponent());
        }

        (game_state.drop_piece(action, player), player.opponent())
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<bool> {
        let mut legal = game_state.get_valid_columns();
        legal.push(game_state.is_full());
        legal
    }

    fn outcome(&self, game_state: &Self::State, player: Player) -> Outcome {
        if game_state.has_connected_4(player) {
            Outcome::Win
        } else if game_state.has_connected_4(player.opponent()) {
            Outcome::Loss
        } else if game_state.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    fn state_key(&self, game_state: &Self::State) -> Self::Key {
        game_state.key()
    }

    /// The board is symmetric left to right. The pass entry stays last.
    fn symmetries(&self, game_state: &Self::State, policy: &[f32]) -> Vec<(Self::State, Vec<f32>)> {
        let mut mirrored_policy: Vec<f32> = policy[..COLS].iter().rev().copied().collect();
        mirrored_policy.push(policy[PASS_ACTION]);

        vec![
            (*game_state, policy.to_vec()),
            (game_state.mirrored(), mirrored_policy),
        ]
    }
}
