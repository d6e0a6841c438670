use engine::{GameEngine, Outcome, Player};

use super::game_state::{GameState, ACTION_COUNT, CELL_COUNT, PASS_ACTION};
use super::symmetry::{dihedral_permutations, permute};

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type State = GameState;
    type Key = u32;

    fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    fn initial_state(&self) -> Self::State {
        GameState::initial()
    }

    fn canonicalize(&self, game_state: &Self::State, player: Player) -> Self::State {
        game_state.scaled(player.sign())
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

        (game_state.place(action, player), player.opponent())
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<bool> {
        let mut legal: Vec<bool> = game_state.board.iter().map(|c| *c == 0).collect();
        legal.push(game_state.is_full());
        legal
    }

    fn outcome(&self, game_state: &Self::State, player: Player) -> Outcome {
        let sign = player.sign();

        if game_state.has_line(sign) {
            Outcome::Win
        } else if game_state.has_line(-sign) {
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

    fn symmetries(&self, game_state: &Self::State, policy: &[f32]) -> Vec<(Self::State, Vec<f32>)> {
        dihedral_permutations()
            .iter()
            .map(|perm| {
                let cells = permute(&game_state.board, perm);
                let mut board = [0; CELL_COUNT];
                board.copy_from_slice(&cells);

                let mut symmetric_policy = permute(&policy[..CELL_COUNT], perm);
                symmetric_policy.push(policy[PASS_ACTION]);

                (GameState::from_board(board), symmetric_policy)
            })
            .collect()
    }
}
