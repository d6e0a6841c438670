use engine::{GameEngine, Outcome, Player};
use model::{GameAnalyzer, GameStateAnalysis};

pub const TARGET: u32 = 10;
pub const ADD_ONE: usize = 0;
pub const ADD_TWO: usize = 1;
pub const PASS: usize = 2;

/// Players take turns adding one or two to a shared count. Whoever reaches `TARGET` wins.
///
/// Both players see the same board, so every state is already canonical. Positions where
/// `(TARGET - count) % 3 == 0` are lost for the player to move.
#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug)]
pub struct CountingGameState {
    pub count: u32,
}

impl CountingGameState {
    pub fn new(count: u32) -> Self {
        Self { count }
    }
}

pub struct CountingGameEngine {}

impl CountingGameEngine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for CountingGameEngine {
    type State = CountingGameState;
    type Key = u32;

    fn action_count(&self) -> usize {
        3
    }

    fn initial_state(&self) -> Self::State {
        CountingGameState::new(0)
    }

    fn canonicalize(&self, game_state: &Self::State, _: Player) -> Self::State {
        *game_state
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: usize,
        player: Player,
    ) -> (Self::State, Player) {
        let count = match action {
            ADD_ONE => game_state.count + 1,
            ADD_TWO => game_state.count + 2,
            _ => game_state.count,
        };

        (CountingGameState::new(count), player.opponent())
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<bool> {
        let over = game_state.count >= TARGET;
        vec![!over, !over, over]
    }

    fn outcome(&self, game_state: &Self::State, _: Player) -> Outcome {
        if game_state.count >= TARGET {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }

    fn state_key(&self, game_state: &Self::State) -> Self::Key {
        game_state.count
    }
}

/// Maps every state to a single key.
pub struct CollidingGameEngine(pub CountingGameEngine);

impl GameEngine for CollidingGameEngine {
    type State = CountingGameState;
    type Key = u32;

    fn action_count(&self) -> usize {
        self.0.action_count()
    }

    fn initial_state(&self) -> Self::State {
        self.0.initial_state()
    }

    fn canonicalize(&self, game_state: &Self::State, player: Player) -> Self::State {
        self.0.canonicalize(game_state, player)
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: usize,
        player: Player,
    ) -> (Self::State, Player) {
        self.0.take_action(game_state, action, player)
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<bool> {
        self.0.legal_actions(game_state)
    }

    fn outcome(&self, game_state: &Self::State, player: Player) -> Outcome {
        self.0.outcome(game_state, player)
    }

    fn state_key(&self, _: &Self::State) -> Self::Key {
        0
    }
}

/// Claims the game is never over but offers no moves.
pub struct StuckGameEngine(pub CountingGameEngine);

impl GameEngine for StuckGameEngine {
    type State = CountingGameState;
    type Key = u32;

    fn action_count(&self) -> usize {
        self.0.action_count()
    }

    fn initial_state(&self) -> Self::State {
        self.0.initial_state()
    }

    fn canonicalize(&self, game_state: &Self::State, player: Player) -> Self::State {
        self.0.canonicalize(game_state, player)
    }

    fn take_action(
        &self,
        game_state: &Self::State,
        action: usize,
        player: Player,
    ) -> (Self::State, Player) {
        self.0.take_action(game_state, action, player)
    }

    fn legal_actions(&self, _: &Self::State) -> Vec<bool> {
        vec![false; 3]
    }

    fn outcome(&self, _: &Self::State, _: Player) -> Outcome {
        Outcome::Ongoing
    }

    fn state_key(&self, game_state: &Self::State) -> Self::Key {
        self.0.state_key(game_state)
    }
}

pub struct CountingAnalyzer {
    policy_scores: Vec<f32>,
    value_score: f32,
}

impl CountingAnalyzer {
    pub fn new(policy_scores: Vec<f32>, value_score: f32) -> Self {
        Self {
            policy_scores,
            value_score,
        }
    }

    pub fn uniform() -> Self {
        Self::new(vec![1.0 / 3.0; 3], 0.0)
    }
}

impl GameAnalyzer for CountingAnalyzer {
    type State = CountingGameState;

    fn get_state_analysis(&self, _: &Self::State) -> GameStateAnalysis {
        GameStateAnalysis::new(self.value_score, self.policy_scores.clone())
    }
}
