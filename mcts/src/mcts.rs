use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

use common::create_rng;
use engine::{GameEngine, Outcome, Player};
use model::GameAnalyzer;

use super::node::{mask_priors, MCTSNode};
use super::node_details::{NodeDetails, PUCT};
use super::options::MCTSOptions;
use super::puct::{get_PUCT_for_actions, select_path};
use super::store::SearchStore;
use super::temp::visits_to_probabilities;

/// Monte Carlo tree search guided by a policy/value analyzer.
///
/// Every state handed to the search must already be canonical. Statistics are shared between
/// all states of the game, so one instance is meant to serve a single episode and then be dropped.
pub struct MCTS<'a, E, M, R = StdRng>
where
    E: GameEngine,
    M: GameAnalyzer<State = E::State>,
{
    options: MCTSOptions,
    game_engine: &'a E,
    analyzer: &'a M,
    store: SearchStore<E::Key, E::State>,
    rng: R,
}

impl<'a, E, M> MCTS<'a, E, M, StdRng>
where
    E: GameEngine,
    M: GameAnalyzer<State = E::State>,
{
    pub fn new(game_engine: &'a E, analyzer: &'a M, options: MCTSOptions) -> Self {
        Self::with_rng(game_engine, analyzer, options, create_rng())
    }
}

impl<'a, E, M, R> MCTS<'a, E, M, R>
where
    E: GameEngine,
    M: GameAnalyzer<State = E::State>,
    R: Rng,
{
    pub fn with_rng(game_engine: &'a E, analyzer: &'a M, options: MCTSOptions, rng: R) -> Self {
        MCTS {
            options,
            game_engine,
            analyzer,
            store: SearchStore::new(),
            rng,
        }
    }

    pub fn options(&self) -> &MCTSOptions {
        &self.options
    }

    pub fn store(&self) -> &SearchStore<E::Key, E::State> {
        &self.store
    }

    /// Runs the simulation budget from `game_state` and turns the root visit counts into a
    /// distribution over every action.
    pub fn get_action_prob(&mut self, game_state: &E::State, temperature: f32) -> Result<Vec<f32>> {
        let key = self.game_engine.state_key(game_state);
        self.store.register_state(&key, game_state)?;

        let outcome = self.get_outcome(&key, game_state);

        if !outcome.is_terminal() && !self.store.is_expanded(&key) {
            self.expand_leaf(key.clone(), game_state)?;
        }

        for _ in 0..self.options.visits {
            self.search(game_state)?;
        }

        let counts = self
            .store
            .edge_visit_counts(&key, self.game_engine.action_count());

        debug!(
            "Completed {} simulations. Root visits: {:?}, Counts: {:?}",
            self.options.visits,
            self.store.state_visits(&key),
            counts
        );

        let valid_actions = match self.store.valid_actions(&key) {
            Some(valid_actions) => valid_actions.to_vec(),
            None => self.game_engine.legal_actions(game_state),
        };

        visits_to_probabilities(&counts, &valid_actions, temperature, &mut self.rng)
    }

    /// Runs one simulation from `game_state` and returns the backed up value from the perspective
    /// of the player who moved into `game_state`.
    ///
    /// Descends by PUCT until it reaches a terminal or unexpanded state, then unwinds the path in
    /// reverse, flipping the sign of the value at every level.
    pub fn search(&mut self, game_state: &E::State) -> Result<f32> {
        let game_engine = self.game_engine;
        let cpuct = self.options.cpuct;
        let mut path: Vec<(E::Key, usize)> = vec![];
        let mut game_state = game_state.clone();

        let mut value = loop {
            let key = game_engine.state_key(&game_state);
            self.store.register_state(&key, &game_state)?;

            let outcome = self.get_outcome(&key, &game_state);
            if outcome.is_terminal() {
                trace!("Reached terminal state {:?} at depth {}", outcome, path.len());
                break -outcome.value();
            }

            let node = match self.store.node(&key) {
                Some(node) => node,
                None => {
                    let value_score = self.expand_leaf(key, &game_state)?;
                    trace!("Expanded leaf at depth {} with value {}", path.len(), value_score);
                    break -value_score;
                }
            };

            let action = select_path(node, cpuct)
                .with_context(|| format!("Failed to select an action for {:?}", game_state))?;

            let (next_state, next_player) =
                game_engine.take_action(&game_state, action, Player::One);

            game_state = game_engine.canonicalize(&next_state, next_player);
            path.push((key, action));
        };

        for (key, action) in path.iter().rev() {
            self.store.record(key, *action, value)?;
            value = -value;
        }

        Ok(value)
    }

    pub fn get_node_details(&self, game_state: &E::State) -> Result<NodeDetails> {
        let key = self.game_engine.state_key(game_state);
        let node = self
            .store
            .node(&key)
            .ok_or_else(|| anyhow!("State has not been expanded: {:?}", game_state))?;

        Ok(Self::node_details(node, self.options.cpuct))
    }

    /// Follows the most visited action from `game_state` for as long as the tree extends.
    pub fn get_principal_variation(&self, game_state: &E::State) -> Result<Vec<(usize, PUCT)>> {
        let mut game_state = game_state.clone();
        let mut nodes = vec![];

        for _ in 0..self.store.node_count() {
            let key = self.game_engine.state_key(&game_state);
            let Some(node) = self.store.node(&key) else {
                break;
            };

            let mut children = Self::node_details(node, self.options.cpuct).children;
            if children.is_empty() || children[0].1.Nsa == 0 {
                break;
            }

            let (action, puct) = children.swap_remove(0);
            nodes.push((action, puct));

            let (next_state, next_player) =
                self.game_engine
                    .take_action(&game_state, action, Player::One);
            game_state = self.game_engine.canonicalize(&next_state, next_player);
        }

        Ok(nodes)
    }

    fn node_details(node: &MCTSNode, cpuct: f32) -> NodeDetails {
        let mut children = get_PUCT_for_actions(node, cpuct);

        children.sort_by(|(_, x_puct), (_, y_puct)| y_puct.cmp(x_puct));

        NodeDetails {
            visits: node.visits(),
            children,
        }
    }

    fn get_outcome(&mut self, key: &E::Key, game_state: &E::State) -> Outcome {
        let game_engine = self.game_engine;

        self.store
            .outcome_or_insert_with(key, || game_engine.outcome(game_state, Player::One))
    }

    /// Queries the analyzer once and records priors and legality for a new state.
    ///
    /// Returns the analyzer's value from the perspective of the player to move in `game_state`.
    fn expand_leaf(&mut self, key: E::Key, game_state: &E::State) -> Result<f32> {
        let action_count = self.game_engine.action_count();
        let analysis = self.analyzer.get_state_analysis(game_state);

        if analysis.policy_scores.len() != action_count {
            return Err(anyhow!(
                "Analyzer returned {} policy scores but the game has {} actions",
                analysis.policy_scores.len(),
                action_count
            ));
        }

        let valid_actions = self.game_engine.legal_actions(game_state);

        if valid_actions.len() != action_count {
            return Err(anyhow!(
                "Game returned {} legal action flags but has {} actions",
                valid_actions.len(),
                action_count
            ));
        }

        if !valid_actions.iter().any(|valid| *valid) {
            return Err(anyhow!(
                "Non terminal state has no legal actions: {:?}",
                game_state
            ));
        }

        let priors = mask_priors(&analysis.policy_scores, &valid_actions);

        self.store
            .insert_node(key, MCTSNode::new(priors, valid_actions));

        Ok(analysis.value_score)
    }
}
