use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use anyhow::{anyhow, Result};
use engine::Outcome;

use crate::edge::MCTSEdge;
use crate::node::MCTSNode;

/// Every statistics table of a single search, keyed by canonical state identity.
///
/// Terminal states only ever appear in the outcome cache. Lives exactly as long as its `MCTS`.
#[derive(Debug)]
pub struct SearchStore<K, S> {
    states: HashMap<K, S>,
    outcomes: HashMap<K, Outcome>,
    nodes: HashMap<K, MCTSNode>,
}

impl<K, S> SearchStore<K, S>
where
    K: Clone + Eq + Hash + Debug,
    S: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            outcomes: HashMap::new(),
            nodes: HashMap::new(),
        }
    }

    /// Remembers which state produced `key`, failing if a different state already claimed it.
    pub fn register_state(&mut self, key: &K, game_state: &S) -> Result<()> {
        match self.states.get(key) {
            Some(existing) if existing != game_state => Err(anyhow!(
                "State key collision on {:?}: {:?} and {:?} map to the same key",
                key,
                existing,
                game_state
            )),
            Some(_) => Ok(()),
            None => {
                self.states.insert(key.clone(), game_state.clone());
                Ok(())
            }
        }
    }

    pub fn outcome(&self, key: &K) -> Option<Outcome> {
        self.outcomes.get(key).copied()
    }

    /// Cached outcome of `key`, computed with `f` the first time it is requested.
    pub fn outcome_or_insert_with<F>(&mut self, key: &K, f: F) -> Outcome
    where
        F: FnOnce() -> Outcome,
    {
        if let Some(outcome) = self.outcomes.get(key) {
            return *outcome;
        }

        let outcome = f();
        self.outcomes.insert(key.clone(), outcome);
        outcome
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: &K) -> Option<&MCTSNode> {
        self.nodes.get(key)
    }

    pub(crate) fn insert_node(&mut self, key: K, node: MCTSNode) {
        self.nodes.insert(key, node);
    }

    /// Backs `value` up through the edge `(key, action)`.
    pub(crate) fn record(&mut self, key: &K, action: usize, value: f32) -> Result<()> {
        let node = self
            .nodes
            .get_mut(key)
            .ok_or_else(|| anyhow!("Tried to back up through unexpanded state {:?}", key))?;

        if node.record(action, value) {
            Ok(())
        } else {
            Err(anyhow!("Action {} is out of range for state {:?}", action, key))
        }
    }

    pub fn priors(&self, key: &K) -> Option<&[f32]> {
        self.nodes.get(key).map(|n| n.priors())
    }

    pub fn valid_actions(&self, key: &K) -> Option<&[bool]> {
        self.nodes.get(key).map(|n| n.valid_actions())
    }

    pub fn state_visits(&self, key: &K) -> Option<usize> {
        self.nodes.get(key).map(|n| n.visits())
    }

    pub fn edge(&self, key: &K, action: usize) -> Option<&MCTSEdge> {
        self.nodes.get(key).and_then(|n| n.edge(action))
    }

    pub fn edge_visits(&self, key: &K, action: usize) -> usize {
        self.edge(key, action).map_or(0, |e| e.visits())
    }

    /// `Q[s,a]`, present only once the edge has been visited.
    pub fn edge_value(&self, key: &K, action: usize) -> Option<f32> {
        self.edge(key, action)
            .filter(|e| e.is_visited())
            .map(|e| e.value())
    }

    /// Visit counts of every action of `key`, zero for actions never visited.
    pub fn edge_visit_counts(&self, key: &K, action_count: usize) -> Vec<usize> {
        (0..action_count)
            .map(|action| self.edge_visits(key, action))
            .collect()
    }

    pub fn expanded_states(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = (&K, &MCTSNode)> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }
}

impl<K, S> Default for SearchStore<K, S>
where
    K: Clone + Eq + Hash + Debug,
    S: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_same_state_twice_is_ok() {
        let mut store = SearchStore::<u32, [i8; 2]>::new();

        assert!(store.register_state(&1, &[0, 1]).is_ok());
        assert!(store.register_state(&1, &[0, 1]).is_ok());
    }

    #[test]
    fn test_register_collision_errors() {
        let mut store = SearchStore::<u32, [i8; 2]>::new();

        store.register_state(&1, &[0, 1]).unwrap();
        let err = store.register_state(&1, &[1, 0]).unwrap_err();

        assert!(err.to_string().contains("collision"));
    }

    #[test]
    fn test_outcome_is_computed_once() {
        let mut store = SearchStore::<u32, u32>::new();
        let mut calls = 0;

        for _ in 0..3 {
            let outcome = store.outcome_or_insert_with(&7, || {
                calls += 1;
                Outcome::Draw
            });
            assert_eq!(outcome, Outcome::Draw);
        }

        assert_eq!(calls, 1);
        assert_eq!(store.outcome(&7), Some(Outcome::Draw));
    }

    #[test]
    fn test_record_requires_expanded_state() {
        let mut store = SearchStore::<u32, u32>::new();

        assert!(store.record(&3, 0, 1.0).is_err());

        store.insert_node(3, MCTSNode::new(vec![1.0], vec![true]));
        store.record(&3, 0, 1.0).unwrap();

        assert_eq!(store.state_visits(&3), Some(1));
        assert_eq!(store.edge_visits(&3, 0), 1);
        assert_eq!(store.edge_value(&3, 0), Some(1.0));
        assert!(store.record(&3, 1, 1.0).is_err());
    }

    #[test]
    fn test_unvisited_edge_has_no_value() {
        let mut store = SearchStore::<u32, u32>::new();
        store.insert_node(3, MCTSNode::new(vec![0.5, 0.5], vec![true, true]));

        assert_eq!(store.edge_value(&3, 1), None);
        assert_eq!(store.edge_visit_counts(&3, 2), vec![0, 0]);
        assert_eq!(store.edge_visit_counts(&4, 2), vec![0, 0]);
    }
}
