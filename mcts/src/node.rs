use log::warn;

use crate::edge::MCTSEdge;

/// Statistics of an expanded, non-terminal state: `P[s]`, `V[s]`, `N[s]` and its edges.
#[derive(Debug)]
pub struct MCTSNode {
    visits: usize,
    priors: Vec<f32>,
    valid_actions: Vec<bool>,
    edges: Vec<MCTSEdge>,
}

impl MCTSNode {
    pub fn new(priors: Vec<f32>, valid_actions: Vec<bool>) -> Self {
        let edges = vec![MCTSEdge::default(); valid_actions.len()];

        Self {
            visits: 0,
            priors,
            valid_actions,
            edges,
        }
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn priors(&self) -> &[f32] {
        &self.priors
    }

    pub fn valid_actions(&self) -> &[bool] {
        &self.valid_actions
    }

    pub fn edge(&self, action: usize) -> Option<&MCTSEdge> {
        self.edges.get(action)
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = &MCTSEdge> {
        self.edges.iter()
    }

    /// Actions in ascending index order.
    pub fn iter_valid_actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.valid_actions
            .iter()
            .enumerate()
            .filter(|(_, valid)| **valid)
            .map(|(action, _)| action)
    }

    pub fn edge_visits_sum(&self) -> usize {
        self.edges.iter().map(|e| e.visits()).sum()
    }

    /// Records a completed simulation through `action`. Edge and state visits always move together.
    pub(crate) fn record(&mut self, action: usize, value: f32) -> bool {
        match self.edges.get_mut(action) {
            Some(edge) => {
                edge.record(value);
                self.visits += 1;
                true
            }
            None => false,
        }
    }
}

/// Masks the oracle priors by legality and renormalizes them.
///
/// Falls back to a uniform distribution over legal actions when the masked priors carry no mass.
pub fn mask_priors(policy_scores: &[f32], valid_actions: &[bool]) -> Vec<f32> {
    let mut priors: Vec<f32> = policy_scores
        .iter()
        .zip(valid_actions)
        .map(|(p, valid)| if *valid { *p } else { 0.0 })
        .collect();

    let sum: f32 = priors.iter().sum();

    if sum > 0.0 && sum.is_finite() {
        for p in priors.iter_mut() {
            *p /= sum;
        }

        return priors;
    }

    warn!("All valid actions were masked, setting all valid actions to be equally probable. The analyzer may be undertrained or overfit.");

    let num_valid = valid_actions.iter().filter(|v| **v).count();
    let uniform = 1.0 / num_valid.max(1) as f32;

    valid_actions
        .iter()
        .map(|valid| if *valid { uniform } else { 0.0 })
        .collect()
}
