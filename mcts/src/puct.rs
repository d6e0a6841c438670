use anyhow::{anyhow, Result};

use crate::node::MCTSNode;
use crate::node_details::PUCT;

/// Keeps the exploration term of an unvisited edge non-degenerate while `N[s]` is zero.
pub const EPS: f32 = 1e-8;

/// Scores every legal action of `node`, in ascending action order.
#[allow(non_snake_case)]
pub fn get_PUCT_for_actions(node: &MCTSNode, cpuct: f32) -> Vec<(usize, PUCT)> {
    let Nsb = node.visits() as f32;
    let root_Nsb = Nsb.sqrt();
    let root_Nsb_eps = (Nsb + EPS).sqrt();

    node.iter_valid_actions()
        .map(|action| {
            let (Nsa, Qsa) = node
                .edge(action)
                .map_or((0, 0.0), |e| (e.visits(), e.value()));
            let Psa = node.priors().get(action).copied().unwrap_or(0.0);

            let Usa = if Nsa > 0 {
                cpuct * Psa * root_Nsb / (1 + Nsa) as f32
            } else {
                cpuct * Psa * root_Nsb_eps
            };

            let PUCT = if Nsa > 0 { Qsa + Usa } else { Usa };

            (
                action,
                PUCT {
                    Nsa,
                    Qsa,
                    Psa,
                    Usa,
                    cpuct,
                    PUCT,
                },
            )
        })
        .collect()
}

/// Picks the legal action with the strictly greatest score. Ties go to the lowest action index.
pub fn select_path(node: &MCTSNode, cpuct: f32) -> Result<usize> {
    let mut best_action = None;
    let mut best_puct = f32::NEG_INFINITY;

    for (action, puct) in get_PUCT_for_actions(node, cpuct) {
        if puct.PUCT > best_puct {
            best_puct = puct.PUCT;
            best_action = Some(action);
        }
    }

    best_action.ok_or_else(|| anyhow!("Node has no selectable actions. This state should have been designated as terminal."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_unvisited_ties_pick_first_action() {
        let node = MCTSNode::new(vec![0.25; 4], vec![true; 4]);

        assert_eq!(select_path(&node, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_ties_pick_first_valid_action() {
        let node = MCTSNode::new(vec![0.0, 0.5, 0.5], vec![false, true, true]);

        assert_eq!(select_path(&node, 1.0).unwrap(), 1);
    }

    #[test]
    fn test_highest_prior_wins_at_fresh_node() {
        let node = MCTSNode::new(vec![0.2, 0.5, 0.3], vec![true; 3]);

        assert_eq!(select_path(&node, 1.0).unwrap(), 1);
    }

    #[test]
    fn test_unvisited_score_uses_eps() {
        let node = MCTSNode::new(vec![0.5, 0.5], vec![true, true]);
        let scores = get_PUCT_for_actions(&node, 2.0);

        assert_approx_eq!(scores[0].1.PUCT, 2.0 * 0.5 * EPS.sqrt(), 1e-9);
        assert_eq!(scores[0].1.Nsa, 0);
    }

    #[test]
    fn test_visited_score_includes_q() {
        let mut node = MCTSNode::new(vec![0.5, 0.5], vec![true, true]);
        node.record(0, 0.5);
        node.record(0, 0.5);
        node.record(1, -1.0);

        let scores = get_PUCT_for_actions(&node, 1.0);
        let (_, puct) = scores[0];

        let expected_usa = 0.5 * (3.0f32).sqrt() / 3.0;
        assert_eq!(puct.Nsa, 2);
        assert_approx_eq!(puct.Qsa, 0.5);
        assert_approx_eq!(puct.Usa, expected_usa);
        assert_approx_eq!(puct.PUCT, 0.5 + expected_usa);
        assert_eq!(select_path(&node, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_invalid_actions_are_never_scored() {
        let node = MCTSNode::new(vec![0.0, 1.0], vec![false, true]);
        let scores = get_PUCT_for_actions(&node, 1.0);

        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].0, 1);
    }

    #[test]
    fn test_no_valid_actions_is_an_error() {
        let node = MCTSNode::new(vec![0.5, 0.5], vec![false, false]);

        assert!(select_path(&node, 1.0).is_err());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let mut node = MCTSNode::new(vec![0.3, 0.3, 0.4], vec![true; 3]);
        node.record(2, 0.1);
        node.record(0, 0.1);

        let first = select_path(&node, 1.5).unwrap();
        for _ in 0..10 {
            assert_eq!(select_path(&node, 1.5).unwrap(), first);
        }
    }
}
