use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSOptions {
    /// Number of simulations run per call to `get_action_prob`.
    pub visits: usize,
    /// Exploration constant of the PUCT formula.
    pub cpuct: f32,
}

impl MCTSOptions {
    pub fn new(visits: usize, cpuct: f32) -> Self {
        MCTSOptions { visits, cpuct }
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        Self::new(50, 1.0)
    }
}

impl Config for MCTSOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let default = Self::default();

        Ok(Self {
            visits: config
                .get("num_mcts_sims")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.visits),
            cpuct: config
                .get("cpuct")
                .and_then(|v| v.as_f32())
                .unwrap_or(default.cpuct),
        })
    }
}
