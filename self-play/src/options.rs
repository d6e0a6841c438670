use anyhow::Result;
use common::{Config, ConfigLoader};
use mcts::MCTSOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayOptions {
    pub mcts_options: MCTSOptions,
    /// Episodes played per call to `play_self`.
    pub num_eps: usize,
    /// Moves before this episode step are sampled with temperature 1, later moves greedily.
    pub temp_threshold: usize,
    /// Capacity of the training example queue. The oldest examples are dropped first.
    pub max_len_of_queue: usize,
}

impl Default for SelfPlayOptions {
    fn default() -> Self {
        Self {
            mcts_options: MCTSOptions::default(),
            num_eps: 10,
            temp_threshold: 15,
            max_len_of_queue: 200_000,
        }
    }
}

impl Config for SelfPlayOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let default = Self::default();

        Ok(Self {
            mcts_options: MCTSOptions::load(config)?,
            num_eps: config
                .get("num_eps")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.num_eps),
            temp_threshold: config
                .get("temp_threshold")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.temp_threshold),
            max_len_of_queue: config
                .get("max_len_of_queue")
                .and_then(|v| v.as_usize())
                .unwrap_or(default.max_len_of_queue),
        })
    }
}
