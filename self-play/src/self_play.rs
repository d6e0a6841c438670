use std::collections::VecDeque;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use rand::Rng;

use engine::{GameEngine, Player};
use model::{GameAnalyzer, PositionMetrics};

use super::{play_self_one, SelfPlayOptions};

/// Plays `num_eps` episodes and collects their training examples.
///
/// The returned queue holds at most `max_len_of_queue` examples. When it overflows the examples
/// of the earliest episodes are dropped first.
pub fn play_self<E, M, R>(
    game_engine: &E,
    analyzer: &M,
    options: &SelfPlayOptions,
    rng: &mut R,
) -> Result<VecDeque<PositionMetrics<E::State>>>
where
    E: GameEngine,
    M: GameAnalyzer<State = E::State>,
    R: Rng,
{
    let starting_run_time = Instant::now();
    let mut examples = VecDeque::with_capacity(options.max_len_of_queue.min(1 << 16));
    let mut num_of_games_played: usize = 0;

    for episode in 0..options.num_eps {
        let self_play_metric = play_self_one(game_engine, analyzer, options, &mut *rng)
            .with_context(|| format!("Self play episode {} failed", episode))?;

        num_of_games_played += 1;

        info!(
            "Number of Actions: {}, Outcome for player one: {:?}, Examples: {}, Elapsed: {:.2}s, Number of Games Played: {}",
            self_play_metric.num_moves(),
            self_play_metric.outcome_for(Player::One),
            self_play_metric.examples().len(),
            starting_run_time.elapsed().as_secs_f32(),
            num_of_games_played
        );

        for example in self_play_metric.into_examples() {
            push_bounded(&mut examples, example, options.max_len_of_queue);
        }
    }

    Ok(examples)
}

fn push_bounded<T>(queue: &mut VecDeque<T>, item: T, max_len: usize) {
    if max_len == 0 {
        return;
    }

    if queue.len() == max_len {
        queue.pop_front();
    }

    queue.push_back(item);
}
