use anyhow::{Context, Result};
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use engine::{GameEngine, Player};
use mcts::{TemperatureMaxMoves, Temperature, MCTS};
use model::{GameAnalyzer, PositionMetrics};

use super::{SelfPlayMetrics, SelfPlayOptions};

/// Plays one game against itself from the initial state with player one to move.
///
/// Every position is recorded under each symmetry of the board. Once the game ends each example
/// is scored with the result from the perspective of the player who was to move in it.
pub fn play_self_one<E, M, R>(
    game_engine: &E,
    analyzer: &M,
    options: &SelfPlayOptions,
    rng: &mut R,
) -> Result<SelfPlayMetrics<E::State>>
where
    E: GameEngine,
    M: GameAnalyzer<State = E::State>,
    R: Rng,
{
    let search_rng = StdRng::from_rng(&mut *rng).context("Failed to seed the search rng")?;
    let mut mcts = MCTS::with_rng(
        game_engine,
        analyzer,
        options.mcts_options.clone(),
        search_rng,
    );

    let temp = TemperatureMaxMoves::new(1.0, 0.0, options.temp_threshold);

    let mut game_state = game_engine.initial_state();
    let mut player = Player::One;
    let mut episode_step = 0;
    let mut positions: Vec<(E::State, Player, Vec<f32>)> = vec![];

    let outcome = loop {
        episode_step += 1;

        let canonical_state = game_engine.canonicalize(&game_state, player);
        let temperature = temp.temp(episode_step);
        let policy = mcts.get_action_prob(&canonical_state, temperature)?;

        for (state, symmetric_policy) in game_engine.symmetries(&canonical_state, &policy) {
            positions.push((state, player, symmetric_policy));
        }

        let action = WeightedIndex::new(&policy)
            .with_context(|| format!("Invalid search policy {:?}", policy))?
            .sample(&mut *rng);

        debug!(
            "Step: {}, Player: {:?}, Temp: {}, Action: {}",
            episode_step, player, temperature, action
        );

        let (next_state, next_player) = game_engine.take_action(&game_state, action, player);
        game_state = next_state;
        player = next_player;

        let outcome = game_engine.outcome(&game_state, player);
        if outcome.is_terminal() {
            break outcome;
        }
    };

    let examples = positions
        .into_iter()
        .map(|(state, position_player, policy)| {
            let position_outcome = if position_player == player {
                outcome
            } else {
                outcome.reversed()
            };

            PositionMetrics::new(state, policy, position_outcome.value())
        })
        .collect();

    Ok(SelfPlayMetrics::new(
        examples,
        game_state,
        player,
        outcome,
        episode_step,
    ))
}
