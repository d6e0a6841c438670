use anyhow::{anyhow, Result};
use itertools::Itertools;
use log::warn;
use rand::Rng;

/// Temperature schedule over the moves of an episode.
pub trait Temperature {
    fn temp(&self, move_number: usize) -> f32;
}

#[derive(Default)]
pub struct NoTemp;

impl NoTemp {
    pub fn new() -> Self {
        Self
    }
}

impl Temperature for NoTemp {
    fn temp(&self, _: usize) -> f32 {
        0.0
    }
}

pub struct TemperatureConstant {
    pub temperature: f32,
}

impl TemperatureConstant {
    pub fn new(temperature: f32) -> Self {
        Self { temperature }
    }
}

impl Temperature for TemperatureConstant {
    fn temp(&self, _: usize) -> f32 {
        self.temperature
    }
}

/// Explores with `temperature` for the first moves, then switches to `temperature_post_max_moves`.
pub struct TemperatureMaxMoves {
    pub temperature: f32,
    pub temperature_post_max_moves: f32,
    pub temperature_max_moves: usize,
}

impl TemperatureMaxMoves {
    pub fn new(
        temperature: f32,
        temperature_post_max_moves: f32,
        temperature_max_moves: usize,
    ) -> Self {
        Self {
            temperature,
            temperature_post_max_moves,
            temperature_max_moves,
        }
    }
}

impl Temperature for TemperatureMaxMoves {
    fn temp(&self, move_number: usize) -> f32 {
        if move_number < self.temperature_max_moves {
            self.temperature
        } else {
            self.temperature_post_max_moves
        }
    }
}

/// Converts visit counts into a distribution over every action.
///
/// A temperature of zero yields a one-hot vector on a uniformly drawn most visited action.
/// Otherwise each count is raised to `1 / temperature` and normalized. With no visits at all the
/// result falls back to the legal actions.
pub fn visits_to_probabilities<R: Rng>(
    counts: &[usize],
    valid_actions: &[bool],
    temperature: f32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    if temperature.is_nan() || temperature < 0.0 {
        return Err(anyhow!("Temperature must be non-negative, got {}", temperature));
    }

    let max_visits = counts.iter().copied().max().unwrap_or(0);

    if temperature == 0.0 {
        let candidates: Vec<usize> = if max_visits > 0 {
            counts.iter().positions(|&c| c == max_visits).collect()
        } else {
            valid_actions.iter().positions(|&valid| valid).collect()
        };

        if candidates.is_empty() {
            return Err(anyhow!("No actions available to choose from"));
        }

        let chosen = candidates[rng.gen_range(0..candidates.len())];
        let mut probs = vec![0.0; counts.len()];
        probs[chosen] = 1.0;

        return Ok(probs);
    }

    if max_visits == 0 {
        warn!("No visits to derive a policy from. Falling back to a uniform policy over valid actions.");
        return uniform_over_valid(counts.len(), valid_actions);
    }

    let inv_temp = 1.0 / temperature as f64;
    let weights: Vec<f64> = counts
        .iter()
        .map(|&c| {
            if c == 0 {
                0.0
            } else {
                (c as f64 / max_visits as f64).powf(inv_temp)
            }
        })
        .collect();

    let sum: f64 = weights.iter().sum();

    if sum <= 0.0 || !sum.is_finite() {
        warn!("Temperature weighted visits {:?} did not sum to a positive value. Falling back to a uniform policy over valid actions.", counts);
        return uniform_over_valid(counts.len(), valid_actions);
    }

    Ok(weights.iter().map(|w| (w / sum) as f32).collect())
}

fn uniform_over_valid(len: usize, valid_actions: &[bool]) -> Result<Vec<f32>> {
    let num_valid = valid_actions.iter().take(len).filter(|v| **v).count();

    if num_valid == 0 {
        return Err(anyhow!("No actions available to choose from"));
    }

    let p = 1.0 / num_valid as f32;

    Ok((0..len)
        .map(|a| {
            if valid_actions.get(a).copied().unwrap_or(false) {
                p
            } else {
                0.0
            }
        })
        .collect())
}
