//! Weighted candidate selection for the priority-sampling engine.
//!
//! Selection is split in two: [`selection_probabilities`] turns raw
//! weights into a distribution, and an [`IndexSampler`] draws an index
//! from it. The engine only sees the trait, so tests can pin outcomes with
//! a seeded RNG or a scripted sampler.
//!
//! # Weight
//!
//! `criticality × duration × difficulty ÷ fatigue_factor`, where the fatigue
//! factor is always strictly positive.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{BasicTask, CompositeTask};

/// Draws an index from a probability distribution.
pub trait IndexSampler {
    /// Returns an index into `probabilities`.
    ///
    /// `probabilities` is non-empty, non-negative, and sums to 1 (up to
    /// rounding).
    fn draw(&mut self, probabilities: &[f64]) -> usize;
}

impl<S: IndexSampler + ?Sized> IndexSampler for &mut S {
    fn draw(&mut self, probabilities: &[f64]) -> usize {
        (**self).draw(probabilities)
    }
}

/// Weighted sampling on top of any [`Rng`].
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the sampler and returns the RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSampler<StdRng> {
    /// A reproducible sampler.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSampler for RngSampler<R> {
    fn draw(&mut self, probabilities: &[f64]) -> usize {
        match WeightedIndex::<f64>::new(probabilities) {
            Ok(dist) => dist.sample(&mut self.rng),
            // All-zero, negative or NaN entries: uniform
            Err(_) => self.rng.random_range(0..probabilities.len().max(1)),
        }
    }
}

/// Unnormalized selection weight of a candidate.
#[inline]
pub fn candidate_weight(task: &CompositeTask, basic_task: &BasicTask, fatigue_factor: f64) -> f64 {
    task.criticality * basic_task.duration * basic_task.difficulty / fatigue_factor
}

/// Normalizes weights into a distribution.
///
/// All-zero weights fall back to uniform. An empty slice yields an empty
/// distribution.
pub fn selection_probabilities(weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        return vec![uniform; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}
