//! Random source seam for the crash simulation.
//!
//! The crash routine never reaches for a global generator. Callers pass a
//! [`RandomSource`] into [`Canoe::crash`](crate::Canoe::crash), which makes
//! every crash reproducible from a seed or a scripted list of draws.
//!
//! - [`RngSource`] adapts any [`rand::Rng`], seeded or from OS entropy.
//! - [`ScriptedSource`] replays a fixed sequence of unit draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws.
pub trait RandomSource {
    /// Draw a uniform real number in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draw a uniform real number in `(0, ceiling]`.
    ///
    /// Computed as `(1 - u) * ceiling` so the upper bound is reachable and
    /// zero is not.
    fn draw_up_to(&mut self, ceiling: f64) -> f64 {
        (1.0 - self.next_unit()) * ceiling
    }
}

/// Adapter from a [`rand::Rng`] to a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the inner generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// A deterministic source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating system entropy.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of unit draws, in order.
///
/// Values are clamped into `[0, 1)`. Once the script runs out every draw
/// returns `0.0`, which [`RandomSource::draw_up_to`] maps to the ceiling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    consumed: usize,
}

/// Largest `f64` strictly below one.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

impl ScriptedSource {
    /// Create a source that will return `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Number of draws taken so far, including any past the end of the script.
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        self.consumed = self.consumed.saturating_add(1);
        self.draws
            .pop_front()
            .map_or(0.0, |u| if u.is_nan() { 0.0 } else { u.clamp(0.0, BELOW_ONE) })
    }
}
