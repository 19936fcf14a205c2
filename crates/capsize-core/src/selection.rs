//! Weight-proportional passenger selection.
//!
//! A passenger who weighs twice as much is twice as likely to be chosen.
//! The walk is a linear scan over the passengers in boarding order, which
//! is all a canoe-sized list needs.

use crate::person::Person;
use crate::random::RandomSource;

/// Walk `weights` in order, subtracting each from `target`, and return the
/// index whose subtraction first brings the running target to zero or below.
///
/// If rounding leaves the target positive after the last weight, the last
/// index is returned. Returns `None` only for an empty slice.
pub fn select_weighted(weights: &[f64], target: f64) -> Option<usize> {
    let last = weights.len().checked_sub(1)?;
    let mut remaining = target;
    for (idx, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(idx);
        }
    }
    Some(last)
}

/// Pick a passenger index with probability proportional to weight.
///
/// The target is drawn uniformly from `(0, total]` where `total` is the
/// exact (untruncated) sum of passenger weights. Returns `None` when there
/// are no passengers, without consuming a draw.
pub fn pick_weighted(passengers: &[Person], rng: &mut impl RandomSource) -> Option<usize> {
    if passengers.is_empty() {
        return None;
    }
    let weights = normalized_weights(passengers);
    let total: f64 = weights.iter().sum();
    let target = rng.draw_up_to(total);
    select_weighted(&weights, target)
}

/// Passenger weights, rescaled by the heaviest one when their sum would
/// overflow to infinity. Ratios between weights are unchanged.
fn normalized_weights(passengers: &[Person]) -> Vec<f64> {
    let weights: Vec<f64> = passengers.iter().map(Person::weight).collect();
    let total: f64 = weights.iter().sum();
    if total.is_finite() {
        return weights;
    }
    let heaviest = weights.iter().copied().fold(0.0_f64, f64::max);
    weights.into_iter().map(|w| w / heaviest).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::random::{RngSource, ScriptedSource};

    fn crew(weights: &[f64]) -> Vec<Person> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Person::new(format!("p{i}"), *w).unwrap())
            .collect()
    }

    #[test]
    fn empty_selects_nothing() {
        assert_eq!(select_weighted(&[], 10.0), None);

        let mut rng = ScriptedSource::new([0.5]);
        assert_eq!(pick_weighted(&[], &mut rng), None);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn boundaries_land_on_the_right_passenger() {
        let weights = [250.0, 90.0, 170.0];
        assert_eq!(select_weighted(&weights, 1.0), Some(0));
        assert_eq!(select_weighted(&weights, 250.0), Some(0));
        assert_eq!(select_weighted(&weights, 250.5), Some(1));
        assert_eq!(select_weighted(&weights, 340.0), Some(1));
        assert_eq!(select_weighted(&weights, 341.0), Some(2));
        assert_eq!(select_weighted(&weights, 510.0), Some(2));
    }

    #[test]
    fn overshooting_target_falls_back_to_last() {
        let weights = [250.0, 90.0, 170.0];
        assert_eq!(select_weighted(&weights, 511.0), Some(2));
        assert_eq!(select_weighted(&weights, f64::MAX), Some(2));
        assert_eq!(select_weighted(&[42.0], 1_000.0), Some(0));
    }

    #[test]
    fn scripted_draws_map_to_weight_bands() {
        let passengers = crew(&[250.0, 90.0, 170.0]);
        // u = 0.9 -> target 51, inside the first band.
        // u = 0.4 -> target 306, inside the second band (250, 340].
        // u = 0.0 -> target 510, the last band.
        let mut rng = ScriptedSource::new([0.9, 0.4, 0.0]);
        assert_eq!(pick_weighted(&passengers, &mut rng), Some(0));
        assert_eq!(pick_weighted(&passengers, &mut rng), Some(1));
        assert_eq!(pick_weighted(&passengers, &mut rng), Some(2));
    }

    #[test]
    fn overflowing_total_keeps_proportions() {
        let huge = f64::MAX * 0.75;
        let passengers = crew(&[huge, huge]);
        assert!(passengers.iter().map(Person::weight).sum::<f64>().is_infinite());

        // u = 0.9 -> target 0.1 * 2 = 0.2, inside the first band after rescaling.
        // u = 0.1 -> target 0.9 * 2 = 1.8, inside the second band.
        let mut rng = ScriptedSource::new([0.9, 0.1]);
        assert_eq!(pick_weighted(&passengers, &mut rng), Some(0));
        assert_eq!(pick_weighted(&passengers, &mut rng), Some(1));
    }

    #[test]
    fn overflowing_total_is_still_fair() {
        let passengers = crew(&[f64::MAX * 0.5, f64::MAX]);
        let mut rng = RngSource::seeded(31);
        let trials = 60_000_usize;
        let mut light = 0_usize;
        for _ in 0..trials {
            if pick_weighted(&passengers, &mut rng) == Some(0) {
                light += 1;
            }
        }
        let observed = light as f64 / trials as f64;
        assert!((observed - 1.0 / 3.0).abs() < 0.01, "observed {observed:.4}");
    }

    #[test]
    fn single_passenger_always_chosen() {
        let passengers = crew(&[0.5]);
        let mut rng = RngSource::seeded(11);
        for _ in 0..100 {
            assert_eq!(pick_weighted(&passengers, &mut rng), Some(0));
        }
    }

    #[test]
    fn selection_frequency_tracks_weight_share() {
        let weights = [250.0, 90.0, 170.0];
        let passengers = crew(&weights);
        let mut rng = RngSource::new(SmallRng::seed_from_u64(2024));
        let trials = 200_000_usize;
        let mut counts = [0_usize; 3];
        for _ in 0..trials {
            let idx = pick_weighted(&passengers, &mut rng).unwrap();
            counts[idx] += 1;
        }
        for (count, weight) in counts.iter().zip(weights) {
            let observed = *count as f64 / trials as f64;
            let expected = weight / 510.0;
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {observed:.4}, expected {expected:.4}"
            );
        }
    }

    #[test]
    fn fractional_weights_stay_proportional() {
        let weights = [0.5, 1.5];
        let passengers = crew(&weights);
        let mut rng = RngSource::seeded(99);
        let trials = 100_000_usize;
        let mut light = 0_usize;
        for _ in 0..trials {
            if pick_weighted(&passengers, &mut rng) == Some(0) {
                light += 1;
            }
        }
        let observed = light as f64 / trials as f64;
        assert!((observed - 0.25).abs() < 0.01, "observed {observed:.4}");
    }
}
