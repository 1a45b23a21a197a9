use crate::error::{EvaluationError, Result};
use crate::models::Rating;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle with a seeded RNG and cut at `floor(train_ratio * len)`.
///
/// The same `(ratings, train_ratio, seed)` always yields the same partitions.
pub fn train_test_split(
    mut ratings: Vec<Rating>,
    train_ratio: f64,
    seed: u64,
) -> Result<(Vec<Rating>, Vec<Rating>)> {
    if !(train_ratio > 0.0 && train_ratio <= 1.0) {
        return Err(EvaluationError::Validation(format!(
            "train ratio must be in (0, 1], got {}",
            train_ratio
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    ratings.shuffle(&mut rng);

    let train_size = (train_ratio * ratings.len() as f64) as usize;
    let test = ratings.split_off(train_size);

    Ok((ratings, test))
}
