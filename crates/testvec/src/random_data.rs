//! Generate random vectors for use in test benches.
//!
//! Every function takes the random number generator as an argument so that
//! callers control seeding and the generator algorithm.

use rand::distributions::uniform::SampleUniform;
use rand::prelude::*;

/// Generate a vector of integers sampled uniformly from `[min_val, max_val]`.
///
/// # Arguments:
///
/// * `len`: number of values to generate.
/// * `min_val`: smallest value that may be drawn.
/// * `max_val`: largest value that may be drawn.
/// * `rng`: random number generator.
///
/// # Errors
///
/// * If `min_val` is greater than `max_val`.
pub fn random_integers<T, R>(len: usize, min_val: T, max_val: T, rng: &mut R) -> Result<Vec<T>, String>
where
    T: SampleUniform + PartialOrd + Copy + core::fmt::Display,
    R: Rng,
{
    if min_val > max_val {
        return Err(format!("Empty range: min_val {min_val} > max_val {max_val}"));
    }
    Ok((0..len).map(|_| rng.gen_range(min_val..=max_val)).collect())
}

/// Generate a vector of `i8`s sampled uniformly over all of `[-128, 127]`.
#[must_use]
pub fn random_full_range_i8<R: Rng>(len: usize, rng: &mut R) -> Vec<i8> {
    (0..len).map(|_| rng.gen_range(i8::MIN..=i8::MAX)).collect()
}

/// Generate a vector of `f64`s sampled uniformly from `[0, 1)`.
///
/// # Arguments:
///
/// * `len`: number of values to generate.
/// * `rng`: random number generator.
#[must_use]
pub fn random_unit_floats<R: Rng>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}
