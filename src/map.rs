//! Random city maps in the unit square.

use crate::error::Result;
use crate::geometry::Point;
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws `n` cities uniformly in `[0, 1)²`.
pub fn random_cities<R: Rng>(n: usize, rng: &mut R) -> Vec<Point> {
    (0..n)
        .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

/// Builds a closed tour over `n` random cities, visited in draw order.
///
/// The same `seed` always yields the same map; `None` draws a fresh one.
///
/// # Errors
///
/// [`crate::AnnealError::DegenerateTour`] when `n < 3`.
pub fn random_tour(n: usize, seed: Option<u64>) -> Result<Tour> {
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_else(rand::random));
    Tour::from_cities(random_cities(n, &mut rng))
}
