//! Tour length evaluation.

use crate::geometry::Point;
use crate::tour::Tour;

/// Computes closed tour lengths.
///
/// Every call recomputes from scratch in O(N) with no cached state, so
/// repeated calls on an unchanged tour give identical results.
pub struct DistanceEvaluator;

impl DistanceEvaluator {
    /// Sum of Euclidean edge lengths over the `N` consecutive pairs,
    /// including the closing edge from position `N-1` to the anchor at `N`.
    pub fn total_distance(tour: &Tour) -> f64 {
        Self::path_length(tour.points())
    }

    /// Length of the open polyline through `points`.
    pub fn path_length(points: &[Point]) -> f64 {
        points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }
}
