//! Closed tours.
//!
//! A [`Tour`] over `N` cities stores `N + 1` points with the first point
//! repeated at the end, so the salesman returns to the start. Positions
//! `0` and `N` are anchors for the same city and never move; only the
//! interior positions `1..=N-1` are reordered.

use crate::distance::DistanceEvaluator;
use crate::error::{AnnealError, Result};
use crate::geometry::Point;

/// Minimum number of distinct cities for the pairwise swap move.
pub const MIN_CITIES: usize = 3;

/// Visiting order of `N` cities, closed so that `points[0] == points[N]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    /// Builds a closed tour visiting `cities` in order and returning to
    /// the first one.
    ///
    /// # Errors
    ///
    /// [`AnnealError::DegenerateTour`] when fewer than [`MIN_CITIES`] are given.
    pub fn from_cities(mut cities: Vec<Point>) -> Result<Self> {
        let n = cities.len();
        if n < MIN_CITIES {
            return Err(AnnealError::DegenerateTour { cities: n });
        }
        cities.push(cities[0]);
        Ok(Self { points: cities })
    }

    /// Wraps an already closed sequence of `N + 1` points.
    ///
    /// # Errors
    ///
    /// [`AnnealError::OpenTour`] when the first and last points differ,
    /// [`AnnealError::DegenerateTour`] when `N` is below [`MIN_CITIES`].
    pub fn from_closed(points: Vec<Point>) -> Result<Self> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Err(AnnealError::DegenerateTour { cities: 0 });
        };
        if first != last {
            return Err(AnnealError::OpenTour);
        }
        let cities = points.len() - 1;
        if cities < MIN_CITIES {
            return Err(AnnealError::DegenerateTour { cities });
        }
        Ok(Self { points })
    }

    /// Number of distinct cities `N`.
    pub fn city_count(&self) -> usize {
        self.points.len() - 1
    }

    /// All `N + 1` points, anchor repeated at the end.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The reorderable positions `1..=N-1`.
    pub fn interior(&self) -> &[Point] {
        &self.points[1..self.city_count()]
    }

    /// Start (and end) city.
    pub fn anchor(&self) -> Point {
        self.points[0]
    }

    /// Whether `points[0] == points[N]` holds.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }

    /// Whether `index` is a swappable interior position.
    pub fn is_interior(&self, index: usize) -> bool {
        index >= 1 && index < self.city_count()
    }

    /// Total closed length of the tour.
    pub fn total_distance(&self) -> f64 {
        DistanceEvaluator::total_distance(self)
    }

    /// Swaps two distinct interior positions in place.
    ///
    /// Returns the applied move, which can later undo itself, or `None`
    /// if either index is an anchor, out of range, or both are equal.
    pub fn swap_interior(&mut self, i: usize, j: usize) -> Option<SwapMove> {
        if i == j || !self.is_interior(i) || !self.is_interior(j) {
            return None;
        }
        Some(self.apply_swap(i, j))
    }

    /// Caller guarantees `i` and `j` are interior.
    pub(crate) fn apply_swap(&mut self, i: usize, j: usize) -> SwapMove {
        debug_assert!(self.is_interior(i) && self.is_interior(j));
        let mv = SwapMove {
            i,
            j,
            at_i: self.points[i],
            at_j: self.points[j],
        };
        self.points.swap(i, j);
        mv
    }

    /// Consumes the tour, returning its closed point sequence.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for Tour {
    type Error = AnnealError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Tour::from_closed(points)
    }
}

impl From<Tour> for Vec<Point> {
    fn from(tour: Tour) -> Self {
        tour.points
    }
}

/// A swap of two interior positions, holding the two values it displaced.
///
/// Undo writes the snapshot back instead of swapping again, so no
/// full-tour copy is needed to reject a move. Only the tour that produced
/// a move may take it back, so undo is internal to the crate:
///
/// ```compile_fail
/// use tsp_anneal::map::random_tour;
///
/// let mut big = random_tour(10, Some(1)).unwrap();
/// let mut small = random_tour(9, Some(1)).unwrap();
/// let mv = big.swap_interior(1, 9).unwrap();
/// mv.undo(&mut small);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMove {
    i: usize,
    j: usize,
    at_i: Point,
    at_j: Point,
}

impl SwapMove {
    /// The two swapped positions, in draw order.
    pub fn positions(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    /// Restores both positions to their pre-swap values.
    ///
    /// `tour` must be the tour the move was applied to.
    pub(crate) fn undo(self, tour: &mut Tour) {
        debug_assert!(tour.is_interior(self.i) && tour.is_interior(self.j));
        tour.points[self.i] = self.at_i;
        tour.points[self.j] = self.at_j;
    }
}
