//! Simulated annealing for the Euclidean Travelling Salesman Problem.
//!
//! Finds a short closed tour through a set of planar cities by
//! repeatedly swapping pairs of cities and accepting worse orders with a
//! probability that shrinks as the temperature cools.
//!
//! - [`geometry`]: planar [`Point`]s.
//! - [`tour`]: closed [`Tour`]s whose first and last points coincide.
//! - [`distance`]: tour length evaluation.
//! - [`anneal`]: cooling schedule, configuration, and the [`Annealer`] loop.
//! - [`map`]: random city maps for experiments.
//!
//! # Example
//!
//! ```
//! use tsp_anneal::{AnnealConfig, Annealer, map};
//!
//! let tour = map::random_tour(10, Some(3141))?;
//! let config = AnnealConfig::default().with_tau(1000.0).with_seed(5926);
//! let result = Annealer::new(tour, config)?.run();
//! assert!(result.best_tour.is_closed());
//! # Ok::<(), tsp_anneal::AnnealError>(())
//! ```

pub mod anneal;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod map;
pub mod tour;

pub use anneal::{AnnealConfig, AnnealResult, Annealer, CoolingParameters};
pub use error::{AnnealError, Result};
pub use geometry::Point;
pub use tour::Tour;
