//! Annealing loop.

use super::config::AnnealConfig;
use super::schedule::CoolingSchedule;
use crate::error::{AnnealError, Result};
use crate::tour::{Tour, MIN_CITIES};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Shortest tour observed. Falls back to the initial tour when
    /// nothing beat it.
    pub best_tour: Tour,

    /// Length of `best_tour`.
    pub best_distance: f64,

    /// Length of the tour the run started from.
    pub initial_distance: f64,

    /// Working tour when the loop stopped.
    pub final_tour: Tour,

    /// Length of `final_tour`.
    pub final_distance: f64,

    /// Temperature of the last iteration (at or below the floor).
    pub final_temperature: f64,

    /// Total number of iterations.
    pub iterations: u64,

    /// Number of accepted swaps, uphill and downhill.
    pub accepted_moves: u64,

    /// Number of swaps that produced a new best distance.
    pub improving_moves: u64,

    /// Whether `best_tour` differs from the initial tour.
    pub improved: bool,

    /// Seed the run used; feed it back through the config to reproduce.
    pub seed: u64,

    /// Best distance sampled every `history_interval` iterations.
    pub distance_history: Vec<f64>,
}

/// View of one finished iteration, handed to an observer.
#[derive(Debug, Clone, Copy)]
pub struct IterationSnapshot<'a> {
    /// Iteration number, starting at 1.
    pub iteration: u64,
    /// Temperature this iteration ran at.
    pub temperature: f64,
    /// Interior positions proposed for the swap.
    pub swap: (usize, usize),
    /// Whether the swap was kept.
    pub accepted: bool,
    /// Length of the working tour after the decision.
    pub current_distance: f64,
    /// Shortest length seen so far.
    pub best_distance: f64,
    /// Live working tour after the accept/reject decision.
    pub tour: &'a Tour,
}

/// Mutable bookkeeping for a run in progress.
struct AnnealerState {
    current_distance: f64,
    best_distance: f64,
    best_tour: Tour,
    iteration: u64,
    temperature: f64,
    accepted_moves: u64,
    improving_moves: u64,
}

impl AnnealerState {
    fn new(tour: &Tour, distance: f64, temperature: f64) -> Self {
        Self {
            current_distance: distance,
            best_distance: distance,
            best_tour: tour.clone(),
            iteration: 0,
            temperature,
            accepted_moves: 0,
            improving_moves: 0,
        }
    }
}

/// Pairwise-swap simulated annealing over a closed tour.
///
/// Owns the working tour and its random generator for the whole run;
/// the tour passed to [`Annealer::new`] is moved in, so the caller holds
/// no alias to the state being mutated.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, Annealer};
/// use tsp_anneal::map::random_tour;
///
/// let tour = random_tour(10, Some(3141)).unwrap();
/// let config = AnnealConfig::default()
///     .with_tau(500.0)
///     .with_seed(5926);
/// let result = Annealer::new(tour, config).unwrap().run();
/// assert!(result.best_distance <= result.initial_distance);
/// ```
pub struct Annealer {
    tour: Tour,
    config: AnnealConfig,
    schedule: CoolingSchedule,
    rng: StdRng,
    seed: u64,
}

impl Annealer {
    /// Prepares a run over `tour`.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidParameters`] for a bad configuration,
    /// [`AnnealError::OpenTour`] when the first and last points differ,
    /// [`AnnealError::DegenerateTour`] for fewer than three cities.
    pub fn new(tour: Tour, config: AnnealConfig) -> Result<Self> {
        config.validate()?;
        if !tour.is_closed() {
            return Err(AnnealError::OpenTour);
        }
        let cities = tour.city_count();
        if cities < MIN_CITIES {
            return Err(AnnealError::DegenerateTour { cities });
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            tour,
            schedule: CoolingSchedule::new(config.cooling),
            config,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    /// Seed driving this run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Tour the run will start from.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn schedule(&self) -> &CoolingSchedule {
        &self.schedule
    }

    /// Runs until the temperature reaches the floor.
    pub fn run(self) -> AnnealResult {
        self.run_with_observer(|_| {})
    }

    /// Runs, calling `observer` after every iteration's accept/reject step.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> AnnealResult
    where
        F: FnMut(&IterationSnapshot<'_>),
    {
        let cities = self.tour.city_count();
        let initial_distance = self.tour.total_distance();
        let mut state = AnnealerState::new(
            &self.tour,
            initial_distance,
            self.schedule.params().max_temperature,
        );

        info!(
            "annealing {} cities: initial distance {:.4}, seed {}, expected iterations {}",
            cities,
            initial_distance,
            self.seed,
            self.schedule.expected_iterations()
        );

        let mut distance_history = vec![initial_distance];

        // The floor is tested against the previous iteration's temperature,
        // so the last iteration runs at the first temperature <= T_min.
        while !self.schedule.is_frozen(state.temperature) {
            state.iteration += 1;
            state.temperature = self.schedule.temperature_at(state.iteration);

            let (i, j) = draw_interior_pair(&mut self.rng, cities);
            let previous_distance = state.current_distance;
            let mv = self.tour.apply_swap(i, j);
            let new_distance = self.tour.total_distance();
            let delta = new_distance - previous_distance;

            // Recorded before the acceptance test: a rejected swap can
            // still hold the best tour seen.
            if new_distance < state.best_distance {
                state.best_tour.clone_from(&self.tour);
                state.best_distance = new_distance;
                state.improving_moves += 1;
            }

            let u: f64 = self.rng.random();
            let accepted = metropolis_accepts(delta, state.temperature, u);
            if accepted {
                state.current_distance = new_distance;
                state.accepted_moves += 1;
            } else {
                mv.undo(&mut self.tour);
                state.current_distance = previous_distance;
            }

            observer(&IterationSnapshot {
                iteration: state.iteration,
                temperature: state.temperature,
                swap: (i, j),
                accepted,
                current_distance: state.current_distance,
                best_distance: state.best_distance,
                tour: &self.tour,
            });

            if state.iteration.is_multiple_of(self.config.history_interval) {
                distance_history.push(state.best_distance);
            }
            if state.iteration.is_multiple_of(self.config.progress_interval) {
                debug!(
                    "iteration {} distance {:.4} T {:.4} (T_min {})",
                    state.iteration,
                    state.current_distance,
                    state.temperature,
                    self.schedule.params().min_temperature
                );
            }
        }

        if distance_history
            .last()
            .is_none_or(|&last| last != state.best_distance)
        {
            distance_history.push(state.best_distance);
        }

        let final_distance = self.tour.total_distance();
        info!(
            "annealing finished after {} iterations: best {:.4}, final {:.4}, T {:.6}",
            state.iteration, state.best_distance, final_distance, state.temperature
        );

        AnnealResult {
            improved: state.improving_moves > 0,
            best_tour: state.best_tour,
            best_distance: state.best_distance,
            initial_distance,
            final_tour: self.tour,
            final_distance,
            final_temperature: state.temperature,
            iterations: state.iteration,
            accepted_moves: state.accepted_moves,
            improving_moves: state.improving_moves,
            seed: self.seed,
            distance_history,
        }
    }
}

/// Draws two distinct interior positions from `1..=cities-1`, redrawing
/// both until they differ.
fn draw_interior_pair<R: Rng>(rng: &mut R, cities: usize) -> (usize, usize) {
    loop {
        let i = rng.random_range(1..cities);
        let j = rng.random_range(1..cities);
        if i != j {
            return (i, j);
        }
    }
}

/// Metropolis probability `exp(-delta / T)`, saturated to 1.
///
/// Downhill moves, and uphill moves whose exponential overflows or is
/// undefined, map to 1.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    let p = (-delta / temperature).exp();
    if p.is_nan() {
        1.0
    } else {
        p.min(1.0)
    }
}

/// A move is rejected when `u > exp(-delta / T)` for `u` in `[0, 1)`.
pub fn metropolis_accepts(delta: f64, temperature: f64, u: f64) -> bool {
    u <= acceptance_probability(delta, temperature)
}
