//! Simulated Annealing for the closed-tour TSP.
//!
//! Each iteration swaps two random interior cities, recomputes the tour
//! length, and keeps or undoes the swap under the Metropolis criterion
//! while the temperature decays as `T_max * exp(-t / tau)`. The shortest
//! tour seen is kept as an independent snapshot.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Newman (2012), "Computational Physics", ch. 10

mod config;
mod runner;
mod schedule;

pub use config::{AnnealConfig, CoolingParameters};
pub use runner::{
    acceptance_probability, metropolis_accepts, AnnealResult, Annealer, IterationSnapshot,
};
pub use schedule::{temperature_at, CoolingSchedule};
