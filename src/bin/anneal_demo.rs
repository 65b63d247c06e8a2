//! Optimizes a ten-city random map and logs the outcome.
//!
//! Build with `--features demo`; run with `RUST_LOG=debug` to see progress
//! every thousand iterations.

use log::{error, info};
use tsp_anneal::{map, AnnealConfig, Annealer, CoolingParameters};

const CITIES: usize = 10;
const MAP_SEED: u64 = 3141;
const OPTIMIZATION_SEED: u64 = 5926;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> tsp_anneal::Result<()> {
    let tour = map::random_tour(CITIES, Some(MAP_SEED))?;
    let config = AnnealConfig::default()
        .with_cooling(CoolingParameters::new(1e4, 1e-3, 10.0))
        .with_seed(OPTIMIZATION_SEED);

    let result = Annealer::new(tour, config)?.run();

    info!(
        "N={} map seed {} optimization seed {}: {:.4} -> {:.4} in {} iterations",
        CITIES,
        MAP_SEED,
        result.seed,
        result.initial_distance,
        result.best_distance,
        result.iterations
    );
    for (k, p) in result.best_tour.points().iter().enumerate() {
        info!("  {k:>2}: ({:.4}, {:.4})", p.x, p.y);
    }
    Ok(())
}
