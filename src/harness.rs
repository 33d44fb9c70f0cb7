//! # Batch harness
//!
//! Runs independent replicate trials of an algorithm, optionally in
//! parallel, and drives the random parameter search. This is the only
//! place in the crate where concurrency exists: each trial owns its own
//! algorithm instance and its own entropy-seeded random stream, and trials
//! share nothing but the read-only objective function.
//!
//! ## Example
//!
//! ```rust
//! use bitga::algorithm::AlgorithmConfig;
//! use bitga::harness::run_simple_ga;
//! use bitga::objective::Sphere;
//!
//! let config = AlgorithmConfig {
//!     population_size: 10,
//!     num_generations: 5,
//!     crossover_prob: 0.7,
//!     mutation_prob: 0.01,
//!     bits_per_variable: 8,
//!     num_variables: 3,
//! };
//! let runs = run_simple_ga(&config, &Sphere, 4).unwrap();
//! assert_eq!(runs.len(), 4);
//! ```

use rayon::prelude::*;
use tracing::info;

use crate::algorithm::{Algorithm, AlgorithmConfig, Chc, GenerationPerformance, SimpleGa};
use crate::error::{GeneticError, OptionExt, Result};
use crate::objective::ObjectiveFunction;
use crate::rng::{RandomNumberGenerator, ThreadLocalRng};

/// Outcome of one parameter-search replicate: the hyperparameters used and
/// the final generation's best result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRecord {
    /// Replicate index; run 0 always uses the caller's base configuration.
    pub run: usize,
    pub best_fitness: f64,
    pub best_solution: Vec<f64>,
    pub population_size: usize,
    pub num_generations: usize,
    pub crossover_prob: f64,
    pub mutation_prob: f64,
}

/// Executes `num_runs` independent trials in parallel, one per replicate,
/// collecting results in run order.
///
/// The closure receives the run index and must build its own algorithm
/// instance and random stream; the first trial error aborts the batch.
pub fn run_batch<F>(num_runs: usize, trial: F) -> Result<Vec<Vec<GenerationPerformance>>>
where
    F: Fn(usize) -> Result<Vec<GenerationPerformance>> + Send + Sync,
{
    (0..num_runs)
        .into_par_iter()
        .map(|run| trial(run))
        .collect()
}

/// Runs `num_runs` replicates of [`SimpleGa`] under one configuration.
pub fn run_simple_ga(
    config: &AlgorithmConfig,
    function: &dyn ObjectiveFunction,
    num_runs: usize,
) -> Result<Vec<Vec<GenerationPerformance>>> {
    run_batch(num_runs, |run| {
        info!(run, "simple_ga replicate");
        let algorithm = SimpleGa::new(config.clone(), function)?;
        let mut rng = RandomNumberGenerator::new();
        algorithm.run(&mut rng)
    })
}

/// Runs `num_runs` replicates of [`Chc`] under one configuration.
pub fn run_chc(
    config: &AlgorithmConfig,
    function: &dyn ObjectiveFunction,
    num_runs: usize,
) -> Result<Vec<Vec<GenerationPerformance>>> {
    run_batch(num_runs, |run| {
        info!(run, "chc replicate");
        let algorithm = Chc::new(config.clone(), function)?;
        let mut rng = RandomNumberGenerator::new();
        algorithm.run(&mut rng)
    })
}

/// Random parameter search over [`SimpleGa`] hyperparameters.
///
/// Run 0 uses `base` unchanged; every later replicate draws its own
/// population size (even, 10..=200), generation count (10..=200),
/// crossover probability in `[0, 1)`, and mutation probability in
/// `[0, 0.1)`. Chromosome shape and the objective function are fixed
/// across replicates. Replicates execute in parallel.
pub fn random_parameter_search(
    base: &AlgorithmConfig,
    function: &dyn ObjectiveFunction,
    num_runs: usize,
) -> Result<Vec<SearchRecord>> {
    (0..num_runs)
        .into_par_iter()
        .map(|run| {
            let mut config = base.clone();
            if run != 0 {
                // Pairwise reproduction needs an even population size.
                config.population_size = 2 * ThreadLocalRng::gen_range(5..=100usize);
                config.num_generations = ThreadLocalRng::gen_range(10..=200usize);
                config.crossover_prob = ThreadLocalRng::gen_range(0.0..1.0);
                config.mutation_prob = ThreadLocalRng::gen_range(0.0..0.1);
            }
            info!(
                run,
                population_size = config.population_size,
                num_generations = config.num_generations,
                crossover_prob = config.crossover_prob,
                mutation_prob = config.mutation_prob,
                "parameter search replicate"
            );
            let algorithm = SimpleGa::new(config.clone(), function)?;
            let mut rng = RandomNumberGenerator::new();
            let performance = algorithm.run(&mut rng)?;
            let last = performance
                .last()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            Ok(SearchRecord {
                run,
                best_fitness: last.best_fitness,
                best_solution: last.best_solution.clone(),
                population_size: config.population_size,
                num_generations: config.num_generations,
                crossover_prob: config.crossover_prob,
                mutation_prob: config.mutation_prob,
            })
        })
        .collect()
}
