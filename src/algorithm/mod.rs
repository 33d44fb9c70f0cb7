//! # Algorithms
//!
//! Shared contract for the two competing generational algorithms. Every
//! variant is configured once with an [`AlgorithmConfig`], holds a
//! reference to the objective function for its lifetime, and exposes a
//! single observable operation: [`Algorithm::run`], which executes the
//! full evolutionary loop and returns one [`GenerationPerformance`] record
//! per generation, in order.
//!
//! `run()` is strictly single-threaded and performs no I/O; its only
//! nondeterminism is the caller-supplied random stream. The sanctioned
//! concurrency model is one `run()` per thread with its own generator and
//! algorithm instance (see [`crate::harness`]).

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::objective::ObjectiveFunction;
use crate::rng::RandomNumberGenerator;

pub mod chc;
pub mod simple_ga;

pub use chc::Chc;
pub use simple_ga::SimpleGa;

/// Configuration shared by every algorithm variant.
///
/// Validated against the objective function before the first generation;
/// violations are caller programming errors and abort the run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmConfig {
    /// Number of individuals per generation. Must be positive and even:
    /// both algorithms reproduce over adjacent pairs.
    pub population_size: usize,
    /// Number of generations to execute.
    pub num_generations: usize,
    /// Probability of recombining a selected pair, in `[0, 1]`.
    pub crossover_prob: f64,
    /// Per-bit mutation probability, in `[0, 1]`.
    pub mutation_prob: f64,
    /// Bits backing each decoded variable, in `1..=64`.
    pub bits_per_variable: usize,
    /// Number of variables; must match the objective function.
    pub num_variables: usize,
}

impl AlgorithmConfig {
    /// Total chromosome length in bits.
    pub fn chromosome_length(&self) -> usize {
        self.bits_per_variable * self.num_variables
    }

    /// Checks the configuration against the objective function.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` for non-positive counts, an
    /// odd population size, out-of-range probabilities, an unencodable bit
    /// width, or a variable-count mismatch with the function.
    pub fn validate(&self, function: &dyn ObjectiveFunction) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even for pairwise reproduction, got {}",
                self.population_size
            )));
        }
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_prob) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must be in [0, 1], got {}",
                self.crossover_prob
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be in [0, 1], got {}",
                self.mutation_prob
            )));
        }
        if self.bits_per_variable == 0 || self.bits_per_variable > 64 {
            return Err(GeneticError::Configuration(format!(
                "Bits per variable must be in 1..=64, got {}",
                self.bits_per_variable
            )));
        }
        if self.num_variables == 0 {
            return Err(GeneticError::Configuration(
                "Variable count must be positive".to_string(),
            ));
        }
        if self.num_variables != function.num_variables() {
            return Err(GeneticError::Configuration(format!(
                "Configured {} variables but the objective function declares {}",
                self.num_variables,
                function.num_variables()
            )));
        }
        Ok(())
    }
}

/// Immutable per-generation statistics record.
///
/// Solution vectors come from the best/worst individuals by fitness;
/// objective-value extremes are taken over the raw values independently
/// (best = minimum, since the engine minimizes), so they may describe
/// different individuals than the solution vectors for noisy objectives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationPerformance {
    /// Zero-based generation index.
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
    pub worst_fitness: f64,
    pub best_value: f64,
    pub average_value: f64,
    pub worst_value: f64,
    /// Decoded chromosome of the best-by-fitness individual.
    pub best_solution: Vec<f64>,
    /// Decoded chromosome of the worst-by-fitness individual.
    pub worst_solution: Vec<f64>,
}

/// An evolutionary algorithm variant.
pub trait Algorithm: Send + Sync {
    /// Executes the full evolutionary loop.
    ///
    /// Returns exactly `num_generations` records in generation order. All
    /// randomness is drawn from `rng`.
    fn run(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<GenerationPerformance>>;
}

/// Builds the statistics record for one evaluated population.
///
/// Shared by both algorithms; errors if the population is empty or any
/// individual's cache is stale.
pub(crate) fn generation_stats(
    generation: usize,
    population: &[Individual<'_>],
) -> Result<GenerationPerformance> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    let mut fitness = Vec::with_capacity(population.len());
    let mut values = Vec::with_capacity(population.len());
    for individual in population {
        let evaluation = individual.fitness()?;
        fitness.push(evaluation.fitness);
        values.push(evaluation.objective_value);
    }

    let (best_index, worst_index) = extreme_indices(&fitness);
    let n = population.len() as f64;

    Ok(GenerationPerformance {
        generation,
        best_fitness: fitness[best_index],
        average_fitness: fitness.iter().sum::<f64>() / n,
        worst_fitness: fitness[worst_index],
        best_value: values.iter().cloned().fold(f64::INFINITY, f64::min),
        average_value: values.iter().sum::<f64>() / n,
        worst_value: values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        best_solution: population[best_index].solution(),
        worst_solution: population[worst_index].solution(),
    })
}

/// Indices of the maximum and minimum entries. First occurrence wins ties.
fn extreme_indices(fitness: &[f64]) -> (usize, usize) {
    let mut best = 0;
    let mut worst = 0;
    for (i, &f) in fitness.iter().enumerate() {
        if f > fitness[best] {
            best = i;
        }
        if f < fitness[worst] {
            worst = i;
        }
    }
    (best, worst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Sphere;

    fn base_config() -> AlgorithmConfig {
        AlgorithmConfig {
            population_size: 10,
            num_generations: 5,
            crossover_prob: 0.7,
            mutation_prob: 0.01,
            bits_per_variable: 16,
            num_variables: 3,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate(&Sphere).is_ok());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let function = Sphere;
        let breakers: [fn(&mut AlgorithmConfig); 8] = [
            |c| c.population_size = 0,
            |c| c.population_size = 7,
            |c| c.num_generations = 0,
            |c| c.crossover_prob = 1.2,
            |c| c.mutation_prob = -0.1,
            |c| c.bits_per_variable = 0,
            |c| c.bits_per_variable = 65,
            |c| c.num_variables = 2,
        ];
        for breaker in breakers {
            let mut config = base_config();
            breaker(&mut config);
            assert!(config.validate(&function).is_err(), "{:?}", config);
        }
    }

    #[test]
    fn stats_require_an_evaluated_population() {
        let function = Sphere;
        let mut rng = RandomNumberGenerator::from_seed(9);
        let unevaluated =
            vec![Individual::random(8, 3, &function, &mut rng).unwrap()];
        assert!(generation_stats(0, &unevaluated).is_err());
        assert!(generation_stats(0, &[]).is_err());
    }
}
