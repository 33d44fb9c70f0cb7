//! # SimpleGA
//!
//! The classical generational genetic algorithm: fitness-proportional
//! (roulette-wheel) parent selection, one-point crossover, independent
//! per-bit mutation, and full generational replacement with no elitism.
//!
//! ## Example
//!
//! ```rust
//! use bitga::algorithm::{Algorithm, AlgorithmConfig, SimpleGa};
//! use bitga::objective::Sphere;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let config = AlgorithmConfig {
//!     population_size: 20,
//!     num_generations: 10,
//!     crossover_prob: 0.7,
//!     mutation_prob: 0.01,
//!     bits_per_variable: 16,
//!     num_variables: 3,
//! };
//! let function = Sphere;
//! let ga = SimpleGa::new(config, &function).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let performance = ga.run(&mut rng).unwrap();
//! assert_eq!(performance.len(), 10);
//! ```

use tracing::debug;

use super::{generation_stats, Algorithm, AlgorithmConfig, GenerationPerformance};
use crate::error::Result;
use crate::individual::Individual;
use crate::objective::ObjectiveFunction;
use crate::rng::RandomNumberGenerator;

/// Generational genetic algorithm with proportional selection.
#[derive(Debug)]
pub struct SimpleGa<'a> {
    config: AlgorithmConfig,
    function: &'a dyn ObjectiveFunction,
}

impl<'a> SimpleGa<'a> {
    /// Creates the algorithm, validating the configuration against the
    /// objective function.
    pub fn new(config: AlgorithmConfig, function: &'a dyn ObjectiveFunction) -> Result<Self> {
        config.validate(function)?;
        Ok(Self { config, function })
    }

    /// The validated configuration.
    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    /// Selects two parent indices by roulette-wheel selection.
    ///
    /// Each parent gets an independent draw in `[0, sum_of_fitness)`. The
    /// scan for the second parent rejects the first parent's index and
    /// falls back to the last population index when no distinct candidate
    /// absorbs the draw.
    fn proportional_selection(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> (usize, usize) {
        let sum: f64 = fitness.iter().sum();
        let last = fitness.len() - 1;

        let draw = rng.gen_range(0.0..1.0) * sum;
        let mut parent1 = 0;
        let mut partial = 0.0;
        for (i, &f) in fitness.iter().enumerate() {
            partial += f;
            if partial >= draw {
                parent1 = i;
                break;
            }
        }

        let draw = rng.gen_range(0.0..1.0) * sum;
        let mut parent2 = last;
        let mut partial = 0.0;
        for (i, &f) in fitness.iter().enumerate() {
            partial += f;
            if partial >= draw && i != parent1 {
                parent2 = i;
                break;
            }
        }
        (parent1, parent2)
    }

    /// One-point crossover: swaps all bits from a uniformly random cut
    /// point onward between the two parents.
    fn crossover(
        &self,
        parent1: &Individual<'a>,
        parent2: &Individual<'a>,
        rng: &mut RandomNumberGenerator,
    ) -> (Individual<'a>, Individual<'a>) {
        let total_bits = self.config.chromosome_length();
        let cut = rng.gen_range(0..total_bits);
        let mut child1 = parent1.clone();
        let mut child2 = parent2.clone();
        for i in cut..total_bits {
            child1.set_value(i, parent2.get_value(i));
            child2.set_value(i, parent1.get_value(i));
        }
        (child1, child2)
    }

    /// Independent per-bit mutation at the configured rate.
    fn mutate(&self, individual: &mut Individual<'a>, rng: &mut RandomNumberGenerator) {
        for i in 0..self.config.chromosome_length() {
            if rng.gen_bool(self.config.mutation_prob) {
                individual.flip(i);
            }
        }
    }
}

impl Algorithm for SimpleGa<'_> {
    fn run(&self, rng: &mut RandomNumberGenerator) -> Result<Vec<GenerationPerformance>> {
        let mut performance = Vec::with_capacity(self.config.num_generations);
        let mut population: Vec<Individual<'_>> = (0..self.config.population_size)
            .map(|_| {
                Individual::random(
                    self.config.bits_per_variable,
                    self.config.num_variables,
                    self.function,
                    rng,
                )
            })
            .collect::<Result<_>>()?;

        for generation in 0..self.config.num_generations {
            let mut fitness = Vec::with_capacity(population.len());
            for individual in &mut population {
                individual.evaluate()?;
                fitness.push(individual.fitness()?.fitness);
            }

            let stats = generation_stats(generation, &population)?;
            debug!(
                generation,
                best_fitness = stats.best_fitness,
                average_fitness = stats.average_fitness,
                worst_fitness = stats.worst_fitness,
                "simple_ga generation"
            );
            performance.push(stats);

            // Full generational replacement over P/2 selected pairs.
            let mut next_population = Vec::with_capacity(population.len());
            while next_population.len() < population.len() {
                let (i, j) = self.proportional_selection(&fitness, rng);
                let (mut child1, mut child2) = if rng.gen_bool(self.config.crossover_prob) {
                    self.crossover(&population[i], &population[j], rng)
                } else {
                    (population[i].clone(), population[j].clone())
                };
                self.mutate(&mut child1, rng);
                self.mutate(&mut child2, rng);
                next_population.push(child1);
                next_population.push(child2);
            }
            population = next_population;
        }
        Ok(performance)
    }
}
