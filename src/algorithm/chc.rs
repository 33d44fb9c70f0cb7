//! # CHC
//!
//! The elitist, non-traditional genetic algorithm variant: random pairing
//! without replacement, Hamming-distance incest prevention, half-swap
//! (HUX-like) crossover, elitist parent+child survivor merging, and a
//! divergence restart once the incest threshold is exhausted. CHC has no
//! separate per-generation mutation step; diversity is reintroduced only
//! through the restart.
//!
//! ## Example
//!
//! ```rust
//! use bitga::algorithm::{Algorithm, AlgorithmConfig, Chc};
//! use bitga::objective::Sphere;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let config = AlgorithmConfig {
//!     population_size: 20,
//!     num_generations: 10,
//!     crossover_prob: 0.95,
//!     mutation_prob: 0.05,
//!     bits_per_variable: 16,
//!     num_variables: 3,
//! };
//! let function = Sphere;
//! let chc = Chc::new(config, &function).unwrap();
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let performance = chc.run(&mut rng).unwrap();
//! assert_eq!(performance.len(), 10);
//! ```

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use tracing::debug;

use super::{generation_stats, Algorithm, AlgorithmConfig, GenerationPerformance};
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::objective::ObjectiveFunction;
use crate::rng::RandomNumberGenerator;

/// Elitist, incest-avoiding, convergence-restarting algorithm.
#[derive(Debug)]
pub struct Chc<'a> {
    config: AlgorithmConfig,
    function: &'a dyn ObjectiveFunction,
}

impl<'a> Chc<'a> {
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

    /// Random pairing without replacement: a shuffled copy of the
    /// population, recombined as adjacent pairs.
    fn select_parents(
        &self,
        population: &[Individual<'a>],
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Individual<'a>> {
        let mut parents = population.to_vec();
        parents.shuffle(&mut rng.rng);
        parents
    }

    /// Recombines adjacent pairs whose Hamming distance clears the incest
    /// threshold: `distance / 2 > difference_threshold`.
    ///
    /// A recombined pair swaps exactly half (rounded down) of its
    /// differing positions, chosen by shuffling the differing indices, so
    /// each child sits halfway between its parents. Pairs failing the test
    /// pass through unchanged.
    fn crossover(
        &self,
        parents: &[Individual<'a>],
        difference_threshold: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<'a>>> {
        let mut children = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let distance = pair[0].bits().hamming_distance(pair[1].bits())?;
            if distance as f64 / 2.0 > difference_threshold {
                let mut differing = pair[0].bits().differing_indices(pair[1].bits())?;
                differing.shuffle(&mut rng.rng);
                let mut child1 = pair[0].clone();
                let mut child2 = pair[1].clone();
                for &index in differing.iter().take(distance / 2) {
                    child1.set_value(index, pair[1].get_value(index));
                    child2.set_value(index, pair[0].get_value(index));
                }
                children.push(child1);
                children.push(child2);
            } else {
                children.push(pair[0].clone());
                children.push(pair[1].clone());
            }
        }
        Ok(children)
    }

    /// Elitist survivor selection: parents and children sorted by
    /// descending fitness, then merged by repeatedly taking the better of
    /// the two fronts until the population size is reached. Ties favor the
    /// child.
    fn select_survivors(
        &self,
        parents: Vec<Individual<'a>>,
        children: Vec<Individual<'a>>,
    ) -> Result<Vec<Individual<'a>>> {
        for individual in parents.iter().chain(&children) {
            individual.fitness()?;
        }
        let sorted_parents = sort_by_descending_fitness(parents);
        let sorted_children = sort_by_descending_fitness(children);

        let mut survivors = Vec::with_capacity(self.config.population_size);
        let mut parent_it = 0;
        let mut child_it = 0;
        for _ in 0..self.config.population_size {
            let parent_fitness = cached(&sorted_parents[parent_it]);
            let child_fitness = cached(&sorted_children[child_it]);
            if child_fitness < parent_fitness {
                survivors.push(sorted_parents[parent_it].clone());
                parent_it += 1;
            } else {
                survivors.push(sorted_children[child_it].clone());
                child_it += 1;
            }
        }
        Ok(survivors)
    }

    /// Divergence restart: the population collapses to copies of its best
    /// individual, and every copy except the first flips
    /// `round(mutation_prob * chromosome_length)` distinct random bits.
    fn diverge(
        &self,
        population: &[Individual<'a>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<'a>>> {
        let best = population
            .iter()
            .max_by(|a, b| compare_fitness(cached(a), cached(b)))
            .ok_or(GeneticError::EmptyPopulation)?;

        let chromosome_length = self.config.chromosome_length();
        let num_bit_flips =
            (self.config.mutation_prob * chromosome_length as f64).round() as usize;

        let mut next_population = vec![best.clone(); self.config.population_size];
        for individual in next_population.iter_mut().skip(1) {
            let mut indices: Vec<usize> = (0..chromosome_length).collect();
            indices.shuffle(&mut rng.rng);
            for &index in indices.iter().take(num_bit_flips) {
                individual.flip(index);
            }
        }
        for individual in &mut next_population {
            individual.evaluate()?;
        }
        Ok(next_population)
    }
}

impl Algorithm for Chc<'_> {
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
        for individual in &mut population {
            individual.evaluate()?;
        }

        let mut difference_threshold =
            (self.config.bits_per_variable * self.config.num_variables) as f64 / 4.0;

        for generation in 0..self.config.num_generations {
            let parents = self.select_parents(&population, rng);
            let mut children = self.crossover(&parents, difference_threshold, rng)?;
            for child in &mut children {
                child.evaluate()?;
            }
            let survivors = self.select_survivors(parents, children)?;

            // No improvement over the previous generation relaxes the
            // incest barrier.
            if is_permutation(&survivors, &population) {
                difference_threshold -= 1.0;
            }
            population = survivors;

            if difference_threshold < 0.0 {
                debug!(generation, "chc restart");
                population = self.diverge(&population, rng)?;
                difference_threshold = self.config.mutation_prob
                    * (1.0 - self.config.mutation_prob)
                    * self.config.population_size as f64;
            }

            let stats = generation_stats(generation, &population)?;
            debug!(
                generation,
                best_fitness = stats.best_fitness,
                average_fitness = stats.average_fitness,
                difference_threshold,
                "chc generation"
            );
            performance.push(stats);
        }
        Ok(performance)
    }
}

/// Cached fitness of an individual already checked to be evaluated.
fn cached(individual: &Individual<'_>) -> f64 {
    individual.cached_fitness().unwrap_or(f64::NEG_INFINITY)
}

fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn sort_by_descending_fitness(mut individuals: Vec<Individual<'_>>) -> Vec<Individual<'_>> {
    individuals.sort_by(|a, b| compare_fitness(cached(b), cached(a)));
    individuals
}

/// Multiset equality of two populations by chromosome, order-insensitive.
fn is_permutation(a: &[Individual<'_>], b: &[Individual<'_>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_bits: Vec<&[u8]> = a.iter().map(|i| i.bits().as_slice()).collect();
    let mut b_bits: Vec<&[u8]> = b.iter().map(|i| i.bits().as_slice()).collect();
    a_bits.sort_unstable();
    b_bits.sort_unstable();
    a_bits == b_bits
}
