//! # Individual
//!
//! An [`Individual`] owns one [`BitString`] chromosome plus a lazily
//! computed fitness cache. Every mutation of the chromosome (`set_value`,
//! `flip`, `randomize`) clears the cache; reading fitness from an
//! unevaluated individual is a state-usage error, never a silent default.
//!
//! ## Example
//!
//! ```rust
//! use bitga::individual::Individual;
//! use bitga::objective::Sphere;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let function = Sphere;
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let mut individual = Individual::random(16, 3, &function, &mut rng).unwrap();
//!
//! assert!(!individual.is_evaluated());
//! individual.evaluate().unwrap();
//! assert!(individual.fitness().unwrap().fitness >= 0.0);
//! ```

use crate::bitstring::BitString;
use crate::error::{GeneticError, Result};
use crate::objective::ObjectiveFunction;
use crate::rng::RandomNumberGenerator;

/// A cached evaluation: the maximize-oriented fitness and the raw objective
/// value it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// `max_y - objective_value`; non-negative for any in-contract value.
    pub fitness: f64,
    /// The raw output of the objective function.
    pub objective_value: f64,
}

/// One candidate solution: a chromosome and its evaluation state.
///
/// Cloning preserves the cache, which is correct because the clone's bits
/// are identical to the original's.
#[derive(Debug, Clone)]
pub struct Individual<'a> {
    bits: BitString,
    function: &'a dyn ObjectiveFunction,
    cached: Option<Evaluation>,
}

impl<'a> Individual<'a> {
    /// Creates an individual with a uniformly random chromosome shaped for
    /// `function`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `num_variables` does not
    /// match the function's declared variable count or the chromosome shape
    /// is invalid.
    pub fn random(
        bits_per_variable: usize,
        num_variables: usize,
        function: &'a dyn ObjectiveFunction,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        if num_variables != function.num_variables() {
            return Err(GeneticError::Configuration(format!(
                "Individual has {} variables but the objective function declares {}",
                num_variables,
                function.num_variables()
            )));
        }
        let (min, max) = function.x_range();
        let mut bits = BitString::new(bits_per_variable, num_variables, min, max)?;
        bits.randomize(rng);
        Ok(Self {
            bits,
            function,
            cached: None,
        })
    }

    /// Creates an individual from an existing chromosome.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the chromosome's group
    /// count does not match the function's declared variable count.
    pub fn from_bits(bits: BitString, function: &'a dyn ObjectiveFunction) -> Result<Self> {
        if bits.groups() != function.num_variables() {
            return Err(GeneticError::Configuration(format!(
                "Chromosome encodes {} variables but the objective function declares {}",
                bits.groups(),
                function.num_variables()
            )));
        }
        Ok(Self {
            bits,
            function,
            cached: None,
        })
    }

    /// Returns the bit at `index`.
    pub fn get_value(&self, index: usize) -> u8 {
        self.bits.get(index)
    }

    /// Sets the bit at `index`, invalidating the cached fitness.
    pub fn set_value(&mut self, index: usize, bit: u8) {
        self.cached = None;
        self.bits.set(index, bit);
    }

    /// Toggles the bit at `index`, invalidating the cached fitness.
    pub fn flip(&mut self, index: usize) {
        self.cached = None;
        self.bits.flip(index);
    }

    /// Re-randomizes the chromosome, invalidating the cached fitness.
    pub fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        self.cached = None;
        self.bits.randomize(rng);
    }

    /// Evaluates the individual: decodes the chromosome, applies the
    /// objective function, and caches `(fitness, objective_value)`.
    ///
    /// Recomputing with unchanged bits yields the same cached result for
    /// deterministic objectives; functions with a documented stochastic
    /// term (the noisy quartic) are the exception.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::FitnessCalculation` if the fitness transform
    /// produces a negative or non-finite value, which indicates the
    /// objective function's `max_y` contract is broken.
    pub fn evaluate(&mut self) -> Result<()> {
        let input = self.bits.decode();
        let objective_value = self.function.eval(&input);
        let fitness = self.function.fitness(objective_value);
        if !fitness.is_finite() || fitness < 0.0 {
            return Err(GeneticError::FitnessCalculation(format!(
                "Fitness {} for objective value {} violates the max_y contract",
                fitness, objective_value
            )));
        }
        self.cached = Some(Evaluation {
            fitness,
            objective_value,
        });
        Ok(())
    }

    /// Returns the cached evaluation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::NotEvaluated` if the cache is stale or was
    /// never populated.
    pub fn fitness(&self) -> Result<Evaluation> {
        self.cached.ok_or(GeneticError::NotEvaluated)
    }

    /// `true` when a cached evaluation is present.
    pub fn is_evaluated(&self) -> bool {
        self.cached.is_some()
    }

    /// The cached fitness, if any. Infallible accessor for sort comparators
    /// that run after an evaluation pass has already been checked.
    pub(crate) fn cached_fitness(&self) -> Option<f64> {
        self.cached.map(|c| c.fitness)
    }

    /// The chromosome.
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    /// The decoded solution vector.
    pub fn solution(&self) -> Vec<f64> {
        self.bits.decode()
    }
}

/// Individuals compare equal when their chromosomes are bit-identical;
/// evaluation state does not participate.
impl PartialEq for Individual<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}
