//! # Objective Functions
//!
//! The [`ObjectiveFunction`] trait is the engine's boundary to the problem
//! being optimized: a black-box real-valued function over `num_variables`
//! variables sharing one `[min, max]` range. The engine always minimizes
//! the raw objective value; the provided [`ObjectiveFunction::fitness`]
//! transform (`max_y - value`) turns it into the non-negative,
//! maximize-oriented quantity the operators work with.
//!
//! Implementations must be safe for concurrent `eval` calls: replicate
//! trials share one read-only function instance across threads.

use std::fmt::Debug;

pub mod dejong;

pub use dejong::{NoisyQuartic, Rosenbrock, ShekelFoxholes, Sphere, Step};

/// A black-box real-valued function to minimize.
///
/// `eval` is deterministic unless the implementation documents a stochastic
/// component (see [`NoisyQuartic`]). `max_y` must bound `eval` from above
/// over the whole domain so that fitness never goes negative; a violation
/// is a contract breach surfaced as a fatal error by the engine.
pub trait ObjectiveFunction: Debug + Send + Sync {
    /// Evaluates the function at `x`. `x.len()` must equal
    /// [`ObjectiveFunction::num_variables`].
    fn eval(&self, x: &[f64]) -> f64;

    /// The shared `(min, max)` range applied to every variable.
    fn x_range(&self) -> (f64, f64);

    /// The input at which the function attains its minimum. Informational.
    fn min_x(&self) -> Vec<f64>;

    /// The minimum value of the function over its domain.
    fn min_y(&self) -> f64;

    /// An upper bound of the function over its domain.
    fn max_y(&self) -> f64;

    /// Number of variables the function is defined over.
    fn num_variables(&self) -> usize;

    /// Converts a raw objective value to fitness. Fitness increases as the
    /// raw value decreases and is non-negative for any in-contract value.
    fn fitness(&self, value: f64) -> f64 {
        self.max_y() - value
    }
}
