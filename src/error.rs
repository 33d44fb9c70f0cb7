//! # Error Types
//!
//! This module defines the error types for the evolutionary engine. The
//! engine distinguishes fatal precondition failures (invalid configuration,
//! reading fitness from an unevaluated individual) from recoverable I/O
//! failures in the reporting layer; both are carried by [`GeneticError`].
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use bitga::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_report(path: &str) -> Result<File> {
//!     File::open(path).context("Failed to open report file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the evolutionary engine.
///
/// Configuration and state-usage variants indicate caller programming
/// errors: the engine performs no recovery for them, callers are expected
/// to propagate them out of the run. Only [`GeneticError::Io`] describes a
/// condition worth handling at runtime.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided, such as
    /// a zero population size or an out-of-range probability.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when reading fitness from an individual whose
    /// cached evaluation has been invalidated or never computed.
    #[error("Individual has not been evaluated")]
    NotEvaluated,

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation violates the objective
    /// function contract, e.g. `max_y - eval(x)` going negative.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an encode/decode operation is handed data of
    /// the wrong shape or outside the codec bounds.
    #[error("Codec error: {0}")]
    Codec(String),

    /// Error that occurs when an I/O operation in the reporting layer fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for evolutionary engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> bitga::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError` with the provided context.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::{GeneticError, OptionExt};
///
/// fn best_fitness(fitness: &[f64]) -> bitga::error::Result<f64> {
///     fitness
///         .iter()
///         .cloned()
///         .reduce(f64::max)
///         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a
    /// closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
