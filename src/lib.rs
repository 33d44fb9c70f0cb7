pub mod algorithm;
pub mod bitstring;
pub mod error;
pub mod harness;
pub mod individual;
pub mod objective;
pub mod report;
pub mod rng;

// Re-export commonly used types for convenience
pub use algorithm::{Algorithm, AlgorithmConfig, Chc, GenerationPerformance, SimpleGa};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
