//! # Reporting
//!
//! CSV serialization of batch results and parameter-search records. This
//! layer is the crate's only I/O: failures here are recoverable
//! [`GeneticError::Io`] values with a diagnostic message, never reasons to
//! abort the evolutionary engine itself.
//!
//! ## Example
//!
//! ```rust
//! use bitga::algorithm::AlgorithmConfig;
//! use bitga::harness::run_simple_ga;
//! use bitga::objective::Sphere;
//! use bitga::report::write_performance;
//!
//! let config = AlgorithmConfig {
//!     population_size: 10,
//!     num_generations: 3,
//!     crossover_prob: 0.7,
//!     mutation_prob: 0.01,
//!     bits_per_variable: 8,
//!     num_variables: 3,
//! };
//! let runs = run_simple_ga(&config, &Sphere, 2).unwrap();
//!
//! let mut csv = Vec::new();
//! write_performance(&mut csv, &runs).unwrap();
//! assert!(csv.starts_with(b"Run,Generation,"));
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::GenerationPerformance;
use crate::error::{Result, ResultExt};
use crate::harness::SearchRecord;

/// Writes one row per run per generation:
/// `Run,Generation,Best Fitness,Average Fitness,Worst Fitness,Best Value,Average Value,Worst Value`.
pub fn write_performance<W: Write>(
    mut writer: W,
    runs: &[Vec<GenerationPerformance>],
) -> Result<()> {
    writeln!(
        writer,
        "Run,Generation,Best Fitness,Average Fitness,Worst Fitness,Best Value,Average Value,Worst Value"
    )?;
    for (run, generations) in runs.iter().enumerate() {
        for record in generations {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                run,
                record.generation,
                record.best_fitness,
                record.average_fitness,
                record.worst_fitness,
                record.best_value,
                record.average_value,
                record.worst_value
            )?;
        }
    }
    Ok(())
}

/// Writes batch results to a file, creating or truncating it.
pub fn write_performance_to_path<P: AsRef<Path>>(
    path: P,
    runs: &[Vec<GenerationPerformance>],
) -> Result<()> {
    let file = File::create(path.as_ref())
        .context(format!("Failed to open {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    write_performance(&mut writer, runs)?;
    writer.flush()?;
    Ok(())
}

/// Writes one row per parameter-search replicate:
/// `Run,Best Fitness,Best Value,Population Size,Generations,Crossover Prob.,Mutation Prob.`
/// with the best solution rendered as `( x1 x2 ... )`.
pub fn write_search_records<W: Write>(mut writer: W, records: &[SearchRecord]) -> Result<()> {
    writeln!(
        writer,
        "Run,Best Fitness,Best Value,Population Size,Generations,Crossover Prob.,Mutation Prob."
    )?;
    for record in records {
        let solution = record
            .best_solution
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            writer,
            "{},{},( {} ),{},{},{},{}",
            record.run,
            record.best_fitness,
            solution,
            record.population_size,
            record.num_generations,
            record.crossover_prob,
            record.mutation_prob
        )?;
    }
    Ok(())
}

/// Writes parameter-search records to a file, creating or truncating it.
pub fn write_search_records_to_path<P: AsRef<Path>>(
    path: P,
    records: &[SearchRecord],
) -> Result<()> {
    let file = File::create(path.as_ref())
        .context(format!("Failed to open {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    write_search_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(generation: usize) -> GenerationPerformance {
        GenerationPerformance {
            generation,
            best_fitness: 10.0,
            average_fitness: 5.5,
            worst_fitness: 1.0,
            best_value: 0.25,
            average_value: 4.75,
            worst_value: 9.0,
            best_solution: vec![1.0, 2.0],
            worst_solution: vec![3.0, 4.0],
        }
    }

    #[test]
    fn performance_rows_cover_every_run_and_generation() {
        let runs = vec![
            vec![sample_record(0), sample_record(1)],
            vec![sample_record(0), sample_record(1)],
        ];
        let mut out = Vec::new();
        write_performance(&mut out, &runs).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Run,Generation,Best Fitness,Average Fitness,Worst Fitness,Best Value,Average Value,Worst Value"
        );
        assert_eq!(lines[1], "0,0,10,5.5,1,0.25,4.75,9");
        assert_eq!(lines[4], "1,1,10,5.5,1,0.25,4.75,9");
    }

    #[test]
    fn search_records_render_the_solution_vector() {
        let records = vec![SearchRecord {
            run: 0,
            best_fitness: 78.5,
            best_solution: vec![0.5, -0.25],
            population_size: 50,
            num_generations: 100,
            crossover_prob: 0.7,
            mutation_prob: 0.001,
        }];
        let mut out = Vec::new();
        write_search_records(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Run,Best Fitness,Best Value,Population Size,Generations,Crossover Prob.,Mutation Prob."
        );
        assert_eq!(lines[1], "0,78.5,( 0.5 -0.25 ),50,100,0.7,0.001");
    }

    #[test]
    fn unwritable_path_is_a_recoverable_error() {
        let runs: Vec<Vec<GenerationPerformance>> = Vec::new();
        assert!(write_performance_to_path("/nonexistent/dir/report.csv", &runs).is_err());
    }
}
