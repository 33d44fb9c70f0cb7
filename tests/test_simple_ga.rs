use bitga::algorithm::{Algorithm, AlgorithmConfig, SimpleGa};
use bitga::bitstring::BitString;
use bitga::individual::Individual;
use bitga::objective::{ObjectiveFunction, Sphere};
use bitga::rng::RandomNumberGenerator;

/// Single-variable identity objective over [0, 15]: the decoded value is
/// the objective value, so a 4-bit chromosome enumerates the integers.
#[derive(Debug)]
struct Identity;

impl ObjectiveFunction for Identity {
    fn eval(&self, x: &[f64]) -> f64 {
        x[0]
    }

    fn x_range(&self) -> (f64, f64) {
        (0.0, 15.0)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![0.0]
    }

    fn min_y(&self) -> f64 {
        0.0
    }

    fn max_y(&self) -> f64 {
        15.0
    }

    fn num_variables(&self) -> usize {
        1
    }
}

fn identity_config(crossover_prob: f64, mutation_prob: f64) -> AlgorithmConfig {
    AlgorithmConfig {
        population_size: 4,
        num_generations: 1,
        crossover_prob,
        mutation_prob,
        bits_per_variable: 4,
        num_variables: 1,
    }
}

#[test]
fn four_bit_identity_scenario() {
    let function = Identity;
    let bits = BitString::from_bits(vec![1, 1, 1, 1], 0.0, 15.0, 1).unwrap();
    let mut individual = Individual::from_bits(bits, &function).unwrap();

    individual.evaluate().unwrap();
    let evaluation = individual.fitness().unwrap();
    assert_eq!(individual.solution(), vec![15.0]);
    assert_eq!(evaluation.objective_value, 15.0);
    assert_eq!(evaluation.fitness, 0.0);
}

#[test]
fn one_generation_run_reports_the_initial_population() {
    let function = Identity;
    let ga = SimpleGa::new(identity_config(0.0, 0.0), &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(8);

    let performance = ga.run(&mut rng).unwrap();
    assert_eq!(performance.len(), 1);
    let record = &performance[0];
    assert_eq!(record.generation, 0);
    // Identity objective: fitness is 15 - value for both extremes.
    assert!((record.best_fitness - (15.0 - record.best_value)).abs() < 1e-12);
    assert!((record.worst_fitness - (15.0 - record.worst_value)).abs() < 1e-12);
    assert_eq!(record.best_solution.len(), 1);
    assert_eq!(record.worst_solution.len(), 1);
}

#[test]
fn zero_rate_reproduction_only_reshuffles_individuals() {
    // With crossover and mutation both off, every child is a bit-identical
    // copy of a selected parent, so per-generation extremes can only
    // tighten: the best cannot improve and the worst cannot worsen.
    let function = Identity;
    let mut config = identity_config(0.0, 0.0);
    config.num_generations = 10;
    let ga = SimpleGa::new(config, &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(21);

    let performance = ga.run(&mut rng).unwrap();
    for pair in performance.windows(2) {
        assert!(pair[1].best_fitness <= pair[0].best_fitness + 1e-12);
        assert!(pair[1].worst_fitness >= pair[0].worst_fitness - 1e-12);
    }
}

#[test]
fn run_respects_the_generation_budget_and_order() {
    let config = AlgorithmConfig {
        population_size: 12,
        num_generations: 25,
        crossover_prob: 0.7,
        mutation_prob: 0.01,
        bits_per_variable: 16,
        num_variables: 3,
    };
    let function = Sphere;
    let ga = SimpleGa::new(config, &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(55);

    let performance = ga.run(&mut rng).unwrap();
    assert_eq!(performance.len(), 25);
    for (i, record) in performance.iter().enumerate() {
        assert_eq!(record.generation, i);
        assert!(record.worst_fitness <= record.average_fitness);
        assert!(record.average_fitness <= record.best_fitness);
        assert!(record.best_value <= record.average_value);
        assert!(record.average_value <= record.worst_value);
        assert_eq!(record.best_solution.len(), 3);
        assert_eq!(record.worst_solution.len(), 3);
        for x in record.best_solution.iter().chain(&record.worst_solution) {
            assert!((-5.12..=5.12).contains(x));
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = identity_config(0.7, 0.05);
    let function = Identity;
    let ga = SimpleGa::new(config, &function).unwrap();

    let first = ga.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();
    let second = ga.run(&mut RandomNumberGenerator::from_seed(77)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn odd_population_is_rejected_at_construction() {
    let mut config = identity_config(0.7, 0.05);
    config.population_size = 5;
    assert!(SimpleGa::new(config, &Identity).is_err());
}
