use bitga::algorithm::{Algorithm, AlgorithmConfig, Chc};
use bitga::objective::{ShekelFoxholes, Sphere};
use bitga::rng::RandomNumberGenerator;

fn sphere_config(num_generations: usize) -> AlgorithmConfig {
    AlgorithmConfig {
        population_size: 20,
        num_generations,
        crossover_prob: 0.95,
        mutation_prob: 0.05,
        bits_per_variable: 16,
        num_variables: 3,
    }
}

#[test]
fn best_fitness_never_degrades_on_a_deterministic_objective() {
    // Elitist survivor selection keeps the best individual through every
    // generation, and the restart leaves one copy of it untouched.
    let function = Sphere;
    let chc = Chc::new(sphere_config(60), &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let performance = chc.run(&mut rng).unwrap();
    assert_eq!(performance.len(), 60);
    for pair in performance.windows(2) {
        assert!(pair[1].best_fitness >= pair[0].best_fitness - 1e-9);
    }
}

#[test]
fn long_runs_make_progress_on_the_sphere() {
    let function = Sphere;
    let chc = Chc::new(sphere_config(80), &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(12);

    let performance = chc.run(&mut rng).unwrap();
    let first = &performance[0];
    let last = performance.last().unwrap();
    assert!(last.best_fitness >= first.best_fitness);
    // The sphere optimum sits at fitness max_y; 80 elitist generations
    // reliably get within a few percent of it.
    assert!(
        last.best_value < first.best_value || last.best_value < 0.5,
        "no progress: first {}, last {}",
        first.best_value,
        last.best_value
    );
}

#[test]
fn records_are_ordered_and_well_formed() {
    let config = AlgorithmConfig {
        population_size: 10,
        num_generations: 30,
        crossover_prob: 0.95,
        mutation_prob: 0.05,
        bits_per_variable: 12,
        num_variables: 2,
    };
    let function = ShekelFoxholes;
    let chc = Chc::new(config, &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(31);

    let performance = chc.run(&mut rng).unwrap();
    assert_eq!(performance.len(), 30);
    for (i, record) in performance.iter().enumerate() {
        assert_eq!(record.generation, i);
        assert!(record.worst_fitness <= record.average_fitness);
        assert!(record.average_fitness <= record.best_fitness);
        assert!(record.best_value <= record.worst_value);
        assert_eq!(record.best_solution.len(), 2);
        assert_eq!(record.worst_solution.len(), 2);
        for x in record.best_solution.iter().chain(&record.worst_solution) {
            assert!((-65.536..=65.536).contains(x));
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let function = Sphere;
    let chc = Chc::new(sphere_config(15), &function).unwrap();

    let first = chc.run(&mut RandomNumberGenerator::from_seed(7)).unwrap();
    let second = chc.run(&mut RandomNumberGenerator::from_seed(7)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn tiny_population_still_completes() {
    // Small populations converge fast and exercise the restart path: the
    // threshold starts at 12 and decays by 1 per stagnant generation.
    let config = AlgorithmConfig {
        population_size: 4,
        num_generations: 40,
        crossover_prob: 0.95,
        mutation_prob: 0.2,
        bits_per_variable: 16,
        num_variables: 3,
    };
    let function = Sphere;
    let chc = Chc::new(config, &function).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(3);

    let performance = chc.run(&mut rng).unwrap();
    assert_eq!(performance.len(), 40);
    for pair in performance.windows(2) {
        assert!(pair[1].best_fitness >= pair[0].best_fitness - 1e-9);
    }
}
