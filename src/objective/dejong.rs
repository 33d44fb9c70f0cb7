//! # De Jong benchmark suite
//!
//! The five classical De Jong test functions, each an independent value
//! implementing [`ObjectiveFunction`]. They carry no mutable state, so one
//! instance can back any number of concurrent trials.

use rand_distr::Normal;

use super::ObjectiveFunction;
use crate::rng::ThreadLocalRng;

/// Sphere function (De Jong F1).
///
/// `f(x) = sum(x_i^2)` over 3 variables in `[-5.12, 5.12]`.
/// Minimum `f(0, 0, 0) = 0`; maximum `78.6432` at the corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl ObjectiveFunction for Sphere {
    fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_variables());
        x.iter().map(|&v| v * v).sum()
    }

    fn x_range(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![0.0, 0.0, 0.0]
    }

    fn min_y(&self) -> f64 {
        0.0
    }

    fn max_y(&self) -> f64 {
        // 3 * 5.12^2 = 78.6432, computed with the same rounding as a
        // corner evaluation so fitness cannot dip below zero there.
        3.0 * (5.12 * 5.12)
    }

    fn num_variables(&self) -> usize {
        3
    }
}

/// Rosenbrock function (De Jong F2).
///
/// `f(x) = 100(x_1^2 - x_2)^2 + (1 - x_1)^2` over 2 variables in
/// `[-5.12, 5.12]`. Minimum `f(1, 1) = 0`; maximum
/// `f(-5.12, -5.12) = 98221.9167...`, bounded here by 98221.92.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rosenbrock;

impl ObjectiveFunction for Rosenbrock {
    fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_variables());
        let a = x[0] * x[0] - x[1];
        let b = 1.0 - x[0];
        100.0 * a * a + b * b
    }

    fn x_range(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![1.0, 1.0]
    }

    fn min_y(&self) -> f64 {
        0.0
    }

    fn max_y(&self) -> f64 {
        98221.92
    }

    fn num_variables(&self) -> usize {
        2
    }
}

/// Step function (De Jong F3).
///
/// `f(x) = 30 + sum(floor(x_i))` over 5 variables in `[-5.12, 5.12]`.
/// Minimum `f(-5.12, ..., -5.12) = 0`; maximum `55`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Step;

impl ObjectiveFunction for Step {
    fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_variables());
        30.0 + x.iter().map(|&v| v.floor()).sum::<f64>()
    }

    fn x_range(&self) -> (f64, f64) {
        (-5.12, 5.12)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![-5.12; 5]
    }

    fn min_y(&self) -> f64 {
        0.0
    }

    fn max_y(&self) -> f64 {
        55.0
    }

    fn num_variables(&self) -> usize {
        5
    }
}

/// Quartic function with Gaussian noise (De Jong F4).
///
/// `f(x) = 3 + sum(i * x_i^4) + N(0, 1)` over 10 variables in
/// `[-1.28, 1.28]`. The constant 3 offsets the noise term so the function
/// stays non-negative out to three standard deviations; `max_y` assumes the
/// same bound on the other side.
///
/// The noise term makes `eval` intentionally non-deterministic: repeated
/// evaluation of identical inputs yields different values. This is a
/// documented property of the benchmark, not an engine defect, and tests
/// must not assert strict idempotence for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoisyQuartic;

impl ObjectiveFunction for NoisyQuartic {
    fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_variables());
        let sum: f64 = x
            .iter()
            .enumerate()
            .map(|(i, &v)| (i + 1) as f64 * v.powi(4))
            .sum();
        let normal = Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
        3.0 + sum + ThreadLocalRng::sample(normal)
    }

    fn x_range(&self) -> (f64, f64) {
        (-1.28, 1.28)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![0.0; 10]
    }

    fn min_y(&self) -> f64 {
        0.0
    }

    fn max_y(&self) -> f64 {
        150.64
    }

    fn num_variables(&self) -> usize {
        10
    }
}

/// Shekel's foxholes function (De Jong F5).
///
/// `f(x) = 1 / (0.002 + sum_j 1 / (j + 1 + sum_i (x_i - a_ij)^6))` over
/// 2 variables in `[-65.536, 65.536]`. Minimum approximately 1 at
/// `(-32, -32)`; bounded above by 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShekelFoxholes;

/// Foxhole coordinates: 25 points on the 5x5 grid {-32, -16, 0, 16, 32}^2.
const FOXHOLES: [[f64; 2]; 25] = {
    let coords = [-32.0, -16.0, 0.0, 16.0, 32.0];
    let mut a = [[0.0; 2]; 25];
    let mut j = 0;
    while j < 25 {
        a[j] = [coords[j % 5], coords[j / 5]];
        j += 1;
    }
    a
};

impl ObjectiveFunction for ShekelFoxholes {
    fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_variables());
        let mut sum = 0.002;
        for (j, hole) in FOXHOLES.iter().enumerate() {
            let mut denom = (j + 1) as f64;
            denom += (x[0] - hole[0]).powi(6);
            denom += (x[1] - hole[1]).powi(6);
            sum += 1.0 / denom;
        }
        1.0 / sum
    }

    fn x_range(&self) -> (f64, f64) {
        (-65.536, 65.536)
    }

    fn min_x(&self) -> Vec<f64> {
        vec![-32.0, -32.0]
    }

    fn min_y(&self) -> f64 {
        1.0
    }

    fn max_y(&self) -> f64 {
        500.0
    }

    fn num_variables(&self) -> usize {
        2
    }
}
