//! Growth assertions against real workloads.

use perf_oracle::{
    black_box, Expectation, GrowthModel, OracleError, PerfOracle, SizeRange, DEFAULT_TIE_EPSILON,
};
use rand::Rng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fibonacci(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// Quadratic prefix averages: `averages[i]` is the mean of `numbers[..=i]`.
fn prefix_averages(numbers: &[f64]) -> Vec<f64> {
    (0..numbers.len())
        .map(|i| numbers[..=i].iter().sum::<f64>() / (i + 1) as f64)
        .collect()
}

fn fibonacci_range() -> SizeRange {
    SizeRange::new(1, 25).unwrap().step_by(1)
}

#[test]
fn fibonacci_performs_exponential() {
    init_tracing();
    black_box(fibonacci(25));

    let verdict = PerfOracle::new()
        .repeat(3)
        .assert_complexity(
            fibonacci_range(),
            GrowthModel::Exponential,
            Expectation::To,
            |n| fibonacci(black_box(n as u64)),
        )
        .unwrap();

    assert!(verdict.passed, "{}", verdict.failure_message());
    assert_eq!(verdict.sizes.len(), 25);
}

#[test]
fn fibonacci_does_not_perform_linear() {
    init_tracing();
    black_box(fibonacci(25));

    let verdict = PerfOracle::new()
        .repeat(3)
        .assert_complexity(
            fibonacci_range(),
            GrowthModel::Linear,
            Expectation::To,
            |n| fibonacci(black_box(n as u64)),
        )
        .unwrap();

    assert!(!verdict.passed);
    assert_eq!(
        verdict.failure_message(),
        format!("expected block to perform linear, but performed {}", verdict.observed)
    );

    let negated = PerfOracle::new()
        .repeat(3)
        .assert_complexity(
            fibonacci_range(),
            GrowthModel::Linear,
            Expectation::NotTo,
            |n| fibonacci(black_box(n as u64)),
        )
        .unwrap();
    assert!(negated.passed, "{}", negated.failure_message());
}

#[test]
fn prefix_averages_select_the_single_best_model() {
    init_tracing();
    let mut rng = rand::rng();
    let sizes = SizeRange::new(1, 10_000).unwrap().step_by(500).sizes().unwrap();
    let inputs: Vec<Vec<f64>> = sizes
        .iter()
        .map(|&n| (0..n).map(|_| rng.random::<f64>()).collect())
        .collect();
    let mut inputs = inputs.iter();

    let verdict = PerfOracle::new()
        .assert_complexity_over(&sizes, GrowthModel::Power, Expectation::To, |_| {
            prefix_averages(inputs.next().expect("one input per size"))
        })
        .unwrap();

    let observed = verdict.observed_fit().expect("observed model was fitted");
    let best = verdict.fits.iter().map(|fit| fit.r_squared).fold(0.0_f64, f64::max);
    for fit in &verdict.fits {
        assert!(
            fit.r_squared <= observed.r_squared + DEFAULT_TIE_EPSILON,
            "{} scored {} above observed {} at {}",
            fit.model,
            fit.r_squared,
            observed.model,
            observed.r_squared
        );
        if fit.model.rank() < observed.model.rank() {
            assert!(
                fit.r_squared < best - DEFAULT_TIE_EPSILON,
                "simpler {} at {} should have won the tie",
                fit.model,
                fit.r_squared
            );
        }
    }
    assert_eq!(verdict.passed, verdict.observed == GrowthModel::Power);

    assert!(
        matches!(
            verdict.observed,
            GrowthModel::Linearithmic
                | GrowthModel::Quadratic
                | GrowthModel::Cubic
                | GrowthModel::Power
        ),
        "quadratic work classified as {}",
        verdict.observed
    );
}

#[test]
fn work_error_aborts_the_run() {
    #[derive(Debug, PartialEq)]
    struct Exhausted(usize);

    let mut visited = Vec::new();
    let err = PerfOracle::new()
        .try_assert_complexity(
            SizeRange::new(1, 100).unwrap().step_by(10),
            GrowthModel::Linear,
            Expectation::To,
            |n| {
                visited.push(n);
                if n > 30 {
                    Err(Exhausted(n))
                } else {
                    Ok(n)
                }
            },
        )
        .unwrap_err();

    match err {
        OracleError::Work(inner) => assert_eq!(inner, Exhausted(31)),
        OracleError::Usage(usage) => panic!("unexpected usage error: {}", usage),
    }
    assert_eq!(visited, vec![1, 11, 21, 31]);
}
