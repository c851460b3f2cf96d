mod common;

use approx::assert_relative_eq;
use common::Polynomial;
use hisolve::solver::HiSolver;
use hisolve::wrap::DerivEval;

#[test]
fn test_value_matches_horner() {
    let q = Polynomial::decaying();
    let mut df = [0.0; 1];
    for &x in [-2.0, -0.5, 0.0, 0.3, 1.5].iter() {
        q.eval_derivs(x, 0, &mut df).expect("infallible");
        assert_relative_eq!(df[0], q.value(x), max_relative = 1e-14);
    }
}

#[test]
fn test_derivatives_match_finite_differences() {
    let q = Polynomial::decaying();
    let h = 1e-5;
    let max_order = 6;

    let mut df = vec![0.0; max_order + 1];
    let mut lo = vec![0.0; max_order + 1];
    let mut hi = vec![0.0; max_order + 1];

    for &x in [-2.0, -0.5, 0.3, 1.5, 4.0].iter() {
        q.eval_derivs(x, max_order, &mut df).expect("infallible");
        q.eval_derivs(x - h, max_order, &mut lo).expect("infallible");
        q.eval_derivs(x + h, max_order, &mut hi).expect("infallible");

        // central difference of order k-1 approximates order k
        for k in 1..=max_order {
            let approx = (hi[k - 1] - lo[k - 1]) / (2.0 * h);
            assert_relative_eq!(df[k], approx, max_relative = 1e-7);
        }
    }
}

#[test]
fn test_partial_request_leaves_tail_alone() {
    let q = Polynomial::decaying();
    let mut df = [f64::NAN; 3];
    q.eval_derivs(0.0, 1, &mut df[..2]).expect("infallible");

    // c0 and c1 at x=0
    assert_eq!(df[0], 1.0);
    assert_relative_eq!(df[1], 0.1, max_relative = 1e-15);
    assert!(df[2].is_nan());
}

#[test]
fn test_polynomial_root() {
    // sum of (x/10)^j for j < 32 vanishes at x=-10
    let q = Polynomial::decaying();

    for strategy in 1..4 {
        for &use_max_order in [true, false].iter() {
            let mut solver =
                HiSolver::with_params(1e-12, 40, 5, use_max_order, strategy).expect("config");
            let x = solver.solve(&q, -11.0).expect("infallible");
            assert!(
                (x + 10.0).abs() < 1e-9,
                "strategy {} use_max_order={}: wanted x=-10, got {}",
                strategy,
                use_max_order,
                x
            );
        }
    }
}
