//! High-order Newton-type root finding.
//!
//! Finds a real root of f(x) = 0 using not only f and f' but as many
//! higher-order derivatives as the caller can supply.  Derivatives are never
//! computed here: the function has to be wrapped so that it can fill a
//! derivative vector on request.  See the `wrap` module for how to do this.
//!
//! Three step formulas are available, see `strategy::UpdateStrategy`.
//!
//! # Examples
//! Solving x^3 - 2 = 0 with the rational update (strategy 2):
//!
//! ```
//! use hisolve::solver::HiSolver;
//! use hisolve::wrap::DerivFn;
//!
//! // function and every derivative of it
//! let f = DerivFn::new(|x: f64, order: usize, df: &mut [f64]| {
//!     for (k, d) in df.iter_mut().enumerate().take(order + 1) {
//!         *d = match k {
//!             0 => x * x * x - 2.0,
//!             1 => 3.0 * x * x,
//!             2 => 6.0 * x,
//!             3 => 6.0,
//!             _ => 0.0,
//!         };
//!     }
//! });
//!
//! // tolerance, iteration cap, max order, fixed-order mode, strategy
//! let mut solver = HiSolver::with_params(1e-12, 20, 3, true, 2).expect("config");
//! let root = solver.solve(&f, 1.0).unwrap();
//!
//! // root at x=2^(1/3)
//! assert!((root - 1.25992104989).abs() < 1e-9);
//! ```
//!
//! The solver does not report whether it converged.  Use
//! `HiSolver::solve_detailed` to get the final residual:
//!
//! ```
//! use hisolve::solver::HiSolver;
//! use hisolve::wrap::DerivFn;
//!
//! // exp(x) + 1 has no real root
//! let f = DerivFn::new(|x: f64, order: usize, df: &mut [f64]| {
//!     df[0] = x.exp() + 1.0;
//!     for d in df.iter_mut().take(order + 1).skip(1) {
//!         *d = x.exp();
//!     }
//! });
//!
//! let mut solver = HiSolver::new(2);
//! solver.set_max_iterations(5);
//! let sol = solver.solve_detailed(&f, 0.0).unwrap();
//!
//! assert_eq!(sol.iterations, 5);
//! assert!(!(sol.residual.abs() < solver.tolerance()));
//! ```

pub mod convergence;
pub mod error;
pub mod solver;
pub mod strategy;
pub mod wrap;

pub use error::ConfigError;
pub use solver::{HiSolver, Solution, SolverConfig};
pub use strategy::UpdateStrategy;
pub use wrap::{DerivEval, DerivFn};
