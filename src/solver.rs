//! High-order Newton-type solver.
//!
//! The solver owns its configuration and a derivative buffer that is reused
//! across iterations and across solves.

mod driver;

pub use self::driver::OrderPolicy;

use log::debug;

use crate::convergence::Residual;
use crate::error::ConfigError;
use crate::strategy::UpdateStrategy;
use crate::wrap::DerivEval;

/// Solver configuration.
///
/// ```
/// use hisolve::solver::SolverConfig;
/// use hisolve::strategy::UpdateStrategy;
///
/// let config = SolverConfig {
///     tolerance: 1e-12,
///     strategy: UpdateStrategy::Reciprocal,
///     ..SolverConfig::with_max_order(5)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Iteration stops once `|f(x)| < tolerance`.
    pub tolerance: f64,

    /// Hard cap on the number of update steps.
    pub max_iterations: usize,

    /// Highest number of derivative terms a step may use.
    pub max_order: usize,

    /// Use `max_order` terms from the first step on, instead of ramping up.
    pub use_max_order: bool,

    pub strategy: UpdateStrategy,
}

impl SolverConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;

    /// Default tolerance (1e-6), iteration cap (20), fixed-order mode and
    /// strategy 1.
    pub fn with_max_order(max_order: usize) -> SolverConfig {
        SolverConfig {
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_order,
            use_max_order: true,
            strategy: UpdateStrategy::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Residual::new(self.tolerance)?;
        if self.max_order == 0 {
            return Err(ConfigError::InvalidMaxOrder { got: 0 });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    /// Plain Newton: defaults with a single derivative.
    fn default() -> Self {
        SolverConfig::with_max_order(1)
    }
}

/// Outcome of a solve.
///
/// Carries no converged flag: hitting the iteration cap is not told apart from
/// convergence.  Compare `residual` against the tolerance if it matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final point.
    pub root: f64,

    /// f evaluated at `root`.
    pub residual: f64,

    /// Update steps taken.
    pub iterations: usize,

    /// Calls made to the function.
    pub evaluations: usize,
}

/// Root finder using caller-supplied higher-order derivatives.
///
/// ```
/// use hisolve::solver::HiSolver;
/// use hisolve::wrap::DerivFn;
///
/// // sin(x) and its derivatives cycle through sin, cos, -sin, -cos
/// let f = DerivFn::new(|x: f64, order: usize, df: &mut [f64]| {
///     for (k, d) in df.iter_mut().enumerate().take(order + 1) {
///         *d = match k % 4 {
///             0 => x.sin(),
///             1 => x.cos(),
///             2 => -x.sin(),
///             _ => -x.cos(),
///         };
///     }
/// });
///
/// let mut solver = HiSolver::with_params(1e-12, 20, 5, true, 2).expect("valid config");
/// let root = solver.solve(&f, 3.0).unwrap();
/// assert!((root - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct HiSolver {
    config: SolverConfig,
    finish: Residual,
    df: Vec<f64>,
}

impl HiSolver {
    /// Solver with default tolerance, iteration cap, fixed-order mode and
    /// strategy 1.
    ///
    /// # Panics
    ///
    /// Panics if `max_order` is zero.
    pub fn new(max_order: usize) -> HiSolver {
        assert!(max_order >= 1, "max_order must be >= 1");
        HiSolver::build(SolverConfig::with_max_order(max_order), Residual::default())
    }

    /// Solver with every parameter given.  `strategy` must be 1, 2 or 3.
    pub fn with_params(
        tolerance: f64,
        max_iterations: usize,
        max_order: usize,
        use_max_order: bool,
        strategy: usize,
    ) -> Result<HiSolver, ConfigError> {
        HiSolver::from_config(SolverConfig {
            tolerance,
            max_iterations,
            max_order,
            use_max_order,
            strategy: UpdateStrategy::try_from(strategy)?,
        })
    }

    pub fn from_config(config: SolverConfig) -> Result<HiSolver, ConfigError> {
        config.validate()?;
        let finish = Residual::new(config.tolerance)?;
        Ok(HiSolver::build(config, finish))
    }

    fn build(config: SolverConfig, finish: Residual) -> HiSolver {
        let len = OrderPolicy::new(config.max_order, config.use_max_order).buffer_len();
        HiSolver {
            config,
            finish,
            df: vec![0.0; len],
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), ConfigError> {
        self.finish = Residual::new(tolerance)?;
        self.config.tolerance = tolerance;
        Ok(())
    }

    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.config.max_iterations = max_iterations;
    }

    pub fn max_order(&self) -> usize {
        self.config.max_order
    }

    /// Changes the highest derivative order and resizes the derivative buffer
    /// to match.
    pub fn set_max_order(&mut self, max_order: usize) -> Result<(), ConfigError> {
        if max_order == 0 {
            return Err(ConfigError::InvalidMaxOrder { got: max_order });
        }
        self.config.max_order = max_order;
        let len = self.policy().buffer_len();
        self.df.resize(len, 0.0);
        Ok(())
    }

    pub fn use_max_order(&self) -> bool {
        self.config.use_max_order
    }

    pub fn set_use_max_order(&mut self, use_max_order: bool) {
        self.config.use_max_order = use_max_order;
    }

    pub fn update_strategy(&self) -> UpdateStrategy {
        self.config.strategy
    }

    /// Selects the update strategy by number.  Anything but 1, 2 or 3 is
    /// rejected and leaves the current strategy in place.
    pub fn set_update_strategy(&mut self, strategy: usize) -> Result<(), ConfigError> {
        self.config.strategy = UpdateStrategy::try_from(strategy)?;
        Ok(())
    }

    fn policy(&self) -> OrderPolicy {
        OrderPolicy::new(self.config.max_order, self.config.use_max_order)
    }

    /// Iterates from `x0` and returns the final point.
    ///
    /// The final point is returned both on convergence and when the iteration
    /// cap is hit; the two are not distinguished.  Errors come only from `f`
    /// and are passed through unchanged.
    pub fn solve<F>(&mut self, f: &F, x0: f64) -> Result<f64, F::Error>
    where
        F: DerivEval + ?Sized,
    {
        self.solve_detailed(f, x0).map(|sol| sol.root)
    }

    /// Like `solve`, but also reports the final residual and iteration counts.
    pub fn solve_detailed<F>(&mut self, f: &F, x0: f64) -> Result<Solution, F::Error>
    where
        F: DerivEval + ?Sized,
    {
        let policy = self.policy();
        debug!(
            "solving from x0={} with strategy {}, max_order={}, use_max_order={}",
            x0, self.config.strategy, self.config.max_order, self.config.use_max_order
        );

        let sol = driver::iterate_to_root(
            f,
            x0,
            &policy,
            self.config.strategy,
            &self.finish,
            self.config.max_iterations,
            &mut self.df,
        )?;

        debug!(
            "stopped after {} iterations: x={}, f(x)={:e}",
            sol.iterations, sol.root, sol.residual
        );
        Ok(sol)
    }
}
