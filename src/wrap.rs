use std::convert::Infallible;

/// Trait evaluating f(x) together with its derivatives, x in R^1.
///
/// Implementations fill `df[k]` with the k-th derivative of f at `x` for every
/// `k` in `0..=order`; `df[0]` is the function value itself.  The slice handed
/// in always has exactly `order + 1` entries.
///
/// Evaluation must be pure.  Failures (e.g. a derivative undefined at `x`) are
/// reported through `Error` and handed back to the caller of the solver
/// untouched.
pub trait DerivEval {
    type Error;

    fn eval_derivs(&self, x: f64, order: usize, df: &mut [f64]) -> Result<(), Self::Error>;
}

impl<'a, T> DerivEval for &'a T
where
    T: DerivEval + ?Sized,
{
    type Error = T::Error;

    fn eval_derivs(&self, x: f64, order: usize, df: &mut [f64]) -> Result<(), Self::Error> {
        (**self).eval_derivs(x, order, df)
    }
}

/// Wraps an infallible closure to implement DerivEval.
///
/// ```
/// use hisolve::wrap::{DerivEval, DerivFn};
///
/// // f(x) = x^2 - 2 has no derivatives beyond the second
/// let f = DerivFn::new(|x: f64, order: usize, df: &mut [f64]| {
///     for (k, d) in df.iter_mut().enumerate().take(order + 1) {
///         *d = match k {
///             0 => x * x - 2.0,
///             1 => 2.0 * x,
///             2 => 2.0,
///             _ => 0.0,
///         };
///     }
/// });
///
/// let mut df = [0.0; 3];
/// f.eval_derivs(3.0, 2, &mut df).unwrap();
/// assert_eq!(df, [7.0, 6.0, 2.0]);
/// ```
pub struct DerivFn<F>
where
    F: Fn(f64, usize, &mut [f64]),
{
    pub f: F,
}

impl<F> DerivFn<F>
where
    F: Fn(f64, usize, &mut [f64]),
{
    pub fn new(f: F) -> DerivFn<F> {
        DerivFn { f }
    }
}

impl<F> DerivEval for DerivFn<F>
where
    F: Fn(f64, usize, &mut [f64]),
{
    type Error = Infallible;

    fn eval_derivs(&self, x: f64, order: usize, df: &mut [f64]) -> Result<(), Self::Error> {
        (self.f)(x, order, df);
        Ok(())
    }
}
