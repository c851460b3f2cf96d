use log::trace;

use super::Solution;
use crate::convergence::IsConverged;
use crate::strategy::UpdateStrategy;
use crate::wrap::DerivEval;

/// How many derivative terms each iteration uses, and how many derivatives
/// each evaluation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    max_order: usize,
    use_max_order: bool,
}

impl OrderPolicy {
    pub fn new(max_order: usize, use_max_order: bool) -> OrderPolicy {
        OrderPolicy {
            max_order,
            use_max_order,
        }
    }

    /// Number of terms the step formula uses in iteration `it`.  Fixed at
    /// `max_order`, or growing with `it` until it reaches `max_order`.
    pub fn order_count(&self, it: usize) -> usize {
        if self.use_max_order {
            self.max_order
        } else {
            it.min(self.max_order)
        }
    }

    /// Highest derivative order requested from the function after a step
    /// using `order_count` terms.
    ///
    /// Variable-order mode asks for one more derivative than was just used, so
    /// the next iteration finds its extra term already evaluated.
    pub fn evaluation_order(&self, order_count: usize) -> usize {
        if self.use_max_order {
            order_count
        } else {
            order_count + 1
        }
    }

    /// Buffer length covering every request this policy can make.
    pub fn buffer_len(&self) -> usize {
        self.max_order + 2
    }
}

/// Driver for the high-order iteration.
///
/// Evaluates at `start`, then alternates step and evaluation until `finish`
/// accepts the residual or `max_iter` steps have been taken.  Both endings
/// produce a `Solution`; only errors raised by `f` itself are returned as
/// `Err`.
///
/// `df` is scratch space of at least `policy.buffer_len()` entries.
pub fn iterate_to_root<F, C>(
    f: &F,
    start: f64,
    policy: &OrderPolicy,
    strategy: UpdateStrategy,
    finish: &C,
    max_iter: usize,
    df: &mut [f64],
) -> Result<Solution, F::Error>
where
    F: DerivEval + ?Sized,
    C: IsConverged,
{
    assert!(df.len() >= policy.buffer_len());

    let mut x = start;
    let mut order = policy.evaluation_order(policy.order_count(0));
    f.eval_derivs(x, order, &mut df[..=order])?;
    let mut evaluations = 1;

    let mut it = 0;
    while !finish.is_converged(df[0]) && it != max_iter {
        it += 1;

        let terms = policy.order_count(it);
        let dx = strategy.step(&df[..=order], terms);
        x += dx;

        order = policy.evaluation_order(terms);
        f.eval_derivs(x, order, &mut df[..=order])?;
        evaluations += 1;

        trace!(
            "iteration {}: terms={}, dx={:e}, x={}, f(x)={:e}",
            it,
            terms,
            dx,
            x,
            df[0]
        );
    }

    Ok(Solution {
        root: x,
        residual: df[0],
        iterations: it,
        evaluations,
    })
}
