#![allow(dead_code)]

use std::cell::RefCell;

use hisolve::wrap::DerivEval;

/// sin(x), derivatives cycling through sin, cos, -sin, -cos.
pub fn sine(x: f64, order: usize, df: &mut [f64]) {
    for (k, d) in df.iter_mut().enumerate().take(order + 1) {
        *d = if k % 2 == 0 { x.sin() } else { x.cos() };
        if k % 4 > 1 {
            *d = -*d;
        }
    }
}

/// f(x) = x^2 + 1, strictly positive.
pub fn no_real_root(x: f64, order: usize, df: &mut [f64]) {
    for (k, d) in df.iter_mut().enumerate().take(order + 1) {
        *d = match k {
            0 => x * x + 1.0,
            1 => 2.0 * x,
            2 => 2.0,
            _ => 0.0,
        };
    }
}

/// Polynomial sum_j c[j] x^j with exact derivatives of any order.
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        Polynomial { coeffs }
    }

    /// Degree-31 polynomial with c[j] = 10^-j.
    pub fn decaying() -> Polynomial {
        Polynomial::new((0..32).map(|j| 10f64.powi(-j)).collect())
    }

    /// Plain Horner evaluation, independent of `eval_derivs`.
    pub fn value(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }
}

impl DerivEval for Polynomial {
    type Error = std::convert::Infallible;

    fn eval_derivs(&self, x: f64, order: usize, df: &mut [f64]) -> Result<(), Self::Error> {
        for (l, d) in df.iter_mut().enumerate().take(order + 1) {
            *d = 0.0;
            for j in l..self.coeffs.len() {
                // j!/(j-l)!
                let fac: f64 = ((j - l + 1)..=j).map(|m| m as f64).product();
                *d += fac * self.coeffs[j] * x.powi((j - l) as i32);
            }
        }
        Ok(())
    }
}

/// Records each requested order before delegating to `inner`.
pub struct Recording<F> {
    inner: F,
    pub orders: RefCell<Vec<usize>>,
}

impl<F> Recording<F>
where
    F: Fn(f64, usize, &mut [f64]),
{
    pub fn new(inner: F) -> Recording<F> {
        Recording {
            inner,
            orders: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.orders.borrow().len()
    }
}

impl<F> DerivEval for Recording<F>
where
    F: Fn(f64, usize, &mut [f64]),
{
    type Error = std::convert::Infallible;

    fn eval_derivs(&self, x: f64, order: usize, df: &mut [f64]) -> Result<(), Self::Error> {
        assert_eq!(df.len(), order + 1);
        self.orders.borrow_mut().push(order);
        (self.inner)(x, order, df);
        Ok(())
    }
}
