use std::fmt;

use crate::error::ConfigError;

/// Formula turning a derivative vector into a step increment.
///
/// Every strategy starts from the Newton step `dx0 = -f/f'` and, given `terms`
/// = N, may refine it using `df[2..=N]`.  With N = 1 all three reduce to the
/// plain Newton step.
///
/// None of them guard against `f' == 0` or a vanishing denominator in the
/// rational update; the resulting infinities and NaNs are returned as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateStrategy {
    /// Strategy 1.  Always the plain Newton step: higher-order terms do not
    /// contribute, whatever the term count.
    #[default]
    Plain,

    /// Strategy 2.  Rational refinement where the k-th correction raises the
    /// latest step to the power k.
    Reciprocal,

    /// Strategy 3.  Same refinement as strategy 2, but the power is a running
    /// product of the steps seen so far.
    Accumulated,
}

impl UpdateStrategy {
    /// Selector number (1, 2 or 3) for this strategy.
    pub fn number(self) -> usize {
        match self {
            UpdateStrategy::Plain => 1,
            UpdateStrategy::Reciprocal => 2,
            UpdateStrategy::Accumulated => 3,
        }
    }

    /// Computes the step increment from `df`, using derivative orders
    /// `1..=terms`.
    ///
    /// `df` must hold at least `terms + 1` entries and `terms` must be at
    /// least 1.
    pub fn step(self, df: &[f64], terms: usize) -> f64 {
        debug_assert!(terms >= 1);
        debug_assert!(df.len() > terms);

        match self {
            UpdateStrategy::Plain => newton_step(df),
            UpdateStrategy::Reciprocal => reciprocal_step(df, terms),
            UpdateStrategy::Accumulated => accumulated_step(df, terms),
        }
    }
}

impl TryFrom<usize> for UpdateStrategy {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(UpdateStrategy::Plain),
            2 => Ok(UpdateStrategy::Reciprocal),
            3 => Ok(UpdateStrategy::Accumulated),
            got => Err(ConfigError::UnknownStrategy { got }),
        }
    }
}

impl fmt::Display for UpdateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateStrategy::Plain => "plain",
            UpdateStrategy::Reciprocal => "reciprocal",
            UpdateStrategy::Accumulated => "accumulated",
        };
        write!(f, "{} ({})", name, self.number())
    }
}

fn newton_step(df: &[f64]) -> f64 {
    -df[0] / df[1]
}

fn reciprocal_step(df: &[f64], terms: usize) -> f64 {
    let mut fac = 1.0;
    let mut dx = newton_step(df);

    for k in 1..terms {
        let aux = dx.powi(k as i32);
        fac *= (k + 1) as f64;
        dx = 1.0 / (1.0 / dx - aux * df[k + 1] / (fac * df[0]));
    }
    dx
}

fn accumulated_step(df: &[f64], terms: usize) -> f64 {
    let mut aux = 1.0;
    let mut fac = 1.0;
    let mut dx = newton_step(df);

    for k in 1..terms {
        // power built from the step before this correction
        aux *= dx;
        fac *= (k + 1) as f64;
        dx = 1.0 / (1.0 / dx - aux * df[k + 1] / (fac * df[0]));
    }
    dx
}
