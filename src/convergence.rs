use crate::error::ConfigError;

pub trait IsConverged {
    fn is_converged(&self, f_cur: f64) -> bool;
}

/// Converged once the residual magnitude drops strictly below the tolerance.
///
/// A NaN residual never counts as converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residual {
    tolerance: f64,
}

impl Residual {
    pub fn new(tolerance: f64) -> Result<Residual, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance { got: tolerance });
        }
        Ok(Residual { tolerance })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for Residual {
    /// Tolerance of 1e-6.
    fn default() -> Self {
        Residual { tolerance: 1e-6 }
    }
}

impl IsConverged for Residual {
    fn is_converged(&self, f_cur: f64) -> bool {
        f_cur.abs() < self.tolerance
    }
}
