use core::fmt;
use core::str::FromStr;

use crate::error::NeuronError;

/// The transform a neuron applies to its weighted sum.
///
/// Every variant takes one real parameter `p`. For `Linear`, `Sigmoid` and
/// `HyperbolicTangent` it scales the weighted sum; for `Threshold` it is the
/// strict comparison threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationKind {
    /// `f(S) = S * p`. Range (-inf, +inf)
    Linear,
    /// Logistic sigmoid `1 / (1 + e^(-pS))`. Range (0, 1)
    Sigmoid,
    /// `1` when `S > p`, otherwise `0`
    Threshold,
    /// Hyperbolic tangent of `pS`, evaluated from exponentials. Range (-1, 1)
    HyperbolicTangent,
}

impl ActivationKind {
    pub const ALL: [ActivationKind; 4] = [
        ActivationKind::Linear,
        ActivationKind::Sigmoid,
        ActivationKind::Threshold,
        ActivationKind::HyperbolicTangent,
    ];

    /// Apply the transform to a weighted sum `sum` with parameter `p`.
    #[inline]
    pub fn apply(self, sum: f64, p: f64) -> f64 {
        match self {
            ActivationKind::Linear => sum * p,
            ActivationKind::Sigmoid => 1.0 / (1.0 + (-p * sum).exp()),
            ActivationKind::Threshold => {
                if sum > p {
                    1.0
                } else {
                    0.0
                }
            }
            ActivationKind::HyperbolicTangent => {
                // Exponential form, not f64::tanh: past |pS| ~ 709.78 this is
                // inf/inf = NaN and must stay that way.
                let pos = (p * sum).exp();
                let neg = (-p * sum).exp();
                (pos - neg) / (pos + neg)
            }
        }
    }

    /// Lower and upper bounds of the output.
    pub fn output_range(self) -> (f64, f64) {
        match self {
            ActivationKind::Linear => (f64::NEG_INFINITY, f64::INFINITY),
            ActivationKind::Sigmoid => (0.0, 1.0),
            ActivationKind::Threshold => (0.0, 1.0),
            ActivationKind::HyperbolicTangent => (-1.0, 1.0),
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`] and written to config.
    pub fn name(self) -> &'static str {
        match self {
            ActivationKind::Linear => "linear",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::Threshold => "threshold",
            ActivationKind::HyperbolicTangent => "hyperbolic_tangent",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = NeuronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(ActivationKind::Linear),
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "threshold" => Ok(ActivationKind::Threshold),
            "hyperbolic_tangent" | "hyperbolic-tangent" | "hyperbolictangent" | "tanh" => {
                Ok(ActivationKind::HyperbolicTangent)
            }
            _ => Err(NeuronError::UnsupportedActivationKind(s.to_string())),
        }
    }
}
