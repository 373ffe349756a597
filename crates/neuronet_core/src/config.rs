use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Args;

use crate::activation::ActivationKind;
use crate::error::Result;

/// Construction parameters for a [`crate::Neuron`] as they arrive from a
/// config file or the command line.
///
/// `activation` stays a string until [`NeuronConfig::activation_kind`] so that
/// an unknown name surfaces as `UnsupportedActivationKind` rather than a
/// generic deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Args))]
pub struct NeuronConfig {
    /// Number of input signals (and weights)
    #[serde(default = "default_signals_count")]
    #[cfg_attr(feature = "cli", arg(long, global = true, default_value_t = 3))]
    pub signals_count: usize,

    /// Activation function (linear, sigmoid, threshold, hyperbolic_tangent)
    #[serde(default = "default_activation")]
    #[cfg_attr(feature = "cli", arg(long, global = true, default_value = "sigmoid"))]
    pub activation: String,

    /// Activation parameter: coefficient, or threshold for `threshold`
    #[serde(default = "default_parameter")]
    #[cfg_attr(
        feature = "cli",
        arg(
            long,
            global = true,
            default_value_t = 1.0,
            allow_hyphen_values = true
        )
    )]
    pub parameter: f64,

    /// Seed for deterministic weight initialization
    #[serde(default)]
    #[cfg_attr(feature = "cli", arg(long, global = true))]
    pub seed: Option<u64>,
}

fn default_signals_count() -> usize {
    3
}
fn default_activation() -> String {
    ActivationKind::Sigmoid.name().to_string()
}
fn default_parameter() -> f64 {
    1.0
}

impl Default for NeuronConfig {
    fn default() -> Self {
        Self {
            signals_count: default_signals_count(),
            activation: default_activation(),
            parameter: default_parameter(),
            seed: None,
        }
    }
}

impl NeuronConfig {
    /// Resolve the textual activation name.
    pub fn activation_kind(&self) -> Result<ActivationKind> {
        self.activation.parse()
    }
}
