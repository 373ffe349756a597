use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::activation::ActivationKind;
use crate::config::NeuronConfig;
use crate::error::{NeuronError, Result};

/// Integer draw bounds for weight initialization; the draw is divided by
/// `WEIGHT_SCALE`, giving weights in [-0.1, 0.1).
const WEIGHT_DRAW_MIN: i32 = -1000;
const WEIGHT_DRAW_MAX: i32 = 1000;
const WEIGHT_SCALE: f64 = 10_000.0;

/// A formal neuron: weighted sum of input signals through an activation.
///
/// `weights` and `signals_in` always have the same length, fixed at
/// construction. The activation never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    signals_in: Vec<f64>,
    activation: ActivationKind,
}

impl Neuron {
    /// Create a neuron with random weights from the thread-local generator.
    pub fn new(signals_count: usize, activation: ActivationKind) -> Result<Self> {
        Self::with_rng(signals_count, activation, &mut rand::thread_rng())
    }

    /// Create a neuron drawing its weights from `rng`.
    ///
    /// Each weight is an integer in [-1000, 1000) divided by 10000. Signals
    /// start at zero.
    pub fn with_rng<R: Rng + ?Sized>(
        signals_count: usize,
        activation: ActivationKind,
        rng: &mut R,
    ) -> Result<Self> {
        if signals_count == 0 {
            return Err(NeuronError::InvalidDimension {
                expected: 1,
                actual: 0,
            });
        }

        let weights = (0..signals_count)
            .map(|_| f64::from(rng.gen_range(WEIGHT_DRAW_MIN..WEIGHT_DRAW_MAX)) / WEIGHT_SCALE)
            .collect();

        debug!("neuron created: {} inputs, {} activation", signals_count, activation);

        Ok(Neuron {
            weights,
            signals_in: vec![0.0; signals_count],
            activation,
        })
    }

    /// Create a neuron with explicit weights, e.g. restored from a trainer.
    pub fn from_weights(weights: Vec<f64>, activation: ActivationKind) -> Result<Self> {
        if weights.is_empty() {
            return Err(NeuronError::InvalidDimension {
                expected: 1,
                actual: 0,
            });
        }
        let signals_in = vec![0.0; weights.len()];
        Ok(Neuron {
            weights,
            signals_in,
            activation,
        })
    }

    /// Build from untrusted configuration.
    ///
    /// The activation name is resolved first, so an unknown name fails before
    /// anything is allocated. A configured seed makes the weights reproducible.
    pub fn from_config(config: &NeuronConfig) -> Result<Self> {
        let activation = config.activation_kind()?;
        match config.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::with_rng(config.signals_count, activation, &mut rng)
            }
            None => Self::new(config.signals_count, activation),
        }
    }

    pub fn signals_count(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> ActivationKind {
        self.activation
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// In-place access to the weights. The slice cannot change length, so
    /// the weight/signal length invariant holds.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    pub fn signals_in(&self) -> &[f64] {
        &self.signals_in
    }

    /// Write a single input signal.
    pub fn set_signal(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.signals_in.len();
        match self.signals_in.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(NeuronError::SignalIndexOutOfRange { index, len }),
        }
    }

    /// Replace the whole input vector. On a length mismatch nothing is written.
    pub fn set_signals(&mut self, signals: &[f64]) -> Result<()> {
        if signals.len() != self.signals_in.len() {
            return Err(NeuronError::InvalidDimension {
                expected: self.signals_in.len(),
                actual: signals.len(),
            });
        }
        self.signals_in.copy_from_slice(signals);
        trace!("signals replaced: {:?}", self.signals_in);
        Ok(())
    }

    pub fn reset_signals(&mut self) {
        self.signals_in.fill(0.0);
    }

    /// Σ signals_in[i] * weights[i] over every input.
    pub fn weighted_sum(&self) -> f64 {
        self.signals_in
            .iter()
            .zip(&self.weights)
            .map(|(s, w)| s * w)
            .sum()
    }

    /// Output of the activation for the current signals.
    ///
    /// `param` is a coefficient for linear, sigmoid and hyperbolic tangent,
    /// and the strict threshold for threshold. Pure: repeated calls with the
    /// same state and parameter return the same value. Hyperbolic tangent
    /// returns NaN when `e^(param * sum)` overflows.
    pub fn compute_output(&self, param: f64) -> f64 {
        self.activation.apply(self.weighted_sum(), param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_signal_count_is_rejected() {
        assert_eq!(
            Neuron::new(0, ActivationKind::Linear),
            Err(NeuronError::InvalidDimension {
                expected: 1,
                actual: 0
            })
        );
        assert!(Neuron::from_weights(Vec::new(), ActivationKind::Linear).is_err());
    }

    #[test]
    fn test_weighted_sum_over_all_inputs() {
        let mut n = Neuron::from_weights(vec![0.5, -0.25, 2.0], ActivationKind::Linear).unwrap();
        n.set_signals(&[2.0, 4.0, 0.5]).unwrap();
        assert!((n.weighted_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_signal_bounds() {
        let mut n = Neuron::from_weights(vec![1.0, 1.0], ActivationKind::Linear).unwrap();
        n.set_signal(1, 3.0).unwrap();
        assert_eq!(n.signals_in(), &[0.0, 3.0]);
        assert_eq!(
            n.set_signal(2, 1.0),
            Err(NeuronError::SignalIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_set_signals_length_mismatch_leaves_state() {
        let mut n = Neuron::from_weights(vec![1.0, 1.0], ActivationKind::Linear).unwrap();
        n.set_signals(&[1.0, 2.0]).unwrap();
        assert_eq!(
            n.set_signals(&[1.0, 2.0, 3.0]),
            Err(NeuronError::InvalidDimension {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(n.signals_in(), &[1.0, 2.0]);

        n.reset_signals();
        assert_eq!(n.signals_in(), &[0.0, 0.0]);
    }

    #[test]
    fn test_weights_mut_changes_output() {
        let mut n = Neuron::from_weights(vec![0.0, 0.0], ActivationKind::Linear).unwrap();
        n.set_signals(&[1.0, 1.0]).unwrap();
        assert_eq!(n.compute_output(1.0), 0.0);
        n.weights_mut()[0] = 0.75;
        assert!((n.compute_output(2.0) - 1.5).abs() < 1e-12);
        assert_eq!(n.signals_count(), 2);
    }
}
