//! # neuronet_core
//!
//! A single formal neuron: a weighted summation of input signals passed
//! through an activation function chosen at construction time.
//!
//! The neuron is a primitive for later composition into layers. It owns its
//! weights and the current input vector; callers write signals and ask for the
//! output with a per-call parameter (a coefficient for most activations, a
//! threshold for [`ActivationKind::Threshold`]).
//!
//! ```
//! use neuronet_core::{ActivationKind, Neuron};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut neuron = Neuron::with_rng(2, ActivationKind::Sigmoid, &mut rng).unwrap();
//! neuron.set_signals(&[1.0, -1.0]).unwrap();
//! let out = neuron.compute_output(1.0);
//! assert!(out > 0.0 && out < 1.0);
//! ```

pub mod activation;
pub mod config;
pub mod error;
pub mod neuron;

pub use activation::ActivationKind;
pub use config::NeuronConfig;
pub use error::{NeuronError, Result};
pub use neuron::Neuron;
