use thiserror::Error;

/// Errors raised while building a neuron or writing its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NeuronError {
    /// The activation name did not match any known variant.
    #[error("unsupported activation kind: {0:?}")]
    UnsupportedActivationKind(String),

    /// A signal count of zero, or a vector whose length differs from the
    /// neuron's weight count.
    #[error("invalid dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("signal index {index} out of range for {len} inputs")]
    SignalIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, NeuronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = NeuronError::UnsupportedActivationKind("relu".into());
        assert_eq!(err.to_string(), "unsupported activation kind: \"relu\"");

        let err = NeuronError::InvalidDimension {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "invalid dimension: expected 3, got 2");

        let err = NeuronError::SignalIndexOutOfRange { index: 4, len: 4 };
        assert_eq!(err.to_string(), "signal index 4 out of range for 4 inputs");
    }
}
