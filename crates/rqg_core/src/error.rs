//! Error types for RQG circuit construction
//!
//! Gantree: L0_Foundation → Errors
//!
//! Failures raised while building registers, gates, and circuits.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Circuit construction error
/// Gantree: CoreError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    // ========================================================================
    // Register Errors
    // ========================================================================
    /// Register declared with zero bits
    /// Gantree: EmptyRegister(String) // 빈 레지스터
    #[error("Register '{0}' must contain at least one bit")]
    EmptyRegister(String),

    /// Circuit already owns a register of this kind
    #[error("Circuit already has register '{0}'")]
    DuplicateRegister(String),

    /// Condition or measurement references a register the circuit lacks
    #[error("Unknown classical register '{0}'")]
    UnknownRegister(String),

    // ========================================================================
    // Operand Errors
    // ========================================================================
    /// Qubit index outside the quantum register
    /// Gantree: QubitOutOfRange{{q,n}} // 큐비트 범위
    #[error("Qubit {qubit} out of range: circuit has {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Classical bit index outside the classical register
    #[error("Classical bit {clbit} out of range: circuit has {num_clbits} classical bits")]
    ClbitOutOfRange { clbit: usize, num_clbits: usize },

    /// Same qubit bound twice in one gate
    #[error("Qubit {0} used more than once in a single gate")]
    DuplicateQubit(usize),

    /// Wrong number of qubit operands for a gate kind
    #[error("Gate '{gate}' takes {expected} qubits, got {actual}")]
    ArityMismatch {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Measurement qubit and bit lists differ in length
    #[error("Cannot measure {qubits} qubits into {clbits} classical bits")]
    MeasureMismatch { qubits: usize, clbits: usize },

    // ========================================================================
    // Parameter Errors
    // ========================================================================
    /// Wrong number of angle parameters for a gate kind
    #[error("Gate '{gate}' takes {expected} parameters, got {actual}")]
    ParameterMismatch {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Non-finite angle
    #[error("Invalid angle {0}: must be finite")]
    InvalidAngle(f64),

    /// Condition value does not fit the register width
    #[error("Condition value {value} does not fit in {width} classical bits")]
    ConditionOutOfRange { value: u64, width: usize },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for circuit construction
/// Gantree: CoreResult<T> // type alias
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl CoreError {
    /// Check if error concerns register declaration or lookup
    pub fn is_register_error(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyRegister(_)
                | CoreError::DuplicateRegister(_)
                | CoreError::UnknownRegister(_)
        )
    }

    /// Check if error concerns how a gate was bound to wires
    pub fn is_operand_error(&self) -> bool {
        matches!(
            self,
            CoreError::QubitOutOfRange { .. }
                | CoreError::ClbitOutOfRange { .. }
                | CoreError::DuplicateQubit(_)
                | CoreError::ArityMismatch { .. }
                | CoreError::MeasureMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::QubitOutOfRange {
            qubit: 10,
            num_qubits: 7,
        };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_error_classification() {
        assert!(CoreError::EmptyRegister("q".into()).is_register_error());
        assert!(!CoreError::EmptyRegister("q".into()).is_operand_error());

        assert!(CoreError::DuplicateQubit(1).is_operand_error());
        assert!(!CoreError::InvalidAngle(f64::NAN).is_register_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CoreError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CoreError::JsonError(_)));
    }
}
