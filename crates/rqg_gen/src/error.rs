//! Error types for random circuit generation
//!
//! Gantree: L0_Foundation → Errors

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use rqg_core::CoreError;
use thiserror::Error;

/// Generation error
/// Gantree: GenError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// Malformed request, rejected before any generation work
    /// Gantree: InvalidArgument(String) // 잘못된 요청
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Catalog has no gate kinds for the drawn operand count
    /// Gantree: CatalogExhausted{{n}} // 빈 버킷
    #[error("Operation catalog has no gates taking {num_operands} operands")]
    CatalogExhausted { num_operands: usize },

    /// Failure raised while building registers, gates, or measurements
    #[error(transparent)]
    Circuit(#[from] CoreError),
}

/// Result type alias for generation
/// Gantree: GenResult<T> // type alias
pub type GenResult<T> = Result<T, GenError>;

/// Request (de)serialization failures reject the request itself
impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::InvalidArgument(format!("request JSON: {}", err))
    }
}

impl GenError {
    /// Check if the request itself was rejected
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GenError::InvalidArgument(_))
    }

    /// Check if the error came from circuit construction
    pub fn is_circuit_error(&self) -> bool {
        matches!(self, GenError::Circuit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_exhausted_display() {
        let err = GenError::CatalogExhausted { num_operands: 3 };
        assert!(err.to_string().contains('3'));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_core_error_passthrough() {
        let err: GenError = CoreError::DuplicateQubit(4).into();
        assert!(err.is_circuit_error());
        assert_eq!(err.to_string(), CoreError::DuplicateQubit(4).to_string());
    }

    #[test]
    fn test_json_error_is_invalid_argument() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = GenError::from(json_err);
        assert!(err.is_invalid_argument());
        assert!(!err.is_circuit_error());
    }
}
