//! Quantum and classical registers
//!
//! Gantree: L1_Circuit → Register

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default quantum register name
pub const DEFAULT_QREG: &str = "q";

/// Default classical register name
pub const DEFAULT_CREG: &str = "c";

/// Serialized register, checked through the `new` constructors on load
#[derive(Deserialize)]
struct RegisterRecord {
    name: String,
    size: usize,
}

impl TryFrom<RegisterRecord> for QuantumRegister {
    type Error = CoreError;

    fn try_from(record: RegisterRecord) -> CoreResult<Self> {
        Self::new(record.name, record.size)
    }
}

impl TryFrom<RegisterRecord> for ClassicalRegister {
    type Error = CoreError;

    fn try_from(record: RegisterRecord) -> CoreResult<Self> {
        Self::new(record.name, record.size)
    }
}

/// Named block of qubits
/// Gantree: QuantumRegister // 양자 레지스터
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegisterRecord")]
pub struct QuantumRegister {
    name: String,
    size: usize,
}

impl QuantumRegister {
    /// Create a register; fails on zero size
    pub fn new(name: impl Into<String>, size: usize) -> CoreResult<Self> {
        let name = name.into();
        if size == 0 {
            return Err(CoreError::EmptyRegister(name));
        }
        Ok(Self { name, size })
    }

    /// Register name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of qubits
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "qreg {}[{}]", self.name, self.size)
    }
}

/// Named block of classical bits
/// Gantree: ClassicalRegister // 고전 레지스터
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RegisterRecord")]
pub struct ClassicalRegister {
    name: String,
    size: usize,
}

impl ClassicalRegister {
    /// Create a register; fails on zero size
    pub fn new(name: impl Into<String>, size: usize) -> CoreResult<Self> {
        let name = name.into();
        if size == 0 {
            return Err(CoreError::EmptyRegister(name));
        }
        Ok(Self { name, size })
    }

    /// Register name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of classical bits
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for ClassicalRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creg {}[{}]", self.name, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_new() {
        let qr = QuantumRegister::new(DEFAULT_QREG, 4).unwrap();
        assert_eq!(qr.name(), "q");
        assert_eq!(qr.size(), 4);
        assert_eq!(qr.to_string(), "qreg q[4]");

        let cr = ClassicalRegister::new(DEFAULT_CREG, 2).unwrap();
        assert_eq!(cr.to_string(), "creg c[2]");
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            QuantumRegister::new("q", 0),
            Err(CoreError::EmptyRegister("q".into()))
        );
        assert!(ClassicalRegister::new("c", 0).is_err());
    }

    #[test]
    fn test_deserialize_checks_size() {
        let ok: ClassicalRegister = serde_json::from_str(r#"{"name":"c","size":3}"#).unwrap();
        assert_eq!(ok.size(), 3);

        let err = serde_json::from_str::<QuantumRegister>(r#"{"name":"q","size":0}"#);
        assert!(err.is_err());
    }
}
