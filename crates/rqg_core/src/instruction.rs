//! Circuit instructions and classical conditions
//!
//! Gantree: L1_Circuit → Instruction
//!
//! An [`Instruction`] is a [`Gate`] plus an optional [`Condition`]. The
//! condition is fixed when the instruction is built; instructions are never
//! mutated after they are appended to a circuit.

use crate::gate::Gate;
use crate::register::{DEFAULT_CREG, DEFAULT_QREG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classical condition `register == value`
/// Gantree: Condition // 고전 조건
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    /// Name of the classical register compared
    pub register: String,
    /// Integer value the register must equal
    pub value: u64,
}

impl Condition {
    /// Create a condition on a named register
    pub fn new(register: impl Into<String>, value: u64) -> Self {
        Self {
            register: register.into(),
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if({}=={})", self.register, self.value)
    }
}

/// Gate with optional classical condition
/// Gantree: Instruction // 명령어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    gate: Gate,
    condition: Option<Condition>,
}

impl Instruction {
    /// Unconditioned instruction
    pub fn new(gate: Gate) -> Self {
        Self {
            gate,
            condition: None,
        }
    }

    /// Instruction executed only when `condition` holds
    pub fn conditioned(gate: Gate, condition: Condition) -> Self {
        Self {
            gate,
            condition: Some(condition),
        }
    }

    /// Underlying gate
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Classical condition, if any
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Check if the instruction carries a condition
    pub fn is_conditioned(&self) -> bool {
        self.condition.is_some()
    }

    /// Convert to an OpenQASM 2.0 statement over registers `q` and `c`
    pub fn to_qasm(&self) -> String {
        self.to_qasm_with(DEFAULT_QREG, DEFAULT_CREG)
    }

    /// Convert to an OpenQASM 2.0 statement over the named registers
    pub fn to_qasm_with(&self, qreg: &str, creg: &str) -> String {
        let body = self.gate.to_qasm_with(qreg, creg);
        match &self.condition {
            Some(cond) => format!("{} {}", cond, body),
            None => body,
        }
    }
}

impl From<Gate> for Instruction {
    fn from(gate: Gate) -> Self {
        Instruction::new(gate)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconditioned() {
        let inst = Instruction::from(Gate::H(0));
        assert!(!inst.is_conditioned());
        assert_eq!(inst.to_qasm(), "h q[0];");
    }

    #[test]
    fn test_conditioned_qasm() {
        let inst = Instruction::conditioned(Gate::Rz(1, 0.5), Condition::new("c", 3));
        assert!(inst.is_conditioned());
        assert_eq!(inst.condition().unwrap().value, 3);
        assert_eq!(inst.to_qasm(), "if(c==3) rz(0.5) q[1];");
    }
}
