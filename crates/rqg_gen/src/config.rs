//! Generation request
//!
//! Gantree: L2_Generator → GenerationRequest
//!
//! Width, depth, and mode flags for one generator call.

use crate::constants::{DEFAULT_MAX_OPERANDS, MAX_CONDITIONAL_QUBITS, MAX_SUPPORTED_OPERANDS};
use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Random circuit request
/// Gantree: GenerationRequest // 생성 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Number of quantum wires
    /// Gantree: num_qubits: usize // 큐비트 수
    pub num_qubits: usize,

    /// Number of layers
    /// Gantree: depth: usize // 레이어 수
    pub depth: usize,

    /// Measure every qubit at the end
    /// Gantree: measure: bool // 최종 측정
    pub measure: bool,

    /// Occasionally condition operations on the classical register
    /// Gantree: conditional: bool // 조건부 연산
    pub conditional: bool,

    /// Allow resets among single-qubit operations
    /// Gantree: reset: bool // 리셋 포함
    pub reset: bool,

    /// Explicit seed; drawn from system entropy when absent
    /// Gantree: seed: Option<u64> // 시드
    pub seed: Option<u64>,

    /// Largest operand group per operation (1..=3)
    #[serde(default = "default_max_operands")]
    pub max_operands: usize,
}

fn default_max_operands() -> usize {
    DEFAULT_MAX_OPERANDS
}

impl GenerationRequest {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Request with all flags off and no seed
    /// Gantree: new(n, depth) -> Self // 생성자
    pub fn new(num_qubits: usize, depth: usize) -> Self {
        Self {
            num_qubits,
            depth,
            measure: false,
            conditional: false,
            reset: false,
            seed: None,
            max_operands: DEFAULT_MAX_OPERANDS,
        }
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Enable/disable final measurement
    pub fn with_measure(mut self, enabled: bool) -> Self {
        self.measure = enabled;
        self
    }

    /// Enable/disable classical conditions
    pub fn with_conditional(mut self, enabled: bool) -> Self {
        self.conditional = enabled;
        self
    }

    /// Enable/disable resets
    pub fn with_reset(mut self, enabled: bool) -> Self {
        self.reset = enabled;
        self
    }

    /// Set explicit seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set operand cap
    pub fn with_max_operands(mut self, max_operands: usize) -> Self {
        self.max_operands = max_operands;
        self
    }

    // ========================================================================
    // Derived Properties
    // ========================================================================

    /// Whether the circuit needs classical wires
    pub fn needs_classical_register(&self) -> bool {
        self.measure || self.conditional
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate request
    /// Gantree: validate(&self) -> Result<()> // 검증
    pub fn validate(&self) -> GenResult<()> {
        if self.num_qubits == 0 {
            return Err(GenError::InvalidArgument(
                "num_qubits must be at least 1".into(),
            ));
        }

        if self.max_operands == 0 || self.max_operands > MAX_SUPPORTED_OPERANDS {
            return Err(GenError::InvalidArgument(format!(
                "max_operands must be in 1..={}, got {}",
                MAX_SUPPORTED_OPERANDS, self.max_operands
            )));
        }

        if self.conditional && self.num_qubits > MAX_CONDITIONAL_QUBITS {
            return Err(GenError::InvalidArgument(format!(
                "conditional circuits support at most {} qubits, got {}",
                MAX_CONDITIONAL_QUBITS, self.num_qubits
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize to JSON
    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GenerationRequest(qubits={}, depth={}, measure={}, conditional={}, reset={}, max_operands={}, seed=",
            self.num_qubits, self.depth, self.measure, self.conditional, self.reset, self.max_operands
        )?;
        match self.seed {
            Some(seed) => write!(f, "{})", seed),
            None => write!(f, "auto)"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
