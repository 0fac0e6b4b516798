//! # RQG Core
//!
//! Gates, registers, and the circuit container used by the random circuit
//! generator.
//!
//! ## Gantree Architecture
//!
//! ```text
//! rqg_core // L0+L1: Foundation + Circuit
//!     L0_Foundation // 기반 타입/에러
//!         CoreTypes // 핵심 타입
//!         Errors // 에러 타입
//!     L1_Circuit // 회로 구조
//!         Gate // 게이트 종류 + 인스턴스
//!         Register // 양자/고전 레지스터
//!         Instruction // 조건부 명령어
//!         Circuit // 회로 구조체
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rqg_core::prelude::*;
//!
//! let mut circuit = Circuit::with_qubits(2).unwrap();
//! circuit
//!     .add_classical_register(ClassicalRegister::new("c", 2).unwrap())
//!     .unwrap();
//!
//! let rx = GateKind::Rx.instantiate(&[0], &[0.5]).unwrap();
//! circuit.add_gate(rx).unwrap();
//! circuit
//!     .append(Instruction::conditioned(Gate::Cx(0, 1), Condition::new("c", 1)))
//!     .unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.count_measurements(), 2);
//! println!("{}", circuit.to_qasm());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Quantum gates (Gantree: L1_Circuit → Gate)
pub mod gate;

/// Registers (Gantree: L1_Circuit → Register)
pub mod register;

/// Instructions and conditions (Gantree: L1_Circuit → Instruction)
pub mod instruction;

/// Circuit structure (Gantree: L1_Circuit → Circuit)
pub mod circuit;

// ============================================================================
// Re-exports
// ============================================================================

pub use circuit::Circuit;
pub use error::{CoreError, CoreResult};
pub use gate::{Gate, GateKind};
pub use instruction::{Condition, Instruction};
pub use register::{ClassicalRegister, QuantumRegister, DEFAULT_CREG, DEFAULT_QREG};
pub use types::{Angle, ClbitId, QubitId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use rqg_core::prelude::*;
    //! ```

    pub use crate::circuit::Circuit;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::gate::{Gate, GateKind};
    pub use crate::instruction::{Condition, Instruction};
    pub use crate::register::{ClassicalRegister, QuantumRegister};
    pub use crate::types::{Angle, ClbitId, QubitId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
