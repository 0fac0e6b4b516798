//! # RQG Gen
//!
//! Seeded random quantum circuit generation for compiler, transpiler, and
//! simulator test fixtures.
//!
//! ## Gantree Architecture
//!
//! ```text
//! rqg_gen // L2: Generator
//!     Constants // 생성 상수
//!     Errors // 에러 타입
//!     GenerationRequest // 생성 요청
//!     OperationCatalog // 연산 카탈로그
//!     SamplingSource // 샘플링 소스
//!     RandomCircuitGenerator // 레이어 구성 + 측정
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rqg_gen::prelude::*;
//!
//! let request = GenerationRequest::new(5, 4)
//!     .with_measure(true)
//!     .with_seed(42);
//!
//! let circuit = random_circuit(&request).unwrap();
//! assert_eq!(circuit.num_qubits(), 5);
//! assert_eq!(circuit.num_clbits(), 5);
//! assert_eq!(circuit.count_measurements(), 5);
//! ```
//!
//! ## Reproducibility
//!
//! ```rust
//! use rqg_gen::prelude::*;
//!
//! let request = GenerationRequest::new(4, 3).with_conditional(true).with_seed(7);
//! let a = random_circuit(&request).unwrap();
//! let b = random_circuit(&request).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Extended Catalog
//!
//! ```rust
//! use rqg_gen::prelude::*;
//!
//! let request = GenerationRequest::new(6, 5).with_max_operands(3).with_seed(1);
//! let circuit = RandomCircuitGenerator::extended().generate(&request).unwrap();
//! println!("{}", circuit.to_qasm());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Generation constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Generation request (Gantree: L2_Generator → GenerationRequest)
pub mod config;

/// Operation catalog (Gantree: L2_Generator → OperationCatalog)
pub mod catalog;

/// Sampling source (Gantree: L2_Generator → SamplingSource)
pub mod sampling;

/// Generator (Gantree: L2_Generator → RandomCircuitGenerator)
pub mod generator;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::OperationCatalog;
pub use config::GenerationRequest;
pub use error::{GenError, GenResult};
pub use generator::{CatalogChoice, GeneratedCircuit, RandomCircuitGenerator};
pub use sampling::SamplingSource;

use rqg_core::Circuit;

/// Generate a random circuit over the standard catalog
/// Gantree: random_circuit(request) -> Result<Circuit> // 진입점
pub fn random_circuit(request: &GenerationRequest) -> GenResult<Circuit> {
    RandomCircuitGenerator::new().generate(request)
}

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use rqg_gen::prelude::*;
    //! ```

    pub use crate::catalog::OperationCatalog;
    pub use crate::config::GenerationRequest;
    pub use crate::error::{GenError, GenResult};
    pub use crate::generator::{CatalogChoice, GeneratedCircuit, RandomCircuitGenerator};
    pub use crate::random_circuit;
    pub use crate::sampling::SamplingSource;
    pub use rqg_core::prelude::*;
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Integration Tests
// ============================================================================
