//! Constants for RQG generation
//!
//! Gantree: L0_Foundation → Constants

use std::f64::consts::TAU;

/// Default cap on operands per operation
/// Gantree: DEFAULT_MAX_OPERANDS: usize = 2
pub const DEFAULT_MAX_OPERANDS: usize = 2;

/// Largest operand count any catalog bucket supports
pub const MAX_SUPPORTED_OPERANDS: usize = 3;

/// An operation is conditioned when a draw from `0..CONDITION_ODDS` is zero
/// Gantree: CONDITION_ODDS: u64 = 10 // 1/10 확률
pub const CONDITION_ODDS: u64 = 10;

/// Exclusive upper bound for seeds drawn from system entropy (`i32::MAX`)
pub const SEED_UPPER_BOUND: u64 = i32::MAX as u64;

/// Widest register a condition value can address
pub const MAX_CONDITIONAL_QUBITS: usize = rqg_core::types::MAX_CONDITION_WIDTH;

/// Exclusive upper bound of sampled rotation angles
pub const ANGLE_UPPER_BOUND: f64 = TAU;
