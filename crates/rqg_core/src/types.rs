//! Core types for RQG
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Fundamental type aliases shared by the circuit model and the generator.

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed)
/// Gantree: QubitId // pub type QubitId = usize
pub type QubitId = usize;

/// Classical bit identifier (0-indexed)
/// Gantree: ClbitId // pub type ClbitId = usize
pub type ClbitId = usize;

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Maximum width for which `2^width` fits in a `u64` condition value.
pub const MAX_CONDITION_WIDTH: usize = 64;

/// Exclusive upper bound of a condition value on a register of `width` bits.
///
/// Returns `None` when every `u64` is representable (`width >= 64`).
pub fn condition_bound(width: usize) -> Option<u64> {
    if width >= MAX_CONDITION_WIDTH {
        None
    } else {
        Some(1u64 << width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_bound() {
        assert_eq!(condition_bound(0), Some(1));
        assert_eq!(condition_bound(3), Some(8));
        assert_eq!(condition_bound(63), Some(1u64 << 63));
        assert_eq!(condition_bound(64), None);
        assert_eq!(condition_bound(100), None);
    }
}
