//! Operation catalog
//!
//! Gantree: L2_Generator → OperationCatalog
//!
//! Immutable tables mapping an operand count to the gate kinds eligible for
//! a group of that size. Parameter counts come from [`GateKind::num_params`].

use crate::constants::MAX_SUPPORTED_OPERANDS;
use crate::error::{GenError, GenResult};
use rqg_core::GateKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Static Tables
// ============================================================================

/// Single-operand kinds of the standard catalog
pub const STANDARD_ONE_QUBIT: &[GateKind] = &[GateKind::Rx, GateKind::Ry, GateKind::Rz];

/// Two-operand kinds of the standard catalog
pub const STANDARD_TWO_QUBIT: &[GateKind] = &[GateKind::Cx];

/// Three-operand kinds of the standard catalog (none)
pub const STANDARD_THREE_QUBIT: &[GateKind] = &[];

/// Single-operand kinds of the extended catalog
pub const EXTENDED_ONE_QUBIT: &[GateKind] = &[
    GateKind::H,
    GateKind::X,
    GateKind::Y,
    GateKind::Z,
    GateKind::S,
    GateKind::Sdg,
    GateKind::T,
    GateKind::Tdg,
    GateKind::Sx,
    GateKind::Id,
    GateKind::Rx,
    GateKind::Ry,
    GateKind::Rz,
    GateKind::P,
    GateKind::U,
];

/// Two-operand kinds of the extended catalog
pub const EXTENDED_TWO_QUBIT: &[GateKind] = &[
    GateKind::Cx,
    GateKind::Cy,
    GateKind::Cz,
    GateKind::Swap,
    GateKind::Crx,
    GateKind::Cry,
    GateKind::Crz,
];

/// Three-operand kinds of the extended catalog
pub const EXTENDED_THREE_QUBIT: &[GateKind] = &[GateKind::Ccx, GateKind::Cswap];

// ============================================================================
// Catalog
// ============================================================================

/// Gate kinds bucketed by operand count
/// Gantree: OperationCatalog // 연산 카탈로그
///
/// Serialized as a flat kind list; decoding re-buckets it through
/// [`OperationCatalog::from_kinds`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GateKind>", into = "Vec<GateKind>")]
pub struct OperationCatalog {
    /// `buckets[n - 1]` holds the kinds taking `n` operands
    buckets: [Vec<GateKind>; MAX_SUPPORTED_OPERANDS],
}

impl OperationCatalog {
    /// Rotations on one qubit, CX on two, nothing on three
    /// Gantree: standard(reset) -> Self // 기본 카탈로그
    pub fn standard(reset: bool) -> Self {
        Self::from_tables(
            STANDARD_ONE_QUBIT,
            STANDARD_TWO_QUBIT,
            STANDARD_THREE_QUBIT,
            reset,
        )
    }

    /// Broad standard-gate set including three-qubit gates
    pub fn extended(reset: bool) -> Self {
        Self::from_tables(
            EXTENDED_ONE_QUBIT,
            EXTENDED_TWO_QUBIT,
            EXTENDED_THREE_QUBIT,
            reset,
        )
    }

    fn from_tables(one: &[GateKind], two: &[GateKind], three: &[GateKind], reset: bool) -> Self {
        let catalog = Self {
            buckets: [one.to_vec(), two.to_vec(), three.to_vec()],
        };
        if reset {
            catalog.with_reset()
        } else {
            catalog
        }
    }

    /// Add `Reset` to the single-operand bucket unless already present
    /// Gantree: with_reset(self) -> Self // 리셋 추가
    pub fn with_reset(mut self) -> Self {
        if !self.buckets[0].contains(&GateKind::Reset) {
            self.buckets[0].push(GateKind::Reset);
        }
        self
    }

    /// Check if resets can be drawn
    pub fn has_reset(&self) -> bool {
        self.buckets[0].contains(&GateKind::Reset)
    }

    /// Build a catalog from an arbitrary kind list
    /// Gantree: from_kinds(kinds) -> Result<Self> // 사용자 카탈로그
    ///
    /// Kinds are placed by their operand count; duplicates are kept, which
    /// weights them more heavily in uniform selection.
    pub fn from_kinds(kinds: impl IntoIterator<Item = GateKind>) -> GenResult<Self> {
        let mut buckets: [Vec<GateKind>; MAX_SUPPORTED_OPERANDS] = Default::default();
        for kind in kinds {
            let n = kind.num_qubits();
            if n == 0 || n > MAX_SUPPORTED_OPERANDS {
                return Err(GenError::InvalidArgument(format!(
                    "gate '{}' takes {} operands; catalogs hold 1..={}",
                    kind, n, MAX_SUPPORTED_OPERANDS
                )));
            }
            buckets[n - 1].push(kind);
        }
        Ok(Self { buckets })
    }

    /// Kinds eligible for a group of `num_operands` qubits
    /// Gantree: bucket(&self, n) -> &[GateKind] // 버킷 조회
    ///
    /// Out-of-range counts yield an empty slice.
    pub fn bucket(&self, num_operands: usize) -> &[GateKind] {
        match num_operands {
            1..=MAX_SUPPORTED_OPERANDS => &self.buckets[num_operands - 1],
            _ => &[],
        }
    }

    /// Parameter count of a kind
    pub fn num_params(&self, kind: GateKind) -> usize {
        kind.num_params()
    }

    /// Whether the bucket for `num_operands` is non-empty
    pub fn supports(&self, num_operands: usize) -> bool {
        !self.bucket(num_operands).is_empty()
    }

    /// Total number of entries over all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Check if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<Vec<GateKind>> for OperationCatalog {
    type Error = GenError;

    fn try_from(kinds: Vec<GateKind>) -> GenResult<Self> {
        Self::from_kinds(kinds)
    }
}

impl From<OperationCatalog> for Vec<GateKind> {
    fn from(catalog: OperationCatalog) -> Self {
        catalog.buckets.into_iter().flatten().collect()
    }
}

impl Default for OperationCatalog {
    fn default() -> Self {
        Self::standard(false)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_buckets() {
        let catalog = OperationCatalog::standard(false);
        assert_eq!(
            catalog.bucket(1),
            &[GateKind::Rx, GateKind::Ry, GateKind::Rz]
        );
        assert_eq!(catalog.bucket(2), &[GateKind::Cx]);
        assert!(catalog.bucket(3).is_empty());
        assert!(!catalog.supports(3));
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_standard_with_reset() {
        let catalog = OperationCatalog::standard(true);
        assert_eq!(catalog.bucket(1).len(), 4);
        assert_eq!(catalog.bucket(1).last(), Some(&GateKind::Reset));
        assert_eq!(catalog.num_params(GateKind::Reset), 0);
    }

    #[test]
    fn test_with_reset_idempotent() {
        let catalog = OperationCatalog::standard(true).with_reset();
        assert_eq!(catalog.bucket(1).len(), 4);
        assert!(catalog.has_reset());
        assert!(!OperationCatalog::standard(false).has_reset());
    }

    #[test]
    fn test_parameter_table() {
        let catalog = OperationCatalog::standard(false);
        for kind in catalog.bucket(1) {
            assert_eq!(catalog.num_params(*kind), 1);
        }
        assert_eq!(catalog.num_params(GateKind::Cx), 0);
    }

    #[test]
    fn test_extended_arity_consistent() {
        let catalog = OperationCatalog::extended(true);
        for n in 1..=3 {
            assert!(catalog.supports(n));
            for kind in catalog.bucket(n) {
                assert_eq!(kind.num_qubits(), n);
            }
        }
    }

    #[test]
    fn test_from_kinds() {
        let catalog =
            OperationCatalog::from_kinds([GateKind::H, GateKind::Cz, GateKind::Ccx, GateKind::H])
                .unwrap();
        assert_eq!(catalog.bucket(1), &[GateKind::H, GateKind::H]);
        assert_eq!(catalog.bucket(2), &[GateKind::Cz]);
        assert_eq!(catalog.bucket(3), &[GateKind::Ccx]);
    }

    #[test]
    fn test_out_of_range_bucket() {
        let catalog = OperationCatalog::default();
        assert!(catalog.bucket(0).is_empty());
        assert!(catalog.bucket(4).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = OperationCatalog::from_kinds(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_json_rebuckets_kinds() {
        let catalog: OperationCatalog = serde_json::from_str(r#"["Cx", "H", "Ccx"]"#).unwrap();
        assert_eq!(catalog.bucket(1), &[GateKind::H]);
        assert_eq!(catalog.bucket(2), &[GateKind::Cx]);
        assert_eq!(catalog.bucket(3), &[GateKind::Ccx]);

        let json = serde_json::to_string(&OperationCatalog::extended(true)).unwrap();
        let parsed: OperationCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, OperationCatalog::extended(true));
    }

    #[test]
    fn test_json_rejects_bucketed_form() {
        // Explicit buckets could place a kind under the wrong operand count
        let bucketed = r#"{"buckets": [["Cx"], [], []]}"#;
        assert!(serde_json::from_str::<OperationCatalog>(bucketed).is_err());
        assert!(serde_json::from_str::<OperationCatalog>(r#"["Nope"]"#).is_err());
    }
}
