//! Quantum gate definitions for RQG
//!
//! Gantree: L1_Circuit → Gate
//!
//! Two views of the same gate set: [`GateKind`] is the fieldless tag used by
//! catalogs (fixed operand and parameter arity), [`Gate`] is an instance bound
//! to concrete qubits and angles.

use crate::error::{CoreError, CoreResult};
use crate::register::{DEFAULT_CREG, DEFAULT_QREG};
use crate::types::{Angle, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Gate Kind
// ============================================================================

/// Gate kind with fixed operand and parameter arity
/// Gantree: GateKind // 게이트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard
    H,
    /// Pauli-X
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// sqrt(Z)
    S,
    /// S-dagger
    Sdg,
    /// Fourth root of Z
    T,
    /// T-dagger
    Tdg,
    /// sqrt(X)
    Sx,
    /// SX-dagger
    Sxdg,
    /// Identity
    Id,
    /// X-axis rotation
    Rx,
    /// Y-axis rotation
    Ry,
    /// Z-axis rotation
    Rz,
    /// Phase gate
    P,
    /// General single-qubit rotation U(θ, φ, λ)
    U,
    /// Controlled-NOT
    Cx,
    /// Controlled-Y
    Cy,
    /// Controlled-Z
    Cz,
    /// SWAP
    Swap,
    /// Controlled-Rx
    Crx,
    /// Controlled-Ry
    Cry,
    /// Controlled-Rz
    Crz,
    /// Toffoli
    Ccx,
    /// Fredkin
    Cswap,
    /// Reset to |0⟩
    Reset,
}

impl GateKind {
    /// Every kind, in declaration order
    pub const ALL: [GateKind; 26] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::Sdg,
        GateKind::T,
        GateKind::Tdg,
        GateKind::Sx,
        GateKind::Sxdg,
        GateKind::Id,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::P,
        GateKind::U,
        GateKind::Cx,
        GateKind::Cy,
        GateKind::Cz,
        GateKind::Swap,
        GateKind::Crx,
        GateKind::Cry,
        GateKind::Crz,
        GateKind::Ccx,
        GateKind::Cswap,
        GateKind::Reset,
    ];

    /// Number of qubit operands
    /// Gantree: num_qubits(&self) -> usize // 피연산자 수
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::Sdg
            | GateKind::T
            | GateKind::Tdg
            | GateKind::Sx
            | GateKind::Sxdg
            | GateKind::Id
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::P
            | GateKind::U
            | GateKind::Reset => 1,

            GateKind::Cx
            | GateKind::Cy
            | GateKind::Cz
            | GateKind::Swap
            | GateKind::Crx
            | GateKind::Cry
            | GateKind::Crz => 2,

            GateKind::Ccx | GateKind::Cswap => 3,
        }
    }

    /// Number of continuous angle parameters
    /// Gantree: num_params(&self) -> usize // 파라미터 수
    pub fn num_params(&self) -> usize {
        match self {
            GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::P
            | GateKind::Crx
            | GateKind::Cry
            | GateKind::Crz => 1,
            GateKind::U => 3,
            _ => 0,
        }
    }

    /// OpenQASM mnemonic
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::Sx => "sx",
            GateKind::Sxdg => "sxdg",
            GateKind::Id => "id",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::P => "p",
            GateKind::U => "u",
            GateKind::Cx => "cx",
            GateKind::Cy => "cy",
            GateKind::Cz => "cz",
            GateKind::Swap => "swap",
            GateKind::Crx => "crx",
            GateKind::Cry => "cry",
            GateKind::Crz => "crz",
            GateKind::Ccx => "ccx",
            GateKind::Cswap => "cswap",
            GateKind::Reset => "reset",
        }
    }

    /// Parse from mnemonic
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "cnot" => Some(GateKind::Cx),
            "toffoli" => Some(GateKind::Ccx),
            "fredkin" => Some(GateKind::Cswap),
            other => GateKind::ALL.iter().copied().find(|k| k.name() == other),
        }
    }

    /// Bind this kind to qubits and angles
    /// Gantree: instantiate(&self, qubits, params) -> Result<Gate> // 인스턴스 생성
    ///
    /// Fails when the operand or parameter count does not match the kind's
    /// arity, when a qubit repeats, or when an angle is not finite.
    pub fn instantiate(&self, qubits: &[QubitId], params: &[Angle]) -> CoreResult<Gate> {
        if qubits.len() != self.num_qubits() {
            return Err(CoreError::ArityMismatch {
                gate: self.name(),
                expected: self.num_qubits(),
                actual: qubits.len(),
            });
        }
        if params.len() != self.num_params() {
            return Err(CoreError::ParameterMismatch {
                gate: self.name(),
                expected: self.num_params(),
                actual: params.len(),
            });
        }
        if let Some(&bad) = params.iter().find(|a| !a.is_finite()) {
            return Err(CoreError::InvalidAngle(bad));
        }
        check_distinct(qubits)?;

        let q = qubits;
        let p = params;
        let gate = match self {
            GateKind::H => Gate::H(q[0]),
            GateKind::X => Gate::X(q[0]),
            GateKind::Y => Gate::Y(q[0]),
            GateKind::Z => Gate::Z(q[0]),
            GateKind::S => Gate::S(q[0]),
            GateKind::Sdg => Gate::Sdg(q[0]),
            GateKind::T => Gate::T(q[0]),
            GateKind::Tdg => Gate::Tdg(q[0]),
            GateKind::Sx => Gate::Sx(q[0]),
            GateKind::Sxdg => Gate::Sxdg(q[0]),
            GateKind::Id => Gate::Id(q[0]),
            GateKind::Rx => Gate::Rx(q[0], p[0]),
            GateKind::Ry => Gate::Ry(q[0], p[0]),
            GateKind::Rz => Gate::Rz(q[0], p[0]),
            GateKind::P => Gate::P(q[0], p[0]),
            GateKind::U => Gate::U(q[0], p[0], p[1], p[2]),
            GateKind::Cx => Gate::Cx(q[0], q[1]),
            GateKind::Cy => Gate::Cy(q[0], q[1]),
            GateKind::Cz => Gate::Cz(q[0], q[1]),
            GateKind::Swap => Gate::Swap(q[0], q[1]),
            GateKind::Crx => Gate::Crx(q[0], q[1], p[0]),
            GateKind::Cry => Gate::Cry(q[0], q[1], p[0]),
            GateKind::Crz => Gate::Crz(q[0], q[1], p[0]),
            GateKind::Ccx => Gate::Ccx(q[0], q[1], q[2]),
            GateKind::Cswap => Gate::Cswap(q[0], q[1], q[2]),
            GateKind::Reset => Gate::Reset(q[0]),
        };
        Ok(gate)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn check_distinct(qubits: &[QubitId]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(qubits.len());
    for &q in qubits {
        if !seen.insert(q) {
            return Err(CoreError::DuplicateQubit(q));
        }
    }
    Ok(())
}

// ============================================================================
// Gate Instance
// ============================================================================

/// Gate bound to concrete wires
/// Gantree: Gate // 게이트 enum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    // ========================================================================
    // Single-Qubit Gates (Non-Parameterized)
    // ========================================================================
    /// Hadamard gate
    H(QubitId),
    /// Pauli-X gate (NOT)
    X(QubitId),
    /// Pauli-Y gate
    Y(QubitId),
    /// Pauli-Z gate
    Z(QubitId),
    /// S gate (sqrt(Z))
    S(QubitId),
    /// S-dagger gate
    Sdg(QubitId),
    /// T gate (fourth root of Z)
    T(QubitId),
    /// T-dagger gate
    Tdg(QubitId),
    /// SX gate (sqrt(X))
    Sx(QubitId),
    /// SX-dagger gate
    Sxdg(QubitId),
    /// Identity gate
    Id(QubitId),

    // ========================================================================
    // Single-Qubit Parameterized Gates
    // ========================================================================
    /// Rotation around X-axis
    /// Gantree: Rx(QubitId, Angle) // X 회전
    Rx(QubitId, Angle),
    /// Rotation around Y-axis
    /// Gantree: Ry(QubitId, Angle) // Y 회전
    Ry(QubitId, Angle),
    /// Rotation around Z-axis
    /// Gantree: Rz(QubitId, Angle) // Z 회전
    Rz(QubitId, Angle),
    /// Phase gate P(λ) = diag(1, e^{iλ})
    P(QubitId, Angle),
    /// General single-qubit rotation U(θ, φ, λ)
    U(QubitId, Angle, Angle, Angle),

    // ========================================================================
    // Two-Qubit Gates
    // ========================================================================
    /// Controlled-NOT
    /// Gantree: Cx(QubitId, QubitId) // ctrl, tgt
    Cx(QubitId, QubitId),
    /// Controlled-Y
    Cy(QubitId, QubitId),
    /// Controlled-Z
    Cz(QubitId, QubitId),
    /// SWAP gate
    Swap(QubitId, QubitId),
    /// Controlled-Rx
    Crx(QubitId, QubitId, Angle),
    /// Controlled-Ry
    Cry(QubitId, QubitId, Angle),
    /// Controlled-Rz
    Crz(QubitId, QubitId, Angle),

    // ========================================================================
    // Three-Qubit Gates
    // ========================================================================
    /// Toffoli (CCX)
    Ccx(QubitId, QubitId, QubitId),
    /// Controlled-SWAP (Fredkin)
    Cswap(QubitId, QubitId, QubitId),

    // ========================================================================
    // Non-Unitary
    // ========================================================================
    /// Measure a qubit into a classical bit
    /// Gantree: Measure(QubitId, ClbitId) // 측정
    Measure(QubitId, ClbitId),
    /// Reset qubit to |0⟩
    Reset(QubitId),
}

impl Gate {
    // ========================================================================
    // Gate Properties
    // ========================================================================

    /// Get qubits involved in this gate
    /// Gantree: qubits(&self) -> Vec<QubitId> // 관련 큐비트
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(q)
            | Gate::X(q)
            | Gate::Y(q)
            | Gate::Z(q)
            | Gate::S(q)
            | Gate::Sdg(q)
            | Gate::T(q)
            | Gate::Tdg(q)
            | Gate::Sx(q)
            | Gate::Sxdg(q)
            | Gate::Id(q)
            | Gate::Rx(q, _)
            | Gate::Ry(q, _)
            | Gate::Rz(q, _)
            | Gate::P(q, _)
            | Gate::U(q, _, _, _)
            | Gate::Measure(q, _)
            | Gate::Reset(q) => vec![*q],

            Gate::Cx(c, t)
            | Gate::Cy(c, t)
            | Gate::Cz(c, t)
            | Gate::Swap(c, t)
            | Gate::Crx(c, t, _)
            | Gate::Cry(c, t, _)
            | Gate::Crz(c, t, _) => vec![*c, *t],

            Gate::Ccx(c1, c2, t) | Gate::Cswap(c1, c2, t) => vec![*c1, *c2, *t],
        }
    }

    /// Classical bit written by this gate, if any
    pub fn clbit(&self) -> Option<ClbitId> {
        match self {
            Gate::Measure(_, c) => Some(*c),
            _ => None,
        }
    }

    /// Angle parameters in declaration order
    pub fn params(&self) -> Vec<Angle> {
        match self {
            Gate::Rx(_, a)
            | Gate::Ry(_, a)
            | Gate::Rz(_, a)
            | Gate::P(_, a)
            | Gate::Crx(_, _, a)
            | Gate::Cry(_, _, a)
            | Gate::Crz(_, _, a) => vec![*a],
            Gate::U(_, theta, phi, lambda) => vec![*theta, *phi, *lambda],
            _ => vec![],
        }
    }

    /// Catalog kind of this gate; `None` for measurement
    /// Gantree: kind(&self) -> Option<GateKind> // 종류
    pub fn kind(&self) -> Option<GateKind> {
        let kind = match self {
            Gate::H(_) => GateKind::H,
            Gate::X(_) => GateKind::X,
            Gate::Y(_) => GateKind::Y,
            Gate::Z(_) => GateKind::Z,
            Gate::S(_) => GateKind::S,
            Gate::Sdg(_) => GateKind::Sdg,
            Gate::T(_) => GateKind::T,
            Gate::Tdg(_) => GateKind::Tdg,
            Gate::Sx(_) => GateKind::Sx,
            Gate::Sxdg(_) => GateKind::Sxdg,
            Gate::Id(_) => GateKind::Id,
            Gate::Rx(_, _) => GateKind::Rx,
            Gate::Ry(_, _) => GateKind::Ry,
            Gate::Rz(_, _) => GateKind::Rz,
            Gate::P(_, _) => GateKind::P,
            Gate::U(_, _, _, _) => GateKind::U,
            Gate::Cx(_, _) => GateKind::Cx,
            Gate::Cy(_, _) => GateKind::Cy,
            Gate::Cz(_, _) => GateKind::Cz,
            Gate::Swap(_, _) => GateKind::Swap,
            Gate::Crx(_, _, _) => GateKind::Crx,
            Gate::Cry(_, _, _) => GateKind::Cry,
            Gate::Crz(_, _, _) => GateKind::Crz,
            Gate::Ccx(_, _, _) => GateKind::Ccx,
            Gate::Cswap(_, _, _) => GateKind::Cswap,
            Gate::Reset(_) => GateKind::Reset,
            Gate::Measure(_, _) => return None,
        };
        Some(kind)
    }

    /// Check if gate is a single-qubit unitary
    /// Gantree: is_single_qubit(&self) -> bool // 1Q 판별
    pub fn is_single_qubit(&self) -> bool {
        !self.is_measurement() && !self.is_reset() && self.qubits().len() == 1
    }

    /// Check if gate is two-qubit
    /// Gantree: is_two_qubit(&self) -> bool // 2Q 판별
    pub fn is_two_qubit(&self) -> bool {
        self.qubits().len() == 2
    }

    /// Check if gate is three-qubit
    pub fn is_three_qubit(&self) -> bool {
        self.qubits().len() == 3
    }

    /// Check if gate is parameterized
    pub fn is_parameterized(&self) -> bool {
        !self.params().is_empty()
    }

    /// Check if gate is measurement
    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure(_, _))
    }

    /// Check if gate is reset
    pub fn is_reset(&self) -> bool {
        matches!(self, Gate::Reset(_))
    }

    /// Get gate name
    pub fn name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.name(),
            None => "measure",
        }
    }

    /// Convert to an OpenQASM 2.0 statement over registers `q` and `c`
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm(&self) -> String {
        self.to_qasm_with(DEFAULT_QREG, DEFAULT_CREG)
    }

    /// Convert to an OpenQASM 2.0 statement over the named registers
    pub fn to_qasm_with(&self, qreg: &str, creg: &str) -> String {
        if let Gate::Measure(q, c) = self {
            return format!("measure {}[{}] -> {}[{}];", qreg, q, creg, c);
        }

        let params = self.params();
        let operands: Vec<String> = self
            .qubits()
            .iter()
            .map(|q| format!("{}[{}]", qreg, q))
            .collect();
        if params.is_empty() {
            format!("{} {};", self.name(), operands.join(","))
        } else {
            let params: Vec<String> = params.iter().map(|a| a.to_string()).collect();
            format!(
                "{}({}) {};",
                self.name(),
                params.join(","),
                operands.join(",")
            )
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================
