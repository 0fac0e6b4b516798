//! Quantum circuit structure for RQG
//!
//! Gantree: L1_Circuit → Circuit
//!
//! The circuit owns one quantum register, at most one classical register,
//! and an append-only list of instructions. Every append is validated
//! against the registers before it is stored.

use crate::error::{CoreError, CoreResult};
use crate::gate::Gate;
use crate::instruction::{Condition, Instruction};
use crate::register::{ClassicalRegister, QuantumRegister, DEFAULT_CREG, DEFAULT_QREG};
use crate::types::{condition_bound, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Quantum circuit
/// Gantree: Circuit // 회로 구조체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRecord")]
pub struct Circuit {
    /// Quantum wires
    /// Gantree: qreg: QuantumRegister // 양자 레지스터
    qreg: QuantumRegister,

    /// Classical wires, present only when measurement or conditioning is used
    /// Gantree: creg: Option<ClassicalRegister> // 고전 레지스터
    creg: Option<ClassicalRegister>,

    /// Instruction sequence
    /// Gantree: instructions: Vec<Instruction> // 명령어 목록
    instructions: Vec<Instruction>,
}

/// Unvalidated serialized form; replayed through [`Circuit::append`] on load
#[derive(Deserialize)]
struct CircuitRecord {
    qreg: QuantumRegister,
    creg: Option<ClassicalRegister>,
    instructions: Vec<Instruction>,
}

impl TryFrom<CircuitRecord> for Circuit {
    type Error = CoreError;

    fn try_from(record: CircuitRecord) -> CoreResult<Self> {
        let mut circuit = Circuit::new(record.qreg);
        if let Some(creg) = record.creg {
            circuit.add_classical_register(creg)?;
        }
        for inst in record.instructions {
            circuit.append(inst)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty circuit over the given quantum register
    /// Gantree: new(qreg) -> Self // 생성자
    pub fn new(qreg: QuantumRegister) -> Self {
        Self {
            qreg,
            creg: None,
            instructions: Vec::new(),
        }
    }

    /// Create an empty circuit with a default-named register of `num_qubits`
    pub fn with_qubits(num_qubits: usize) -> CoreResult<Self> {
        Ok(Self::new(QuantumRegister::new(DEFAULT_QREG, num_qubits)?))
    }

    /// Attach the classical register
    /// Gantree: add_creg(&mut, ClassicalRegister) -> Result // 고전 레지스터 추가
    pub fn add_classical_register(&mut self, creg: ClassicalRegister) -> CoreResult<()> {
        if let Some(existing) = &self.creg {
            return Err(CoreError::DuplicateRegister(existing.name().to_string()));
        }
        self.creg = Some(creg);
        Ok(())
    }

    // ========================================================================
    // Basic Operations
    // ========================================================================

    /// Append an instruction after validating operands and condition
    /// Gantree: append(&mut, Instruction) -> Result // 명령어 추가
    pub fn append(&mut self, instruction: Instruction) -> CoreResult<()> {
        self.validate_gate(instruction.gate())?;
        if let Some(cond) = instruction.condition() {
            self.validate_condition(cond)?;
        }
        self.instructions.push(instruction);
        Ok(())
    }

    /// Append an unconditioned gate
    pub fn add_gate(&mut self, gate: Gate) -> CoreResult<()> {
        self.append(Instruction::new(gate))
    }

    /// Measure `qubits[i]` into `clbits[i]` for every `i`
    /// Gantree: measure(&mut, qubits, clbits) -> Result // 측정 추가
    ///
    /// All pairs are validated before any measurement is appended.
    pub fn measure(&mut self, qubits: &[QubitId], clbits: &[ClbitId]) -> CoreResult<()> {
        if qubits.len() != clbits.len() {
            return Err(CoreError::MeasureMismatch {
                qubits: qubits.len(),
                clbits: clbits.len(),
            });
        }
        let gates: Vec<Gate> = qubits
            .iter()
            .zip(clbits)
            .map(|(&q, &c)| Gate::Measure(q, c))
            .collect();
        for gate in &gates {
            self.validate_gate(gate)?;
        }
        self.instructions
            .extend(gates.into_iter().map(Instruction::new));
        Ok(())
    }

    /// Measure qubit `i` into classical bit `i` for every qubit
    pub fn measure_all(&mut self) -> CoreResult<()> {
        let wires: Vec<usize> = (0..self.num_qubits()).collect();
        self.measure(&wires, &wires)
    }

    /// Get number of qubits
    pub fn num_qubits(&self) -> usize {
        self.qreg.size()
    }

    /// Get number of classical bits
    pub fn num_clbits(&self) -> usize {
        self.creg.as_ref().map_or(0, ClassicalRegister::size)
    }

    /// Quantum register
    pub fn qreg(&self) -> &QuantumRegister {
        &self.qreg
    }

    /// Classical register, if declared
    pub fn creg(&self) -> Option<&ClassicalRegister> {
        self.creg.as_ref()
    }

    /// Get instructions
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterate the gates, ignoring conditions
    pub fn gates(&self) -> impl Iterator<Item = &Gate> + '_ {
        self.instructions.iter().map(Instruction::gate)
    }

    /// Check if circuit is empty
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    // ========================================================================
    // Circuit Analysis
    // ========================================================================

    /// Calculate circuit depth (longest path over qubit wires)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits()];

        for gate in self.gates() {
            let qubits = gate.qubits();
            let level = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for q in qubits {
                qubit_depths[q] = level;
            }
        }

        qubit_depths.into_iter().max().unwrap_or(0)
    }

    /// Get total instruction count
    /// Gantree: gate_count(&self) -> usize // 게이트 수
    pub fn gate_count(&self) -> usize {
        self.instructions.len()
    }

    /// Count single-qubit unitary gates
    pub fn count_1q(&self) -> usize {
        self.gates().filter(|g| g.is_single_qubit()).count()
    }

    /// Count two-qubit gates
    pub fn count_2q(&self) -> usize {
        self.gates().filter(|g| g.is_two_qubit()).count()
    }

    /// Count three-qubit gates
    pub fn count_3q(&self) -> usize {
        self.gates().filter(|g| g.is_three_qubit()).count()
    }

    /// Count measurement operations
    pub fn count_measurements(&self) -> usize {
        self.gates().filter(|g| g.is_measurement()).count()
    }

    /// Count reset operations
    pub fn count_resets(&self) -> usize {
        self.gates().filter(|g| g.is_reset()).count()
    }

    /// Count parameterized gates
    pub fn count_parameterized(&self) -> usize {
        self.gates().filter(|g| g.is_parameterized()).count()
    }

    /// Count instructions carrying a classical condition
    pub fn count_conditioned(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.is_conditioned())
            .count()
    }

    /// Get qubits used in the circuit
    pub fn used_qubits(&self) -> HashSet<QubitId> {
        self.gates().flat_map(Gate::qubits).collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn validate_gate(&self, gate: &Gate) -> CoreResult<()> {
        let qubits = gate.qubits();
        let mut seen = HashSet::with_capacity(qubits.len());
        for &qubit in &qubits {
            if qubit >= self.num_qubits() {
                return Err(CoreError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits(),
                });
            }
            if !seen.insert(qubit) {
                return Err(CoreError::DuplicateQubit(qubit));
            }
        }

        if let Some(clbit) = gate.clbit() {
            if clbit >= self.num_clbits() {
                return Err(CoreError::ClbitOutOfRange {
                    clbit,
                    num_clbits: self.num_clbits(),
                });
            }
        }
        Ok(())
    }

    fn validate_condition(&self, cond: &Condition) -> CoreResult<()> {
        let creg = match &self.creg {
            Some(creg) if creg.name() == cond.register => creg,
            _ => return Err(CoreError::UnknownRegister(cond.register.clone())),
        };
        if let Some(bound) = condition_bound(creg.size()) {
            if cond.value >= bound {
                return Err(CoreError::ConditionOutOfRange {
                    value: cond.value,
                    width: creg.size(),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Convert to OpenQASM 2.0 string
    /// Gantree: to_qasm(&self) -> String // QASM2 출력
    pub fn to_qasm(&self) -> String {
        let mut lines = vec![
            "OPENQASM 2.0;".to_string(),
            "include \"qelib1.inc\";".to_string(),
            String::new(),
            format!("{};", self.qreg),
        ];
        if let Some(creg) = &self.creg {
            lines.push(format!("{};", creg));
        }
        lines.push(String::new());

        let creg_name = self.creg.as_ref().map_or(DEFAULT_CREG, ClassicalRegister::name);
        for inst in &self.instructions {
            lines.push(inst.to_qasm_with(self.qreg.name(), creg_name));
        }

        lines.join("\n")
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON
    ///
    /// Every instruction is revalidated against the decoded registers.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} clbits, {} instructions)",
            self.num_qubits(),
            self.num_clbits(),
            self.instructions.len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q gates: {}", self.count_1q())?;
        writeln!(f, "  2Q gates: {}", self.count_2q())?;
        writeln!(f, "  Conditioned: {}", self.count_conditioned())?;
        writeln!(f, "  Measurements: {}", self.count_measurements())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn circuit_with_creg(n: usize) -> Circuit {
        let mut circuit = Circuit::with_qubits(n).unwrap();
        circuit
            .add_classical_register(ClassicalRegister::new(DEFAULT_CREG, n).unwrap())
            .unwrap();
        circuit
    }

    #[test]
    fn test_circuit_new() {
        let circuit = Circuit::with_qubits(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_zero_qubits_rejected() {
        assert!(matches!(
            Circuit::with_qubits(0),
            Err(CoreError::EmptyRegister(_))
        ));
    }

    #[test]
    fn test_duplicate_creg() {
        let mut circuit = circuit_with_creg(2);
        let err = circuit
            .add_classical_register(ClassicalRegister::new("d", 2).unwrap())
            .unwrap_err();
        assert_eq!(err, CoreError::DuplicateRegister("c".into()));
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = Circuit::with_qubits(3).unwrap();
        assert!(circuit.add_gate(Gate::H(0)).is_ok());
        assert!(circuit.add_gate(Gate::Cx(0, 1)).is_ok());
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn test_add_gate_out_of_range() {
        let mut circuit = Circuit::with_qubits(3).unwrap();
        assert!(circuit.add_gate(Gate::H(5)).is_err());
        assert!(matches!(
            circuit.add_gate(Gate::Cz(2, 2)),
            Err(CoreError::DuplicateQubit(2))
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_condition_validation() {
        let mut plain = Circuit::with_qubits(2).unwrap();
        let inst = Instruction::conditioned(Gate::X(0), Condition::new("c", 1));
        assert!(matches!(
            plain.append(inst.clone()),
            Err(CoreError::UnknownRegister(_))
        ));

        let mut circuit = circuit_with_creg(2);
        assert!(circuit.append(inst).is_ok());

        let too_big = Instruction::conditioned(Gate::X(0), Condition::new("c", 4));
        assert!(matches!(
            circuit.append(too_big),
            Err(CoreError::ConditionOutOfRange { value: 4, width: 2 })
        ));
        assert_eq!(circuit.count_conditioned(), 1);
    }

    #[test]
    fn test_measure_all() {
        let mut circuit = circuit_with_creg(3);
        circuit.measure_all().unwrap();

        assert_eq!(circuit.count_measurements(), 3);
        for (i, gate) in circuit.gates().enumerate() {
            assert_eq!(gate, &Gate::Measure(i, i));
        }
    }

    #[test]
    fn test_measure_without_creg() {
        let mut circuit = Circuit::with_qubits(2).unwrap();
        assert!(matches!(
            circuit.measure_all(),
            Err(CoreError::ClbitOutOfRange { clbit: 0, num_clbits: 0 })
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_measure_mismatch() {
        let mut circuit = circuit_with_creg(2);
        assert!(matches!(
            circuit.measure(&[0, 1], &[0]),
            Err(CoreError::MeasureMismatch { qubits: 2, clbits: 1 })
        ));
    }

    #[test]
    fn test_circuit_depth() {
        let mut circuit = Circuit::with_qubits(3).unwrap();
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::H(1)).unwrap();
        circuit.add_gate(Gate::Cx(0, 1)).unwrap();
        circuit.add_gate(Gate::H(2)).unwrap();

        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = circuit_with_creg(3);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit.add_gate(Gate::Reset(1)).unwrap();
        circuit.add_gate(Gate::Cx(0, 1)).unwrap();
        circuit.add_gate(Gate::Rx(0, 1.0)).unwrap();
        circuit.add_gate(Gate::Ccx(0, 1, 2)).unwrap();
        circuit.measure_all().unwrap();

        assert_eq!(circuit.count_1q(), 2);
        assert_eq!(circuit.count_2q(), 1);
        assert_eq!(circuit.count_3q(), 1);
        assert_eq!(circuit.count_resets(), 1);
        assert_eq!(circuit.count_measurements(), 3);
        assert_eq!(circuit.count_parameterized(), 1);
        assert_eq!(circuit.used_qubits().len(), 3);
    }

    #[test]
    fn test_to_qasm() {
        let mut circuit = circuit_with_creg(2);
        circuit.add_gate(Gate::H(0)).unwrap();
        circuit
            .append(Instruction::conditioned(
                Gate::Cx(0, 1),
                Condition::new("c", 2),
            ))
            .unwrap();
        circuit.measure_all().unwrap();

        let qasm = circuit.to_qasm();
        assert!(qasm.contains("OPENQASM 2.0"));
        assert!(qasm.contains("qreg q[2];"));
        assert!(qasm.contains("creg c[2];"));
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("if(c==2) cx q[0],q[1];"));
        assert!(qasm.contains("measure q[1] -> c[1];"));
    }

    #[test]
    fn test_to_qasm_without_creg() {
        let circuit = Circuit::with_qubits(2).unwrap();
        assert!(!circuit.to_qasm().contains("creg"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut circuit = circuit_with_creg(2);
        circuit.add_gate(Gate::Ry(1, 0.75)).unwrap();
        circuit.measure_all().unwrap();

        let json = circuit.to_json().unwrap();
        let parsed = Circuit::from_json(&json).unwrap();
        assert_eq!(parsed, circuit);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_qubit() {
        let json = r#"{
            "qreg": {"name": "q", "size": 2},
            "creg": null,
            "instructions": [{"gate": {"Cx": [0, 7]}, "condition": null}]
        }"#;
        assert!(matches!(
            Circuit::from_json(json),
            Err(CoreError::JsonError(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_condition_register() {
        let json = r#"{
            "qreg": {"name": "q", "size": 2},
            "creg": {"name": "c", "size": 2},
            "instructions": [
                {"gate": {"Cx": [0, 1]}, "condition": {"register": "zz", "value": 1}}
            ]
        }"#;
        let err = Circuit::from_json(json).unwrap_err();
        assert!(err.to_string().contains("zz"));
    }

    #[test]
    fn test_from_json_rejects_empty_register() {
        let json = r#"{"qreg": {"name": "q", "size": 0}, "creg": null, "instructions": []}"#;
        assert!(Circuit::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_wide_condition() {
        let mut circuit = circuit_with_creg(2);
        circuit
            .append(Instruction::conditioned(Gate::X(0), Condition::new("c", 3)))
            .unwrap();
        let json = circuit.to_json().unwrap().replace("\"value\": 3", "\"value\": 9");
        assert!(Circuit::from_json(&json).is_err());
    }
}
