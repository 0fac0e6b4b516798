//! Random circuit generator
//!
//! Gantree: L2_Generator → RandomCircuitGenerator
//!
//! Each layer partitions every qubit into disjoint operand groups of size
//! `1..=max_operands` by repeated shuffle-and-slice, then emits one randomly
//! chosen, randomly parameterized operation per group. All draws go through
//! one [`SamplingSource`] owned by the call.

use crate::catalog::OperationCatalog;
use crate::config::GenerationRequest;
use crate::constants::{ANGLE_UPPER_BOUND, CONDITION_ODDS};
use crate::error::{GenError, GenResult};
use crate::sampling::SamplingSource;
use log::{debug, trace};
use rqg_core::types::condition_bound;
use rqg_core::{
    Angle, Circuit, ClassicalRegister, Condition, Instruction, QubitId, DEFAULT_CREG,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Which catalog the generator draws from
/// Gantree: CatalogChoice // 카탈로그 선택
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CatalogChoice {
    /// Rx/Ry/Rz and CX
    #[default]
    Standard,
    /// Broad standard-gate set with three-qubit gates
    Extended,
    /// Caller-supplied catalog
    Custom(OperationCatalog),
}

/// Circuit plus the seed that produced it
/// Gantree: GeneratedCircuit // 생성 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCircuit {
    /// Generated circuit
    pub circuit: Circuit,
    /// Seed the sampling source was built from
    pub seed: u64,
}

/// Random circuit generator
/// Gantree: RandomCircuitGenerator // 랜덤 회로 생성기
///
/// The generator holds only the immutable catalog choice, so one instance
/// can serve concurrent calls; each call builds its own sampling source and
/// circuit.
#[derive(Debug, Clone, Default)]
pub struct RandomCircuitGenerator {
    catalog: CatalogChoice,
}

impl RandomCircuitGenerator {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Generator over the standard catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator over the extended catalog
    pub fn extended() -> Self {
        Self {
            catalog: CatalogChoice::Extended,
        }
    }

    /// Generator over a caller-supplied catalog
    pub fn with_catalog(catalog: OperationCatalog) -> Self {
        Self {
            catalog: CatalogChoice::Custom(catalog),
        }
    }

    /// Catalog choice
    pub fn catalog(&self) -> &CatalogChoice {
        &self.catalog
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Generate a circuit
    /// Gantree: generate(&self, request) -> Result<Circuit> // 회로 생성
    pub fn generate(&self, request: &GenerationRequest) -> GenResult<Circuit> {
        self.generate_with_seed(request).map(|generated| generated.circuit)
    }

    /// Generate a circuit and report the seed used
    /// Gantree: generate_with_seed(&self, request) -> Result<GeneratedCircuit> // 시드 포함 생성
    ///
    /// On error nothing is returned; the partially built circuit is dropped.
    pub fn generate_with_seed(&self, request: &GenerationRequest) -> GenResult<GeneratedCircuit> {
        request.validate()?;

        let mut rng = SamplingSource::resolve(request.seed);
        debug!("Generating random circuit: {} [seed {}]", request, rng.seed());

        let catalog = self.resolve_catalog(request);
        let mut circuit = Circuit::with_qubits(request.num_qubits)?;
        if request.needs_classical_register() {
            circuit.add_classical_register(ClassicalRegister::new(
                DEFAULT_CREG,
                request.num_qubits,
            )?)?;
        }

        for layer in 0..request.depth {
            if let Err(err) = build_layer(&mut circuit, &catalog, &mut rng, request) {
                debug!("Generation aborted in layer {}: {}", layer, err);
                return Err(err);
            }
        }

        if request.measure {
            circuit.measure_all()?;
        }

        debug!(
            "Generated {} instructions ({} conditioned) over {} layers",
            circuit.gate_count(),
            circuit.count_conditioned(),
            request.depth
        );

        Ok(GeneratedCircuit {
            circuit,
            seed: rng.seed(),
        })
    }

    fn resolve_catalog(&self, request: &GenerationRequest) -> Cow<'_, OperationCatalog> {
        match &self.catalog {
            CatalogChoice::Standard => Cow::Owned(OperationCatalog::standard(request.reset)),
            CatalogChoice::Extended => Cow::Owned(OperationCatalog::extended(request.reset)),
            CatalogChoice::Custom(catalog) if request.reset && !catalog.has_reset() => {
                Cow::Owned(catalog.clone().with_reset())
            }
            CatalogChoice::Custom(catalog) => Cow::Borrowed(catalog),
        }
    }
}

// ============================================================================
// Layer Construction
// ============================================================================

/// Emit one layer: every qubit lands in exactly one operand group.
fn build_layer(
    circuit: &mut Circuit,
    catalog: &OperationCatalog,
    rng: &mut SamplingSource,
    request: &GenerationRequest,
) -> GenResult<()> {
    let mut remaining: Vec<QubitId> = (0..request.num_qubits).collect();

    while !remaining.is_empty() {
        let max_operands = remaining.len().min(request.max_operands);
        let num_operands: usize = rng.integer(1..=max_operands);

        rng.shuffle(&mut remaining);
        let operands: Vec<QubitId> = remaining.drain(..num_operands).collect();

        let kind = *rng
            .choose(catalog.bucket(num_operands))
            .ok_or(GenError::CatalogExhausted { num_operands })?;
        let angles: Vec<Angle> = (0..catalog.num_params(kind))
            .map(|_| rng.uniform(0.0, ANGLE_UPPER_BOUND))
            .collect();
        let gate = kind.instantiate(&operands, &angles)?;

        let instruction = match draw_condition(rng, request) {
            Some(value) => Instruction::conditioned(gate, Condition::new(DEFAULT_CREG, value)),
            None => Instruction::new(gate),
        };
        trace!("emit {}", instruction);
        circuit.append(instruction)?;
    }

    Ok(())
}

/// With probability `1 / CONDITION_ODDS`, a value in `[0, 2^num_qubits)`.
fn draw_condition(rng: &mut SamplingSource, request: &GenerationRequest) -> Option<u64> {
    if !request.conditional || rng.integer(0..CONDITION_ODDS) != 0 {
        return None;
    }
    let value = match condition_bound(request.num_qubits) {
        Some(bound) => rng.integer(0..bound),
        None => rng.next_u64(),
    };
    Some(value)
}

// ============================================================================
// Tests
// ============================================================================
