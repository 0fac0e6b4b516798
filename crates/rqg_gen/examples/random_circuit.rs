//! Random circuit demo
//!
//! Generates a handful of circuits and prints their summary and QASM.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run -p rqg_gen --example random_circuit
//! ```

use rqg_gen::prelude::*;

fn main() -> Result<(), GenError> {
    env_logger::init();

    println!("=== RQG Random Circuit Demo ===\n");

    // Standard catalog, measured
    let request = GenerationRequest::new(4, 3).with_measure(true).with_seed(42);
    let circuit = random_circuit(&request)?;
    println!("{}", request);
    println!("{}", circuit);
    println!("{}\n", circuit.to_qasm());

    // Conditional + reset, auto seed
    let request = GenerationRequest::new(3, 4)
        .with_conditional(true)
        .with_reset(true);
    let generated = RandomCircuitGenerator::new().generate_with_seed(&request)?;
    println!("{} -> seed {}", request, generated.seed);
    println!("{}", generated.circuit);
    println!("{}\n", generated.circuit.to_qasm());

    // Extended catalog with three-qubit gates
    let request = GenerationRequest::new(6, 5).with_max_operands(3).with_seed(7);
    let circuit = RandomCircuitGenerator::extended().generate(&request)?;
    println!("{}", request);
    println!("{}", circuit);
    println!("3Q gates: {}", circuit.count_3q());

    Ok(())
}
