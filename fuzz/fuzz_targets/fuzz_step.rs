//! Fuzz target for the stepping loop.
//!
//! Feeds arbitrary programs and input bytes through a bounded number of
//! steps to find panics and invariant violations.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use libvm8::{FlatMemory, MemoryBus, Processor, StepOutcome};
use std::io;

/// Arbitrary machine setup for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Program image loaded at address 0
    program: Vec<u8>,
    /// Bytes available to RIN
    input: Vec<u8>,
    /// Maximum number of steps to attempt
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    if memory.load_program(&input.program).is_err() {
        return;
    }

    let mut output = Vec::new();
    let mut processor = Processor::new(
        &mut memory,
        input.input.as_slice(),
        &mut output,
        io::sink(),
    );

    for _ in 0..input.steps {
        if processor.step() != StepOutcome::Continue {
            break;
        }
    }

    // The error list never shrinks, whatever the program did
    let errors_before = processor.errors().len();
    let _ = processor.step();
    assert!(processor.errors().len() >= errors_before);
});
