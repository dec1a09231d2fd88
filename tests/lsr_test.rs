//! Tests for the LSR (Logical Shift Right) instruction.

use libvm8::{FlatMemory, MemoryBus, Processor, StepOutcome};
use std::io;

const MLR: u8 = 0x01;
const LSR: u8 = 0x25;

fn load(program: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load_program(program).unwrap();
    memory
}

fn processor(memory: &mut FlatMemory) -> Processor<'_, FlatMemory, io::Empty, io::Sink, io::Sink> {
    Processor::new(memory, io::empty(), io::sink(), io::sink())
}

#[test]
fn test_lsr_shifts_into_r0() {
    let cases = [
        (0x80u8, 0u8, 0x80u8),
        (0x80, 4, 0x08),
        (0x18, 3, 0x03),
        (0x81, 1, 0x40), // low bit falls off
    ];

    for (value, distance, expected) in cases {
        let mut memory = load(&[MLR, value, 0x01, LSR, 0x01, distance]);
        let mut proc = processor(&mut memory);

        proc.step();
        assert_eq!(proc.step(), StepOutcome::Continue);
        assert_eq!(proc.register_value(0), expected);
    }
}

#[test]
fn test_lsr_distance_of_register_width_or_more_clears() {
    for distance in [8u8, 9, 16, 255] {
        let mut memory = load(&[MLR, 0xFF, 0x01, LSR, 0x01, distance]);
        let mut proc = processor(&mut memory);

        proc.step();
        assert_eq!(proc.step(), StepOutcome::Continue);
        assert_eq!(proc.register_value(0), 0x00);
    }
}
