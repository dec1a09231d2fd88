//! Tests for the LND (Logical And) instruction.

use libvm8::{FlatMemory, MemoryBus, Processor, StepOutcome};
use std::io;

const MLR: u8 = 0x01;
const LND: u8 = 0x20;

fn load(program: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load_program(program).unwrap();
    memory
}

fn processor(memory: &mut FlatMemory) -> Processor<'_, FlatMemory, io::Empty, io::Sink, io::Sink> {
    Processor::new(memory, io::empty(), io::sink(), io::sink())
}

#[test]
fn test_lnd_ands_into_r0() {
    let cases = [
        (0x5Cu8, 0xD2u8, 0x50u8),
        (0xD6, 0x13, 0x12),
        (0xCE, 0x47, 0x46),
    ];

    for (left, right, expected) in cases {
        let mut memory = load(&[MLR, left, 0x01, MLR, right, 0x02, LND, 0x01, 0x02]);
        let mut proc = processor(&mut memory);

        proc.step();
        proc.step();
        assert_eq!(proc.step(), StepOutcome::Continue);
        assert_eq!(proc.register_value(0), expected);
    }
}

#[test]
fn test_lnd_operands_unchanged() {
    let mut memory = load(&[MLR, 0xF0, 0x03, MLR, 0x0F, 0x04, LND, 0x03, 0x04]);
    let mut proc = processor(&mut memory);

    proc.step();
    proc.step();
    proc.step();
    assert_eq!(proc.register_value(0), 0x00);
    assert_eq!(proc.register_value(3), 0xF0);
    assert_eq!(proc.register_value(4), 0x0F);
}
