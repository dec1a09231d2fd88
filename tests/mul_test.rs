//! Tests for the MUL instruction.

use libvm8::{FlatMemory, MemoryBus, Processor, StepOutcome};
use std::io;

const MLR: u8 = 0x01;
const MUL: u8 = 0x44;

fn load(program: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::new();
    memory.load_program(program).unwrap();
    memory
}

fn processor(memory: &mut FlatMemory) -> Processor<'_, FlatMemory, io::Empty, io::Sink, io::Sink> {
    Processor::new(memory, io::empty(), io::sink(), io::sink())
}

#[test]
fn test_mul_products_into_r0() {
    let cases = [
        (0x03u8, 0x02u8, 0x06u8),
        (0x21, 0x02, 0x42),
        (0x10, 0x00, 0x00),
    ];

    for (left, right, expected) in cases {
        let mut memory = load(&[MLR, left, 0x01, MLR, right, 0x02, MUL, 0x01, 0x02]);
        let mut proc = processor(&mut memory);

        proc.step();
        proc.step();
        assert_eq!(proc.step(), StepOutcome::Continue);
        assert_eq!(proc.register_value(0), expected);
    }
}

#[test]
fn test_mul_wraps_modulo_256() {
    // 0x20 * 0x10 = 0x200, truncated to 0x00
    let mut memory = load(&[MLR, 0x20, 0x01, MLR, 0x10, 0x02, MUL, 0x01, 0x02]);
    let mut proc = processor(&mut memory);

    proc.step();
    proc.step();
    proc.step();
    assert_eq!(proc.register_value(0), 0x00);
}
