//! # Jump Instructions
//!
//! Control transfer. Conditional jumps compare a register against R0, the
//! implicit result register.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor};

/// Executes JMP: unconditional jump to an address.
pub(crate) fn execute_jump<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let address = processor.fetch_address();
    processor.instruction_pointer = address;
    true
}

/// Executes JEQ: jump when R0 equals the named register.
pub(crate) fn execute_jump_equal<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let address = processor.fetch_address();
    if processor.register_value(0) == processor.register_value(register) {
        processor.instruction_pointer = address;
    }
    true
}

/// Executes JNE: jump when R0 differs from the named register.
pub(crate) fn execute_jump_not_equal<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let address = processor.fetch_address();
    if processor.register_value(0) != processor.register_value(register) {
        processor.instruction_pointer = address;
    }
    true
}
