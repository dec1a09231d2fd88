//! # Logical Instructions
//!
//! Bitwise operations and shifts. Results always land in R0. Shift
//! distances of 8 or more clear the result to zero.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor};

/// Executes LND: R0 <- left AND right.
pub(crate) fn execute_logical_and<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let result = processor.register_value(left_register) & processor.register_value(right_register);
    processor.set_register_value(0, result);
    true
}

/// Executes LOR: R0 <- left OR right.
pub(crate) fn execute_logical_or<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let result = processor.register_value(left_register) | processor.register_value(right_register);
    processor.set_register_value(0, result);
    true
}

/// Executes LXR: R0 <- left XOR right.
pub(crate) fn execute_logical_xor<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let result = processor.register_value(left_register) ^ processor.register_value(right_register);
    processor.set_register_value(0, result);
    true
}

/// Executes LBC: R0 <- left AND NOT right, clearing the bits set in right.
pub(crate) fn execute_logical_bit_clear<M, R, W, E>(
    processor: &mut Processor<'_, M, R, W, E>,
) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let result =
        processor.register_value(left_register) & !processor.register_value(right_register);
    processor.set_register_value(0, result);
    true
}

/// Executes LSL: R0 <- register shifted left by a literal distance.
pub(crate) fn execute_logical_shift_left<M, R, W, E>(
    processor: &mut Processor<'_, M, R, W, E>,
) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let shift_distance = processor.fetch_byte();
    let result = processor
        .register_value(register)
        .checked_shl(shift_distance as u32)
        .unwrap_or(0);
    processor.set_register_value(0, result);
    true
}

/// Executes LSR: R0 <- register shifted right by a literal distance.
pub(crate) fn execute_logical_shift_right<M, R, W, E>(
    processor: &mut Processor<'_, M, R, W, E>,
) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let shift_distance = processor.fetch_byte();
    let result = processor
        .register_value(register)
        .checked_shr(shift_distance as u32)
        .unwrap_or(0);
    processor.set_register_value(0, result);
    true
}
