//! # Arithmetic Instructions
//!
//! All arithmetic is 8-bit modular; there is no carry or overflow flag.
//! Two-operand results land in R0. Division truncates toward zero and a
//! zero divisor is fatal.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor, VmError};

/// Executes INC: increment a register, wrapping at 255.
pub(crate) fn execute_inc<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let value = processor.register_value(register).wrapping_add(1);
    processor.set_register_value(register, value);
    true
}

/// Executes DEC: decrement a register, wrapping at 0.
pub(crate) fn execute_dec<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let value = processor.register_value(register).wrapping_sub(1);
    processor.set_register_value(register, value);
    true
}

/// Executes ADD: R0 <- left + right mod 256.
pub(crate) fn execute_add<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let sum = processor
        .register_value(left_register)
        .wrapping_add(processor.register_value(right_register));
    processor.set_register_value(0, sum);
    true
}

/// Executes SUB: R0 <- left - right mod 256.
pub(crate) fn execute_subtract<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let difference = processor
        .register_value(left_register)
        .wrapping_sub(processor.register_value(right_register));
    processor.set_register_value(0, difference);
    true
}

/// Executes MUL: R0 <- left * right mod 256.
pub(crate) fn execute_multiply<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    let product = processor
        .register_value(left_register)
        .wrapping_mul(processor.register_value(right_register));
    processor.set_register_value(0, product);
    true
}

/// Executes DIV: R0 <- left / right, truncating.
///
/// A zero divisor records a divide-by-zero error and stops execution; R0 is
/// left untouched.
pub(crate) fn execute_divide<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let left_register = processor.fetch_byte();
    let right_register = processor.fetch_byte();
    if processor.register_value(right_register) == 0x00 {
        processor.errors.push(VmError::DivideByZero);
        return false;
    }
    let quotient =
        processor.register_value(left_register) / processor.register_value(right_register);
    processor.set_register_value(0, quotient);
    true
}
