//! # Move Instructions
//!
//! Transfers between literals, registers, and memory. The memory forms
//! address through a pointer register pair: the named register supplies the
//! high byte and its successor the low byte. Naming register 7 makes the
//! pair reach for register 8, which is the invalid-register error path.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor};

/// Executes MLR: load a literal into a register.
///
/// Operands: LIT value, REG destination.
pub(crate) fn execute_move_lit_reg<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let literal = processor.fetch_byte();
    let register = processor.fetch_byte();
    processor.set_register_value(register, literal);
    true
}

/// Executes MRR: copy one register into another.
///
/// Operands: REG source, REG destination.
pub(crate) fn execute_move_reg_reg<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let src_register = processor.fetch_byte();
    let dst_register = processor.fetch_byte();
    let value = processor.register_value(src_register);
    processor.set_register_value(dst_register, value);
    true
}

/// Executes MLM: store a literal through a pointer register pair.
///
/// Operands: LIT value, REG pointer.
pub(crate) fn execute_move_lit_mem<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let literal = processor.fetch_byte();
    let register = processor.fetch_byte();
    let address = processor.register_pointer_value(register);
    processor.memory.write(address, literal);
    true
}

/// Executes MRM: store a register through a pointer register pair.
///
/// Operands: REG source, REG pointer.
pub(crate) fn execute_move_reg_mem<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let src_register = processor.fetch_byte();
    let address_register = processor.fetch_byte();
    let address = processor.register_pointer_value(address_register);
    let value = processor.register_value(src_register);
    processor.memory.write(address, value);
    true
}

/// Executes MMR: load a register through a pointer register pair.
///
/// Operands: REG pointer, REG destination.
pub(crate) fn execute_move_mem_reg<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let address_register = processor.fetch_byte();
    let address = processor.register_pointer_value(address_register);
    let dst_register = processor.fetch_byte();
    let value = processor.memory.read(address);
    processor.set_register_value(dst_register, value);
    true
}
