//! # Stack Instructions
//!
//! Pushes, explicit pops, and the call frame convention.
//!
//! CLL saves a variable-sized caller frame: the caller's frame size, R2
//! through R7, and the return address, in that order. R0 and R1 are not
//! saved; they are the argument and return channel. RET first discards
//! whatever the callee pushed but never popped, counted by the frame size,
//! and only then unwinds the saved frame. That makes RET safe even when the
//! callee left data on the stack, which is also why the raw pop has no
//! underflow check: RET legitimately pops with a zero frame size while
//! restoring caller state. Only STP guards against underflow.

use std::io::{Read, Write};

use crate::processor::{REGISTER_COUNT, STACK_START};
use crate::{MemoryBus, Processor, VmError};

/// Executes SPL: push a literal.
pub(crate) fn execute_stack_push_lit<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let value = processor.fetch_byte();
    processor.stack_push(value);
    true
}

/// Executes SPR: push a register.
pub(crate) fn execute_stack_push_reg<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let value = processor.register_value(register);
    processor.stack_push(value);
    true
}

/// Executes STP: pop into a register.
///
/// Underflow is checked here, before the operand fetch, rather than in the
/// raw pop: a zero frame size or a stack pointer at the stack base records
/// a stack-underflow error and aborts the step.
pub(crate) fn execute_stack_pop<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    if processor.frame_size == 0 || processor.stack_pointer == STACK_START {
        processor.errors.push(VmError::StackUnderflow);
        return false;
    }
    let register = processor.fetch_byte();
    let value = processor.stack_pop();
    processor.set_register_value(register, value);
    true
}

/// Executes CLL: save the caller frame and jump.
///
/// Saved in push order: the caller's frame size, R2 through R7 low index
/// first, then the return address high byte then low byte. The callee
/// starts with a fresh frame size of zero.
pub(crate) fn execute_call<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let address = processor.fetch_address();

    let caller_frame_size = processor.frame_size;
    processor.stack_push(caller_frame_size);

    // Only R2-R7 are saved for the return
    for register in 2..REGISTER_COUNT {
        let value = processor.register_value(register);
        processor.stack_push(value);
    }

    let return_address = processor.instruction_pointer;
    processor.stack_push((return_address >> 8) as u8);
    processor.stack_push(return_address as u8);

    processor.frame_size = 0;
    processor.instruction_pointer = address;
    true
}

/// Executes RET: restore the caller frame.
///
/// Pops and discards the callee's unbalanced pushes, then restores the
/// return address, R7 down to R2, and finally the caller's frame size.
pub(crate) fn execute_return<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    // Current frame falls out of scope
    let unbalanced = processor.frame_size;
    for _ in 0..unbalanced {
        processor.stack_pop();
    }

    let low = processor.stack_pop();
    let high = processor.stack_pop();
    processor.instruction_pointer = ((high as u16) << 8) | low as u16;

    for register in (2..REGISTER_COUNT).rev() {
        let value = processor.stack_pop();
        processor.set_register_value(register, value);
    }

    let caller_frame_size = processor.stack_pop();
    processor.frame_size = caller_frame_size;
    true
}
