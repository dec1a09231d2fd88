//! # Stream Instructions
//!
//! PNT emits a memory range to the output stream; RIN blocks on one input
//! byte. Output failures are not part of the error taxonomy and are
//! ignored; input failures are recorded and end the run at the step
//! boundary.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor, VmError};

/// Executes PNT: emit `len` bytes of memory starting at `addr`, then flush.
///
/// The address walk wraps modulo the address space. A zero length emits
/// nothing.
pub(crate) fn execute_print<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let address = processor.fetch_address();
    let length = processor.fetch_byte();

    let mut bytes = Vec::with_capacity(length as usize);
    for offset in 0..length as u16 {
        bytes.push(processor.memory.read(address.wrapping_add(offset)));
    }
    let _ = processor.writer.write_all(&bytes);
    let _ = processor.writer.flush();
    true
}

/// Executes RIN: blocking read of exactly one byte into a register.
///
/// On a failed or exhausted input, records a read-input error; the
/// destination register still receives the read buffer, which holds zero.
/// The step completes and execution ends at the step boundary.
pub(crate) fn execute_read_input<M, R, W, E>(processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    let register = processor.fetch_byte();
    let mut buffer = [0u8; 1];
    if let Err(error) = processor.reader.read_exact(&mut buffer) {
        processor.errors.push(VmError::ReadInput(error.to_string()));
    }
    processor.set_register_value(register, buffer[0]);
    true
}
