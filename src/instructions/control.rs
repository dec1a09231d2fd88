//! NOP and HLT.

use std::io::{Read, Write};

use crate::{MemoryBus, Processor};

/// Executes NOP. No effect.
pub(crate) fn execute_noop<M, R, W, E>(_processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    true
}

/// Executes HLT, terminating the run normally.
pub(crate) fn execute_halt<M, R, W, E>(_processor: &mut Processor<'_, M, R, W, E>) -> bool
where
    M: MemoryBus,
    R: Read,
    W: Write,
    E: Write,
{
    false
}
