//! # 8-Bit Virtual Machine Core
//!
//! A small bytecode virtual machine with eight 8-bit registers, a 64 KiB
//! byte-addressable memory, and a memory-resident call stack.
//!
//! Programs are flat byte streams loaded at address 0. The processor fetches
//! single-byte opcodes with inline operands, mutates the register file and
//! stack, and talks to the outside world through a byte reader and two byte
//! writers.
//!
//! ## Quick Start
//!
//! ```rust
//! use libvm8::{FlatMemory, MemoryBus, Processor, StepOutcome};
//! use std::io;
//!
//! // 64KB flat memory with the program at address 0
//! let mut memory = FlatMemory::new();
//! memory.load_program(&[
//!     0x01, 0x2A, 0x00, // MLR: R0 <- 0x2A
//!     0xFF,             // HLT
//! ]).unwrap();
//!
//! let mut processor = Processor::new(&mut memory, io::empty(), io::sink(), io::sink());
//!
//! assert_eq!(processor.step(), StepOutcome::Continue);
//! assert_eq!(processor.register_value(0), 0x2A);
//! assert_eq!(processor.step(), StepOutcome::Halted);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: the processor is separated from the memory
//!   implementation via the `MemoryBus` trait
//! - **Borrowed memory**: the store is owned by the host and borrowed by the
//!   processor for the duration of a run
//! - **Closed instruction set**: decoding is an exhaustive match over the
//!   [`Opcode`] enum; every other byte is an unknown-instruction error
//! - **Errors accumulate**: handlers never unwind mid-instruction; a step
//!   that recorded any error ends the run at the step boundary
//!
//! ## Modules
//!
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `opcodes` - the instruction table
//! - `processor` - register file, stack discipline, and execution loop

pub mod memory;
pub mod opcodes;
pub mod processor;

// Instruction handler implementations (not part of the public API)
mod instructions;

// Re-export public API
pub use memory::{FlatMemory, MemoryBus, MEMORY_SIZE};
pub use opcodes::Opcode;
pub use processor::{Processor, StepOutcome, REGISTER_COUNT, STACK_LIMIT, STACK_START};

use thiserror::Error;

/// Errors recorded during program load or execution.
///
/// Execution errors are never raised mid-instruction. A handler that
/// discovers one appends it to the processor's error list and finishes with
/// whatever values it has; the step then reports a fault and the run ends.
/// The list accessor hands out copies, so the variants carry owned data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// The program image does not fit in the 16-bit address space.
    #[error("program length exceeds available memory")]
    ProgramTooLarge,

    /// The fetched opcode byte is not in the instruction table.
    ///
    /// Carries the offending byte and the address it was fetched from.
    #[error("unknown instruction 0x{opcode:02X} at position 0x{position:04X}")]
    UnknownInstruction { opcode: u8, position: u16 },

    /// A register index of 8 or more was used in a read or write, including
    /// the implicit high/low pair formed when dereferencing a pointer.
    #[error("invalid register access: {0}")]
    InvalidRegister(u8),

    /// The instruction pointer was incremented past the end of memory.
    #[error("instruction pointer out of memory bounds")]
    InstructionPointerOutOfBounds,

    /// DIV with a zero divisor.
    #[error("divide by zero")]
    DivideByZero,

    /// A push arrived with the stack pointer already at the stack limit.
    #[error("stack overflow")]
    StackOverflow,

    /// An explicit pop with nothing pushed in the current frame.
    #[error("stack underflow")]
    StackUnderflow,

    /// A push would grow the current call frame past 255 bytes.
    #[error("stack frame too large")]
    FrameTooLarge,

    /// The blocking input read failed or hit end of input.
    #[error("error reading input: {0}")]
    ReadInput(String),
}
