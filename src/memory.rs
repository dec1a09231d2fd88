//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the processor
//! from specific memory implementations, plus `FlatMemory`, the flat 64KB
//! array used by the driver and the tests.
//!
//! ## Design Principles
//!
//! - No bus errors: reads and writes are total over the 16-bit address space
//! - Program load is the only fallible operation, and only for oversize
//!   images
//! - Code and data share the address space; the stack region at
//!   0xFF00-0xFFFF is a convention, not a protection boundary

use crate::VmError;

/// Number of addressable byte cells, the limit for 16-bit addresses.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for the processor to read and write bytes.
///
/// Implementations provide the backing store for a run. The processor
/// reaches all memory, including its own program text and the stack region,
/// through this abstraction.
///
/// # Examples
///
/// ```
/// use libvm8::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads the byte at the given 16-bit address.
    ///
    /// Must never fail; every address is mapped.
    fn read(&self, address: u16) -> u8;

    /// Writes a byte to the given 16-bit address.
    ///
    /// Must never fail; every address is writable, including the program
    /// text and the stack region.
    fn write(&mut self, address: u16, value: u8);

    /// Copies a program image into memory starting at address 0.
    ///
    /// Cells past the end of the image are left as the implementation had
    /// them. Fails only when the image is larger than the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use libvm8::{FlatMemory, MemoryBus, VmError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load_program(&[0x01, 0xA2, 0xB3]).unwrap();
    /// assert_eq!(mem.read(0x0001), 0xA2);
    ///
    /// let oversize = vec![0u8; libvm8::MEMORY_SIZE + 1];
    /// assert_eq!(mem.load_program(&oversize), Err(VmError::ProgramTooLarge));
    /// ```
    fn load_program(&mut self, program: &[u8]) -> Result<(), VmError> {
        if program.len() > MEMORY_SIZE {
            return Err(VmError::ProgramTooLarge);
        }
        for (address, byte) in program.iter().enumerate() {
            self.write(address as u16, *byte);
        }
        Ok(())
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to a single contiguous RAM array initialized to
/// zero.
///
/// # Examples
///
/// ```
/// use libvm8::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load_program(&[0x00, 0xFF]).unwrap(); // NOP; HLT
/// assert_eq!(memory.read(0x0001), 0xFF);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }
}
