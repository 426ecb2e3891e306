//! Flat Machine Memory.
//!
//! This module implements the single byte-addressable address space shared by
//! program words and data. It provides:
//! 1. **Buffer:** Backing storage (`RamBuffer`) for memory contents.
//! 2. **Word Access:** Little-endian 32-bit reads and writes with bounds and
//!    alignment checks.
//! 3. **Bulk Access:** Byte-slice loads used by the program loader and host.

/// RAM buffer implementation for raw byte storage.
pub mod buffer;

use thiserror::Error;

use self::buffer::RamBuffer;
use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, Fault};

/// Memory access error, before it is attributed to an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// `[addr, addr + len)` is not entirely inside Memory.
    #[error("access of {len} bytes at {addr:#x} is out of bounds")]
    OutOfBounds {
        /// First byte of the access.
        addr: u32,
        /// Length of the access in bytes.
        len: usize,
    },

    /// A word access at an address that is not a multiple of four.
    #[error("word access at {addr:#x} is misaligned")]
    Misaligned {
        /// Address of the access.
        addr: u32,
    },
}

impl MemError {
    /// Converts the error into an architectural fault for the given access kind.
    pub const fn into_fault(self, access: AccessType) -> Fault {
        match self {
            Self::OutOfBounds { addr, .. } => Fault::MemoryOutOfBounds { addr, access },
            Self::Misaligned { addr } => Fault::Misaligned { addr, access },
        }
    }
}

/// Result type of memory operations.
pub type MemResult<T> = Result<T, MemError>;

/// The machine's flat memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    buffer: RamBuffer,
    enforce_alignment: bool,
}

impl Memory {
    /// Creates a zeroed memory of `size` bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the address space in bytes.
    /// * `enforce_alignment` - If true, word accesses must be 4-byte aligned.
    pub fn new(size: usize, enforce_alignment: bool) -> Self {
        Self {
            buffer: RamBuffer::new(size),
            enforce_alignment,
        }
    }

    /// Size of the address space in bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Whether data word accesses must be 4-byte aligned.
    pub const fn enforces_alignment(&self) -> bool {
        self.enforce_alignment
    }

    /// Returns `true` if every byte of `[addr, addr + len)` lies inside Memory.
    pub fn contains(&self, addr: u32, len: usize) -> bool {
        (addr as usize)
            .checked_add(len)
            .is_some_and(|end| end <= self.buffer.len())
    }

    fn check_alignment(&self, addr: u32) -> MemResult<()> {
        if self.enforce_alignment && !addr.is_multiple_of(WORD_SIZE) {
            return Err(MemError::Misaligned { addr });
        }
        Ok(())
    }

    /// Reads a word (32-bit, little-endian) for instruction fetch.
    ///
    /// Fetches are always aligned, regardless of `enforce_alignment`.
    pub fn fetch_u32(&self, addr: u32) -> MemResult<u32> {
        if !addr.is_multiple_of(WORD_SIZE) {
            return Err(MemError::Misaligned { addr });
        }
        self.word_at(addr)
    }

    /// Reads a data word (32-bit, little-endian).
    pub fn read_u32(&self, addr: u32) -> MemResult<u32> {
        self.check_alignment(addr)?;
        self.word_at(addr)
    }

    /// Writes a data word (32-bit, little-endian).
    pub fn write_u32(&mut self, addr: u32, val: u32) -> MemResult<()> {
        self.check_alignment(addr)?;
        self.buffer.write_slice(addr, &val.to_le_bytes())
    }

    fn word_at(&self, addr: u32) -> MemResult<u32> {
        let slice = self.buffer.read_slice(addr, WORD_SIZE as usize)?;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(slice);
        Ok(u32::from_le_bytes(bytes))
    }

    /// Copies `len` bytes out of memory starting at `addr`.
    pub fn read_bytes(&self, addr: u32, len: usize) -> MemResult<Vec<u8>> {
        Ok(self.buffer.read_slice(addr, len)?.to_vec())
    }

    /// Writes a byte slice into memory at `addr`.
    ///
    /// Used for loading program images and by hosts servicing ECALL.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> MemResult<()> {
        self.buffer.write_slice(addr, data)
    }

    /// Zeroes the whole address space.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
