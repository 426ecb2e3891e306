//! RAM Buffer Implementation.
//!
//! This module provides the backing byte store for the machine's memory. It is a
//! plain heap allocation; every access is range-checked and reports a
//! `MemError` instead of panicking.

use super::MemError;

/// Zero-initialized byte buffer backing the flat address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RamBuffer {
    bytes: Vec<u8>,
}

impl RamBuffer {
    /// Creates a new zeroed buffer of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resolves `[addr, addr + len)` to a slice range, or reports it out of bounds.
    fn range(&self, addr: u32, len: usize) -> Result<std::ops::Range<usize>, MemError> {
        let start = addr as usize;
        match start.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(start..end),
            _ => Err(MemError::OutOfBounds { addr, len }),
        }
    }

    /// Borrows `len` bytes starting at `addr`.
    pub fn read_slice(&self, addr: u32, len: usize) -> Result<&[u8], MemError> {
        let range = self.range(addr, len)?;
        Ok(&self.bytes[range])
    }

    /// Copies `data` into the buffer starting at `addr`.
    pub fn write_slice(&mut self, addr: u32, data: &[u8]) -> Result<(), MemError> {
        let range = self.range(addr, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// Zeroes the whole buffer.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }
}
