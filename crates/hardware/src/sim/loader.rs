//! Program Loader.
//!
//! This module places programs into Memory and records their bounds. It provides:
//! 1. **Word loading:** An ordered slice of 32-bit instruction words.
//! 2. **Image loading:** A little-endian byte image, as produced by an assembler.
//! 3. **File loading:** A byte image read from disk.
//!
//! Programs are always loaded at address 0 and must stay clear of the stack
//! region. Fetches past the last loaded word fault, so the program length is
//! recorded on the CPU.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::common::constants::{PROGRAM_BASE, WORD_SIZE};
use crate::core::Cpu;

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] io::Error),

    /// The program does not fit in Memory.
    #[error("program of {len} bytes does not fit in memory of {memory_size} bytes")]
    ImageTooLarge {
        /// Program length in bytes.
        len: usize,
        /// Memory size in bytes.
        memory_size: usize,
    },

    /// The program reaches into the stack region.
    #[error("program ending at {end:#x} overlaps the stack region starting at {stack_limit:#x}")]
    OverlapsStack {
        /// End (exclusive) of the program.
        end: u32,
        /// Lowest stack address.
        stack_limit: u32,
    },

    /// The image length is not a whole number of instruction words.
    #[error("program image of {0} bytes is not a multiple of 4")]
    UnalignedImage(usize),
}

/// Loads a sequence of instruction words at address 0.
///
/// # Arguments
///
/// * `cpu` - The CPU whose memory receives the program.
/// * `words` - Program words in execution order.
pub fn load_words(cpu: &mut Cpu, words: &[u32]) -> Result<(), LoadError> {
    let image: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    load_image(cpu, &image)
}

/// Loads a little-endian byte image at address 0.
///
/// # Arguments
///
/// * `cpu` - The CPU whose memory receives the program.
/// * `image` - Raw program bytes; the length must be a multiple of 4.
///
/// Memory is cleared first, so nothing from a previous program survives. The
/// program must end at or below the stack limit.
pub fn load_image(cpu: &mut Cpu, image: &[u8]) -> Result<(), LoadError> {
    if !image.len().is_multiple_of(WORD_SIZE as usize) {
        return Err(LoadError::UnalignedImage(image.len()));
    }

    let memory_size = cpu.mem.size();
    let too_large = || LoadError::ImageTooLarge {
        len: image.len(),
        memory_size,
    };
    if !cpu.mem.contains(PROGRAM_BASE, image.len()) {
        return Err(too_large());
    }
    let end = u32::try_from(image.len())
        .ok()
        .and_then(|len| PROGRAM_BASE.checked_add(len))
        .ok_or_else(too_large)?;
    if end > cpu.stack_limit() {
        return Err(LoadError::OverlapsStack {
            end,
            stack_limit: cpu.stack_limit(),
        });
    }

    cpu.mem.clear();
    cpu.mem
        .write_bytes(PROGRAM_BASE, image)
        .map_err(|_| too_large())?;
    cpu.set_program_end(end);

    tracing::debug!(
        words = image.len() / WORD_SIZE as usize,
        "program loaded at {:#x}",
        PROGRAM_BASE
    );
    Ok(())
}

/// Reads a little-endian byte image from disk and loads it at address 0.
///
/// # Arguments
///
/// * `cpu` - The CPU whose memory receives the program.
/// * `path` - Path to the program image.
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let image = fs::read(path)?;
    load_image(cpu, &image)
}
