//! Microcode Image Loading.
//!
//! This module turns in-memory ROM contents into control store and constant
//! ROM data. It provides:
//! 1. **Word images:** Microcode and constants supplied as ready words.
//! 2. **Byte images:** Big-endian byte slices split into 32-bit microwords
//!    and 16-bit constants.
//! 3. **Installation:** Copying an image into a `Cpu`.
//!
//! The loader never touches the filesystem; callers hand it the bytes.

use thiserror::Error;
use tracing::debug;

use crate::common::constants::{CONST_PROM_SIZE, UCODE_PAGE_SIZE, UCODE_ROM_PAGES};
use crate::core::Cpu;

/// Errors raised while building a microcode image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The byte slice does not hold a whole number of words.
    #[error("image of {len} bytes is not a multiple of {word_size}-byte words")]
    Misaligned {
        /// Length of the byte slice.
        len: usize,
        /// Size of one word in bytes.
        word_size: usize,
    },
    /// The image holds more words than the target can take.
    #[error("image of {words} words exceeds capacity of {capacity}")]
    TooLarge {
        /// Words in the image.
        words: usize,
        /// Words the target holds.
        capacity: usize,
    },
}

/// Control store ROM and constant ROM contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MicrocodeImage {
    /// Logical microwords for the ROM page, starting at address 0.
    pub rom: Vec<u32>,
    /// Constant ROM words, starting at address 0.
    pub constants: Vec<u16>,
}

impl MicrocodeImage {
    /// Builds an image from ready words.
    ///
    /// # Errors
    ///
    /// `LoadError::TooLarge` if either table exceeds its ROM.
    pub fn from_words(rom: Vec<u32>, constants: Vec<u16>) -> Result<Self, LoadError> {
        check_capacity(rom.len(), UCODE_PAGE_SIZE * UCODE_ROM_PAGES)?;
        check_capacity(constants.len(), CONST_PROM_SIZE)?;
        Ok(Self { rom, constants })
    }

    /// Builds an image from big-endian byte slices.
    ///
    /// # Arguments
    ///
    /// * `rom` - Microcode ROM, four bytes per microword.
    /// * `constants` - Constant ROM, two bytes per word.
    ///
    /// # Errors
    ///
    /// `LoadError::Misaligned` for a partial trailing word, `LoadError::TooLarge`
    /// if either table exceeds its ROM.
    pub fn from_be_bytes(rom: &[u8], constants: &[u8]) -> Result<Self, LoadError> {
        if rom.len() % 4 != 0 {
            return Err(LoadError::Misaligned {
                len: rom.len(),
                word_size: 4,
            });
        }
        let words = rom
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::from_words(words, constants_from_be_bytes(constants)?)
    }

    /// Copies the image into the CPU's control store and constant ROM.
    ///
    /// # Returns
    ///
    /// The number of microwords written.
    pub fn apply(&self, cpu: &mut Cpu) -> usize {
        let words = cpu.store.load_rom(&self.rom);
        let constants = cpu.constants.load(&self.constants);
        debug!("loaded {words} microwords and {constants} constants");
        words
    }
}

/// Splits a big-endian byte slice into 16-bit constant ROM words.
///
/// # Errors
///
/// `LoadError::Misaligned` for an odd length, `LoadError::TooLarge` beyond
/// the constant ROM size.
pub fn constants_from_be_bytes(bytes: &[u8]) -> Result<Vec<u16>, LoadError> {
    if bytes.len() % 2 != 0 {
        return Err(LoadError::Misaligned {
            len: bytes.len(),
            word_size: 2,
        });
    }
    check_capacity(bytes.len() / 2, CONST_PROM_SIZE)?;
    Ok(bytes
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect())
}

const fn check_capacity(words: usize, capacity: usize) -> Result<(), LoadError> {
    if words > capacity {
        Err(LoadError::TooLarge { words, capacity })
    } else {
        Ok(())
    }
}
