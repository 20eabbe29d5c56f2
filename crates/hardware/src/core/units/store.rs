//! Microcode control store.
//!
//! One ROM page at 0-01777 followed by three RAM pages at 02000-07777.
//! Words are kept in the inverted form the hardware stores them in and
//! converted on every fetch, read and write, so `read(write(x)) == x`.

use crate::common::constants::{
    UCODE_ADDR_MASK, UCODE_INVERTED, UCODE_PAGE_SIZE, UCODE_RAM_BASE, UCODE_RAM_PAGES,
    UCODE_ROM_PAGES, UCODE_SIZE,
};
use crate::isa::microword::Microword;

/// ROM and RAM microcode words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MicrocodeStore {
    raw: Vec<u32>,
}

impl MicrocodeStore {
    /// Creates a store where every word reads as logical zero.
    pub fn new() -> Self {
        Self {
            raw: vec![UCODE_INVERTED; UCODE_SIZE],
        }
    }

    /// Fetches and decodes the microword at `address`.
    ///
    /// The address is masked to the store size.
    #[inline]
    pub fn fetch(&self, address: u16) -> Microword {
        Microword::decode(self.read(address))
    }

    /// Returns the NEXT field of the word at `address` without a full decode.
    #[inline]
    pub fn next_field(&self, address: u16) -> u16 {
        Microword::next_of(self.read(address))
    }

    /// Reads the logical word at `address` (masked to the store size).
    #[inline]
    pub fn read(&self, address: u16) -> u32 {
        self.raw[(address & UCODE_ADDR_MASK) as usize] ^ UCODE_INVERTED
    }

    /// Writes the logical word at `address` (masked to the store size).
    #[inline]
    pub fn write(&mut self, address: u16, value: u32) {
        self.raw[(address & UCODE_ADDR_MASK) as usize] = value ^ UCODE_INVERTED;
    }

    /// Returns the stored (inverted) form of the word at `address`.
    #[inline]
    pub fn raw_word(&self, address: u16) -> u32 {
        self.raw[(address & UCODE_ADDR_MASK) as usize]
    }

    /// Reads a ROM word.
    ///
    /// # Returns
    ///
    /// `None` if `address` lies outside the ROM pages.
    pub fn read_rom(&self, address: u16) -> Option<u32> {
        ((address as usize) < UCODE_ROM_PAGES * UCODE_PAGE_SIZE).then(|| self.read(address))
    }

    /// Reads a RAM word.
    ///
    /// # Arguments
    ///
    /// * `bank` - RAM page (0-2).
    /// * `word` - Word within the page (0-01777).
    ///
    /// # Returns
    ///
    /// The logical word, or `None` if the bank or word is out of range.
    pub fn read_ram(&self, bank: usize, word: usize) -> Option<u32> {
        Self::ram_address(bank, word).map(|addr| self.read(addr))
    }

    /// Writes a RAM word; out-of-range banks or words are ignored.
    ///
    /// # Arguments
    ///
    /// * `bank` - RAM page (0-2).
    /// * `word` - Word within the page (0-01777).
    /// * `value` - Logical word to store.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored.
    pub fn write_ram(&mut self, bank: usize, word: usize, value: u32) -> bool {
        match Self::ram_address(bank, word) {
            Some(addr) => {
                self.write(addr, value);
                true
            }
            None => false,
        }
    }

    /// Loads logical ROM words starting at address 0.
    ///
    /// # Returns
    ///
    /// The number of words stored; words past the ROM size are ignored.
    pub fn load_rom(&mut self, words: &[u32]) -> usize {
        let n = words.len().min(UCODE_ROM_PAGES * UCODE_PAGE_SIZE);
        for (dst, &w) in self.raw[..n].iter_mut().zip(words) {
            *dst = w ^ UCODE_INVERTED;
        }
        n
    }

    fn ram_address(bank: usize, word: usize) -> Option<u16> {
        (bank < UCODE_RAM_PAGES && word < UCODE_PAGE_SIZE)
            .then(|| UCODE_RAM_BASE + (bank * UCODE_PAGE_SIZE + word) as u16)
    }
}

impl Default for MicrocodeStore {
    fn default() -> Self {
        Self::new()
    }
}
