//! Flat main memory.
//!
//! A zero-latency `MemorySystem`: four banks of 64K words, never stalls.
//! Useful for running microcode that only needs working storage and as
//! the default memory of a `System`.

use crate::soc::traits::MemorySystem;

/// Words in one memory bank.
pub const BANK_WORDS: usize = 1 << 16;

/// Number of memory banks addressable through the bank registers.
pub const BANKS: usize = 4;

/// Flat word-addressed memory with a single MAR.
#[derive(Clone, Debug)]
pub struct FlatMemory {
    words: Vec<u16>,
    mar: u32,
}

impl FlatMemory {
    /// Creates a cleared memory of four banks.
    pub fn new() -> Self {
        Self {
            words: vec![0; BANK_WORDS * BANKS],
            mar: 0,
        }
    }

    /// Returns the current memory address register.
    pub const fn mar(&self) -> u32 {
        self.mar
    }

    /// Reads a word directly, bypassing MAR.
    pub fn peek(&self, address: u32) -> u16 {
        self.words[address as usize % self.words.len()]
    }

    /// Writes a word directly, bypassing MAR.
    pub fn poke(&mut self, address: u32, value: u16) {
        let len = self.words.len();
        self.words[address as usize % len] = value;
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySystem for FlatMemory {
    fn check_load_mar_stall(&mut self, _rsel: u8) -> bool {
        false
    }

    fn check_write_stall(&mut self) -> bool {
        false
    }

    fn check_read_stall(&mut self) -> bool {
        false
    }

    fn read(&mut self) -> u16 {
        self.peek(self.mar)
    }

    fn write(&mut self, value: u16) {
        self.poke(self.mar, value);
    }

    fn load_mar(&mut self, _rsel: u8, address: u32) {
        self.mar = address;
    }
}
