//! Datapath Register File.
//!
//! This module provides the `RegisterFile` struct holding the programmer-visible
//! datapath latches. It provides:
//! 1. **R Registers:** 32 general registers addressed by RSEL.
//! 2. **S Registers:** 8 banks of 32 words, bank selected per task.
//! 3. **Latches:** L with its latched carry, T, and the RAM-board M latch.

use crate::common::constants::{R_COUNT, S_BANKS, S_COUNT};

/// Datapath registers shared by all tasks.
///
/// Tasks are not given private copies; the microcode of every task reads and
/// writes the same R, L, T and M latches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    r: [u16; R_COUNT],
    s: [[u16; S_COUNT]; S_BANKS],
    /// L latch, loaded from the ALU when LOADL is set.
    pub l: u16,
    /// ALU carry latched together with L (LALUC0).
    pub laluc0: bool,
    /// T register, loaded from the ALU or the bus when LOADT is set.
    pub t: u16,
    /// M latch on the RAM board (loaded with L for RAM-related tasks).
    pub m: u16,
}

impl RegisterFile {
    /// Creates a new register file with all registers cleared.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` with every register and latch at zero.
    pub const fn new() -> Self {
        Self {
            r: [0; R_COUNT],
            s: [[0; S_COUNT]; S_BANKS],
            l: 0,
            laluc0: false,
            t: 0,
            m: 0,
        }
    }

    /// Reads an R register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low five bits are used.
    ///
    /// # Returns
    ///
    /// The 16-bit register value.
    #[inline]
    pub const fn read_r(&self, idx: usize) -> u16 {
        self.r[idx % R_COUNT]
    }

    /// Writes an R register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index; only the low five bits are used.
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub const fn write_r(&mut self, idx: usize, val: u16) {
        self.r[idx % R_COUNT] = val;
    }

    /// Reads an S register.
    ///
    /// # Arguments
    ///
    /// * `bank` - S register bank (0-7).
    /// * `idx` - Register index within the bank (0-31).
    ///
    /// # Returns
    ///
    /// The 16-bit register value.
    #[inline]
    pub const fn read_s(&self, bank: usize, idx: usize) -> u16 {
        self.s[bank % S_BANKS][idx % S_COUNT]
    }

    /// Writes an S register.
    ///
    /// # Arguments
    ///
    /// * `bank` - S register bank (0-7).
    /// * `idx` - Register index within the bank (0-31).
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub const fn write_s(&mut self, bank: usize, idx: usize, val: u16) {
        self.s[bank % S_BANKS][idx % S_COUNT] = val;
    }

    /// Prints the R registers and latches to stdout.
    ///
    /// Four registers per line, named after the emulator's register usage.
    pub fn dump(&self) {
        for (i, chunk) in self.r.chunks(4).enumerate() {
            let line: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(j, v)| {
                    let idx = i * 4 + j;
                    format!("{:>8}={v:06o}", crate::isa::names::register_name(idx))
                })
                .collect();
            println!("{}", line.join(" "));
        }
        println!(
            "       L={:06o} T={:06o} M={:06o} LALUC0={}",
            self.l,
            self.t,
            self.m,
            u8::from(self.laluc0)
        );
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
