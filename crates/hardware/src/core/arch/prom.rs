//! Fixed PROM tables.
//!
//! This module holds the programmable ROMs read by the control board.
//! It provides:
//! 1. **Control PROM:** `ctl2k_u38`, the task reset addresses.
//! 2. **Constant ROM:** The 256-word constant memory gated onto the bus.
//!
//! The tables are immutable once loaded and are owned by each `Cpu`.

use crate::common::constants::{CONST_PROM_SIZE, UCODE_PAGE_MASK};
use crate::core::arch::task::Task;

const CTL2K_U38: [u8; 32] = [
    0o367, 0o353, 0o323, 0o315, 0o265, 0o251, 0o221, 0o216,
    0o166, 0o152, 0o122, 0o114, 0o064, 0o050, 0o020, 0o017,
    0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000,
    0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000, 0o000,
];

/// PROM contents loaded at cold reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proms {
    /// Control board PROM u38: task reset address (bits 4-7) and priority
    /// read-back bits (0-3).
    pub ctl2k_u38: [u8; 32],
}

impl Proms {
    /// Returns the PROM set with the stock contents.
    pub const fn new() -> Self {
        Self {
            ctl2k_u38: CTL2K_U38,
        }
    }

    /// Returns the in-page address a task starts at after a reset.
    ///
    /// The u38 PROM stores the complement of the task number in its upper
    /// nibble, so task N starts at address N.
    ///
    /// # Arguments
    ///
    /// * `task` - The task being reset.
    ///
    /// # Returns
    ///
    /// The reset MPC, before the RAM base is applied.
    #[inline]
    pub const fn reset_mpc(&self, task: Task) -> u16 {
        ((self.ctl2k_u38[task.index()] >> 4) ^ 0o17) as u16 & UCODE_PAGE_MASK
    }
}

impl Default for Proms {
    fn default() -> Self {
        Self::new()
    }
}

/// The constant memory addressed by RSEL and BS.
///
/// Unloaded words read as all ones, so gating them onto the bus is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantRom {
    words: [u16; CONST_PROM_SIZE],
}

impl ConstantRom {
    /// Creates a constant ROM with every word set to 0177777.
    pub const fn new() -> Self {
        Self {
            words: [0o177777; CONST_PROM_SIZE],
        }
    }

    /// Loads constant words starting at address 0.
    ///
    /// # Arguments
    ///
    /// * `words` - Constant words; entries past the ROM size are ignored.
    ///
    /// # Returns
    ///
    /// The number of words stored.
    pub fn load(&mut self, words: &[u16]) -> usize {
        let n = words.len().min(CONST_PROM_SIZE);
        self.words[..n].copy_from_slice(&words[..n]);
        n
    }

    /// Returns the constant for an RSEL/BS pair (address `8 * rsel + bs`).
    #[inline]
    pub const fn get(&self, rsel: u8, bs: u8) -> u16 {
        self.words[(8 * (rsel as usize & 0o37) + (bs as usize & 7)) % CONST_PROM_SIZE]
    }
}

impl Default for ConstantRom {
    fn default() -> Self {
        Self::new()
    }
}
