//! Memory bank registers.
//!
//! One 4-bit register per task (a 16x4 RAM), visible to the emulator at
//! MMIO addresses 0177740-0177757. Bits 2-3 select the normal memory bank
//! used by `MAR<-`, bits 0-1 the extended bank used by `XMAR<-`.

use crate::common::constants::{
    BANK_REG_FIRST, BANK_REG_LAST, BANK_REG_MASK, BANK_REG_READ_ONES, TASK_COUNT,
};
use crate::core::arch::task::Task;

/// The sixteen bank registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BankRegisters {
    regs: [u8; TASK_COUNT],
}

impl BankRegisters {
    /// Creates the registers with every bank cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; TASK_COUNT],
        }
    }

    /// Clears every bank register.
    pub const fn reset(&mut self) {
        self.regs = [0; TASK_COUNT];
    }

    /// Returns `true` if `address` falls in the bank register MMIO range.
    #[inline]
    pub const fn contains(address: u32) -> bool {
        address >= BANK_REG_FIRST && address <= BANK_REG_LAST
    }

    /// Reads the bank register selected by the low four address bits.
    ///
    /// # Arguments
    ///
    /// * `address` - MMIO address; bits 0-3 select the task.
    ///
    /// # Returns
    ///
    /// The stored 4 bits with bits 4-15 read as ones.
    pub const fn read(&self, address: u32) -> u16 {
        self.regs[(address & 0o17) as usize] as u16 | BANK_REG_READ_ONES
    }

    /// Writes the bank register selected by the low four address bits.
    ///
    /// # Arguments
    ///
    /// * `address` - MMIO address; bits 0-3 select the task.
    /// * `data` - Value written; only bits 0-3 are stored.
    pub const fn write(&mut self, address: u32, data: u16) {
        self.regs[(address & 0o17) as usize] = (data & BANK_REG_MASK) as u8;
    }

    /// Returns the raw 4-bit value of a task's register.
    #[inline]
    pub const fn get(&self, task: Task) -> u8 {
        self.regs[task.index()]
    }

    /// Returns the normal bank (bits 2-3) of a task.
    #[inline]
    pub const fn normal(&self, task: Task) -> u32 {
        ((self.regs[task.index()] >> 2) & 3) as u32
    }

    /// Returns the extended bank (bits 0-1) of a task.
    #[inline]
    pub const fn extended(&self, task: Task) -> u32 {
        (self.regs[task.index()] & 3) as u32
    }
}
