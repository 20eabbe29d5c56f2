//! Shifter.
//!
//! The shifter sits between L and the R registers. F1 selects its function;
//! any F1 other than the three shift codes passes L through. In the emulator
//! task, F2 `MAGIC` turns the one-bit shifts into double-length shifts through
//! T, and F2 `LOAD DNS` leaves the shifter to the emulator's own F2 handler.

use crate::core::arch::task::Task;
use crate::isa::fields::{F1, F2};

/// The L shifter.
#[derive(Debug)]
pub struct Shifter;

impl Shifter {
    /// Computes the shifter output for one microinstruction.
    ///
    /// # Arguments
    ///
    /// * `f1` - F1 of the current microword.
    /// * `f2` - F2 of the current microword.
    /// * `task` - Task executing the microword.
    /// * `l` - Current L latch.
    /// * `t` - Current T register.
    /// * `previous` - Shifter output of the previous microcycle.
    ///
    /// # Returns
    ///
    /// The new shifter output.
    pub const fn shift(f1: F1, f2: F2, task: Task, l: u16, t: u16, previous: u16) -> u16 {
        let emu = matches!(task, Task::Emu);
        match f1 {
            F1::LLsh1 => {
                if emu && matches!(f2, F2::EMU_MAGIC) {
                    (l << 1) | (t >> 15)
                } else if emu && matches!(f2, F2::EMU_LOAD_DNS) {
                    previous
                } else {
                    l << 1
                }
            }
            F1::LRsh1 => {
                if emu && matches!(f2, F2::EMU_MAGIC) {
                    (l >> 1) | (t << 15)
                } else if emu && matches!(f2, F2::EMU_LOAD_DNS) {
                    previous
                } else {
                    l >> 1
                }
            }
            F1::LLcy8 => l.rotate_left(8),
            _ => l,
        }
    }
}
