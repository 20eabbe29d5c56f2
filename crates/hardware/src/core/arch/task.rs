//! Task identifiers and per-task control state.
//!
//! This module defines the sixteen hardware tasks. It provides:
//! 1. **Identification:** The `Task` enum with symbolic names and priorities.
//! 2. **Context:** `TaskState`, the MPC and next-address extension saved at a switch.
//! 3. **Attributes:** RAM-related flag, S register bank and activation notification.

use std::fmt;

use crate::isa::names::TASK_NAMES;

/// One of the sixteen microcode tasks.
///
/// The numeric value is also the task's priority: higher numbers win
/// arbitration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Task {
    /// Emulator task (lowest priority, always runnable).
    #[default]
    Emu = 0,
    /// Unassigned task 1.
    Task01 = 1,
    /// Unassigned task 2.
    Task02 = 2,
    /// Unassigned task 3.
    Task03 = 3,
    /// Disk sector task.
    Ksec = 4,
    /// Unassigned task 5.
    Task05 = 5,
    /// Unassigned task 6.
    Task06 = 6,
    /// Ethernet task.
    Ether = 7,
    /// Memory refresh task.
    Mrt = 8,
    /// Display word task.
    Dwt = 9,
    /// Cursor task.
    Curt = 10,
    /// Display horizontal task.
    Dht = 11,
    /// Display vertical task.
    Dvt = 12,
    /// Parity error task.
    Part = 13,
    /// Disk word task.
    Kwd = 14,
    /// Unassigned task 017.
    Task17 = 15,
}

impl Task {
    /// All tasks in priority order, lowest first.
    pub const ALL: [Self; 16] = [
        Self::Emu,
        Self::Task01,
        Self::Task02,
        Self::Task03,
        Self::Ksec,
        Self::Task05,
        Self::Task06,
        Self::Ether,
        Self::Mrt,
        Self::Dwt,
        Self::Curt,
        Self::Dht,
        Self::Dvt,
        Self::Part,
        Self::Kwd,
        Self::Task17,
    ];

    /// Returns the task with the given number; only the low four bits are used.
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx & 0o17]
    }

    /// Returns the task number (0-15).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the wakeup mask bit of this task.
    #[inline]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Returns the symbolic name of the task.
    pub const fn name(self) -> &'static str {
        TASK_NAMES[self as usize]
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Control state kept per task.
///
/// The MPC and next-address extension are only meaningful while the task is
/// not running; the execution loop owns the live values of the current task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskState {
    /// Saved next microinstruction address.
    pub mpc: u16,
    /// Saved next-address extension (page bits and pending branch bits).
    pub next2: u16,
    /// Task loads M and S[bank][0] along with L.
    pub ram_related: bool,
    /// Call the extension's `activated` hook when the task is switched in.
    pub notify_active: bool,
    /// S register bank used by this task.
    pub s_bank: u8,
}
