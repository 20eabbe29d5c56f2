//! Bus-source, F1 and F2 dispatch network.
//!
//! This module holds the per-task tables that give each BS, F1 and F2 code
//! its side effects. It provides:
//! 1. **Operations:** A closed set of tagged `Operation` values instead of
//!    function pointers; `Unset` marks slots a task must fill itself.
//! 2. **Slots:** An early (before the ALU) and a late (after the shifter)
//!    operation per code.
//! 3. **Defaults:** The standard operations every task starts with at cold reset.
//!
//! Task extensions overwrite slots with `set_bs`, `set_f1` and `set_f2`,
//! typically installing `Operation::Extension(id)` for device-specific codes.

use std::fmt;

use crate::common::constants::TASK_COUNT;
use crate::core::arch::task::Task;
use crate::isa::fields::{BusSource, F1, F2};

/// Phase of a microcycle an operation runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the ALU; may drive the bus.
    Early,
    /// After the shifter; may consume the ALU, shifter and bus.
    Late,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Early => "early",
            Self::Late => "late",
        })
    }
}

/// Microword field a dispatch slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Bus source field.
    BusSource,
    /// Special function 1.
    F1,
    /// Special function 2.
    F2,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BusSource => "bs",
            Self::F1 => "f1",
            Self::F2 => "f2",
        })
    }
}

/// Side effect of a dispatch slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Does nothing.
    #[default]
    Nop,
    /// Task-specific slot left unfilled; invoking it is fatal.
    Unset,
    /// `BUS &= R[RSEL]`.
    ReadR,
    /// `BUS &= 0` (early half of load R).
    LoadRBus,
    /// `R[RSEL] = SHIFTER` unless F2 is the emulator's `LOAD DNS`.
    LoadR,
    /// `BUS &= MD`.
    ReadMd,
    /// `BUS &= MOUSE`.
    Mouse,
    /// `BUS &= DISP`.
    Disp,
    /// Load MAR with the task's bank bits and the ALU output.
    LoadMar,
    /// Arbitrate the highest-priority awake task.
    Arbitrate,
    /// Clear the current task's wakeup bit.
    Block,
    /// `NEXT2 |= BUS == 0`.
    BranchBusZero,
    /// `NEXT2 |= SHIFTER < 0`.
    BranchShifterNegative,
    /// `NEXT2 |= SHIFTER == 0`.
    BranchShifterZero,
    /// `NEXT2 |= BUS[6-15]`.
    BranchBus,
    /// `NEXT2 |= LALUC0`.
    BranchCarry,
    /// Deliver the bus to memory, unless F1 is `load_mar` (XMAR).
    LoadMd,
    /// Read control store RAM/ROM at the start of the next microcycle.
    RequestRdRam,
    /// Write control store RAM after the ALU of the next microcycle.
    RequestWrtRam,
    /// Delegate to the installed task extension with this identifier.
    Extension(u16),
}

/// Early and late operation of one field code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    /// Runs before the ALU.
    pub early: Operation,
    /// Runs after the shifter.
    pub late: Operation,
}

impl Slot {
    /// Creates a slot from its two operations.
    pub const fn new(early: Operation, late: Operation) -> Self {
        Self { early, late }
    }

    /// A slot with neither phase filled.
    pub const UNSET: Self = Self::new(Operation::Unset, Operation::Unset);

    /// A slot doing nothing in either phase.
    pub const NOP: Self = Self::new(Operation::Nop, Operation::Nop);

    /// Returns the operation for `phase`.
    #[inline]
    pub const fn get(&self, phase: Phase) -> Operation {
        match phase {
            Phase::Early => self.early,
            Phase::Late => self.late,
        }
    }
}

/// Per-task dispatch tables for the three function fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTable {
    bs: [[Slot; 8]; TASK_COUNT],
    f1: [[Slot; 16]; TASK_COUNT],
    f2: [[Slot; 16]; TASK_COUNT],
}

impl DispatchTable {
    /// Creates a table with every slot unset.
    pub const fn new() -> Self {
        Self {
            bs: [[Slot::UNSET; 8]; TASK_COUNT],
            f1: [[Slot::UNSET; 16]; TASK_COUNT],
            f2: [[Slot::UNSET; 16]; TASK_COUNT],
        }
    }

    /// Installs the standard operations for one task.
    ///
    /// BS 3/4, F1 `block` and the task-specific F1/F2 codes 010-017 are left
    /// `Unset`; F1 shift codes are handled by the shifter and stay `Nop`.
    ///
    /// # Arguments
    ///
    /// * `task` - The task whose tables are reset.
    pub const fn install_defaults(&mut self, task: Task) {
        use Operation::{
            Arbitrate, BranchBus, BranchBusZero, BranchCarry, BranchShifterNegative,
            BranchShifterZero, Disp, LoadMar, LoadMd, LoadR, LoadRBus, Mouse, Nop, ReadMd, ReadR,
        };

        let t = task.index();
        self.bs[t] = [
            Slot::new(ReadR, Nop),
            Slot::new(LoadRBus, LoadR),
            Slot::NOP,
            Slot::UNSET,
            Slot::UNSET,
            Slot::new(ReadMd, Nop),
            Slot::new(Mouse, Nop),
            Slot::new(Disp, Nop),
        ];

        let mut f1 = [Slot::UNSET; 16];
        f1[F1::Nop as usize] = Slot::NOP;
        f1[F1::LoadMar as usize] = Slot::new(Nop, LoadMar);
        f1[F1::Task as usize] = Slot::new(Arbitrate, Nop);
        f1[F1::LLsh1 as usize] = Slot::NOP;
        f1[F1::LRsh1 as usize] = Slot::NOP;
        f1[F1::LLcy8 as usize] = Slot::NOP;
        f1[F1::Const as usize] = Slot::NOP;
        self.f1[t] = f1;

        let mut f2 = [Slot::UNSET; 16];
        f2[F2::Nop as usize] = Slot::NOP;
        f2[F2::BusEqZero as usize] = Slot::new(Nop, BranchBusZero);
        f2[F2::ShifterLtZero as usize] = Slot::new(Nop, BranchShifterNegative);
        f2[F2::ShifterEqZero as usize] = Slot::new(Nop, BranchShifterZero);
        f2[F2::Bus as usize] = Slot::new(Nop, BranchBus);
        f2[F2::AluCy as usize] = Slot::new(Nop, BranchCarry);
        f2[F2::LoadMd as usize] = Slot::new(Nop, LoadMd);
        f2[F2::Const as usize] = Slot::NOP;
        self.f2[t] = f2;
    }

    /// Returns the slot of a bus source for a task.
    #[inline]
    pub const fn bs(&self, task: Task, bs: BusSource) -> Slot {
        self.bs[task.index()][bs as usize]
    }

    /// Returns the slot of an F1 code for a task.
    #[inline]
    pub const fn f1(&self, task: Task, f1: F1) -> Slot {
        self.f1[task.index()][f1 as usize]
    }

    /// Returns the slot of an F2 code for a task.
    #[inline]
    pub const fn f2(&self, task: Task, f2: F2) -> Slot {
        self.f2[task.index()][f2 as usize]
    }

    /// Replaces the slot of a bus source for a task.
    pub const fn set_bs(&mut self, task: Task, bs: BusSource, early: Operation, late: Operation) {
        self.bs[task.index()][bs as usize] = Slot::new(early, late);
    }

    /// Replaces the slot of an F1 code for a task.
    pub const fn set_f1(&mut self, task: Task, f1: F1, early: Operation, late: Operation) {
        self.f1[task.index()][f1 as usize] = Slot::new(early, late);
    }

    /// Replaces the slot of an F2 code for a task.
    pub const fn set_f2(&mut self, task: Task, f2: F2, early: Operation, late: Operation) {
        self.f2[task.index()][f2 as usize] = Slot::new(early, late);
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
