//! Fatal Engine Errors.
//!
//! This module defines the errors that stop the microcode engine. It provides:
//! 1. **Dispatch Errors:** Invoking a task-specific slot no task initializer filled.
//! 2. **Scheduling Errors:** A task switch requested while no task wants service.
//! 3. **Extension Errors:** Failures reported by an installed task extension.
//!
//! Degenerate inputs (undefined ALU functions, out-of-range control store
//! addresses) and memory stalls are not errors and never surface here.

use thiserror::Error;

use crate::core::arch::task::Task;
use crate::core::dispatch::{Family, Phase};

/// Fatal condition raised while executing a microinstruction.
///
/// The run loop stops on the first error after saving the current task's
/// MPC and next-address extension, so the machine state stays inspectable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// A dispatch slot marked `Unset` was invoked.
    ///
    /// Task-specific bus sources and functions start out unset and must be
    /// filled by the task extension before microcode uses them.
    #[error("bad {phase} {family} operation for task {task}, mpc:{mpc:05o} {family}:{name}")]
    UnsetOperation {
        /// Phase (early or late) the slot belongs to.
        phase: Phase,
        /// Field family (BS, F1 or F2) of the slot.
        family: Family,
        /// Task whose table held the unset slot.
        task: Task,
        /// Address of the microinstruction being executed.
        mpc: u16,
        /// Symbolic name of the field value.
        name: &'static str,
    },

    /// The task-switch function found an empty wakeup mask.
    #[error("no tasks requesting service (task {task}, mpc:{mpc:05o})")]
    NoTaskRequestingService {
        /// Task that executed the task-switch function.
        task: Task,
        /// Address of the microinstruction being executed.
        mpc: u16,
    },

    /// A task extension reported a failure.
    #[error("task {task} extension failed at mpc:{mpc:05o}: {message}")]
    Extension {
        /// Task on whose behalf the extension ran.
        task: Task,
        /// Address of the microinstruction being executed.
        mpc: u16,
        /// Extension-provided description.
        message: String,
    },
}
