//! Collaborator traits.
//!
//! This module defines the interfaces the microengine drives but does not
//! implement. It provides:
//! 1. **Memory:** `MemorySystem`, the main memory with its MAR and stall logic.
//! 2. **Peripherals:** `Peripherals`, the display, unload and mouse hooks.
//! 3. **Task Extensions:** `TaskExtension`, the per-task initializers and the
//!    device-specific bus sources and functions they install.
//!
//! All implementors must be `Send` so a `Simulator` can move to a worker thread.

use crate::common::constants::BUS_IDLE;
use crate::common::error::CpuError;
use crate::core::Cpu;
use crate::core::arch::task::Task;
use crate::core::dispatch::Phase;

/// Main memory as seen by the microengine.
pub trait MemorySystem: Send {
    /// Returns `true` if loading MAR through `rsel` must wait this cycle.
    fn check_load_mar_stall(&mut self, rsel: u8) -> bool;
    /// Returns `true` if delivering memory data must wait this cycle.
    fn check_write_stall(&mut self) -> bool;
    /// Returns `true` if reading memory data must wait this cycle.
    fn check_read_stall(&mut self) -> bool;
    /// Reads the memory data of the current reference.
    fn read(&mut self) -> u16;
    /// Writes memory data for the current reference.
    fn write(&mut self, value: u16);
    /// Starts a memory reference at `address` (bank bits 16-17 included).
    fn load_mar(&mut self, rsel: u8, address: u32);
}

/// Display, unload and pointing device hooks.
pub trait Peripherals: Send {
    /// Runs the display state machine once per display word slot.
    ///
    /// # Returns
    ///
    /// The next display state.
    fn display_state(&mut self, state: u16) -> u16;

    /// Unloads one display word.
    ///
    /// # Returns
    ///
    /// The next word and the picoseconds until it is due, or `None` to stop unloading.
    fn unload_word(&mut self, word: u16) -> Option<(u16, i64)>;

    /// Returns the mouse bus source value.
    fn mouse(&mut self) -> u16;

    /// Returns the displacement bus source value, or `None` if no device drives it.
    fn disp(&mut self) -> Option<u16> {
        None
    }
}

/// Device-specific task behaviour.
///
/// `install` runs once per cold reset after the default dispatch entries are
/// in place; it may overwrite any slot, mark tasks RAM-related, select S
/// register banks and ask for activation notifications.
pub trait TaskExtension: Send {
    /// Installs the extension's dispatch slots and task attributes.
    fn install(&mut self, cpu: &mut Cpu);

    /// Executes an `Operation::Extension(id)` slot.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier the extension installed.
    /// * `phase` - Phase the slot was invoked in.
    /// * `cpu` - The engine, positioned inside the current microcycle.
    /// * `memory` - Main memory.
    ///
    /// # Errors
    ///
    /// Any `CpuError` stops the run loop.
    fn execute(
        &mut self,
        id: u16,
        phase: Phase,
        cpu: &mut Cpu,
        memory: &mut dyn MemorySystem,
    ) -> Result<(), CpuError>;

    /// Called when a task whose `notify_active` flag is set is switched in.
    fn activated(&mut self, _task: Task, _cpu: &mut Cpu) {}
}

/// Peripherals that drive nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPeripherals;

impl Peripherals for NullPeripherals {
    fn display_state(&mut self, state: u16) -> u16 {
        state
    }

    fn unload_word(&mut self, _word: u16) -> Option<(u16, i64)> {
        None
    }

    fn mouse(&mut self) -> u16 {
        BUS_IDLE
    }
}

/// A task extension that installs nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExtension;

impl TaskExtension for NoExtension {
    fn install(&mut self, _cpu: &mut Cpu) {}

    fn execute(
        &mut self,
        id: u16,
        _phase: Phase,
        cpu: &mut Cpu,
        _memory: &mut dyn MemorySystem,
    ) -> Result<(), CpuError> {
        Err(CpuError::Extension {
            task: cpu.current_task(),
            mpc: cpu.mpc,
            message: format!("no extension operation {id}"),
        })
    }
}
