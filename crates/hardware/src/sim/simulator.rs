//! Simulator: owns the CPU and its collaborators side by side.
//!
//! The `Cpu` holds all microengine state while the `System` holds the
//! boxed memory, peripherals and task extension. Keeping them as sibling
//! fields lets every microcycle borrow both mutably.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::common::error::CpuError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::task::Task;
use crate::sim::loader::MicrocodeImage;
use crate::soc::System;

/// Top-level simulator: CPU state plus the system it drives.
#[derive(Debug)]
pub struct Simulator {
    /// Microengine state (registers, control store, tasks, stats).
    pub cpu: Cpu,
    /// Memory, peripherals, task extension and leave flag.
    pub system: System,
}

impl Simulator {
    /// Creates a simulator and performs a cold reset.
    ///
    /// # Arguments
    ///
    /// * `system` - Collaborators; the task extension is installed at reset.
    /// * `config` - Timing, reset and trace configuration.
    pub fn new(mut system: System, config: &Config) -> Self {
        let mut cpu = Cpu::new(config);
        cpu.cold_reset(&mut system);
        Self { cpu, system }
    }

    /// Loads microcode and constants, then cold resets so the new
    /// reset addresses and task initializers take effect.
    ///
    /// # Returns
    ///
    /// The number of microwords written.
    pub fn load(&mut self, image: &MicrocodeImage) -> usize {
        let words = image.apply(&mut self.cpu);
        self.cpu.cold_reset(&mut self.system);
        words
    }

    /// Runs up to `budget` microcycles.
    ///
    /// # Errors
    ///
    /// The fatal `CpuError` that stopped the run.
    pub fn run(&mut self, budget: u64) -> Result<u64, CpuError> {
        self.cpu.run(&mut self.system, budget)
    }

    /// Software reset; returns the task latched to run next.
    pub fn soft_reset(&mut self) -> Task {
        self.cpu.soft_reset()
    }

    /// Returns a handle that stops `run` at the next microcycle.
    pub fn leave_handle(&self) -> Arc<AtomicBool> {
        self.system.leave_handle()
    }
}
