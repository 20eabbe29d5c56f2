//! Core microengine implementation.
//!
//! This module contains the CPU, its per-task dispatch tables and scheduler,
//! the architectural state tables (tasks, PROMs, bank registers) and the
//! datapath units (ALU, shifter, control store).

/// Architectural state tables (tasks, PROMs, constant ROM, bank registers).
pub mod arch;

/// CPU core implementation, resets and the microcycle.
pub mod cpu;

/// Per-task bus source and function dispatch tables.
pub mod dispatch;

/// Wakeup arbitration and the two-stage task switch latch.
pub mod scheduler;

/// Datapath units (ALU, shifter, control store).
pub mod units;

pub use self::cpu::Cpu;
