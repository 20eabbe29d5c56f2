//! Xerox Alto II microengine emulator library.
//!
//! This crate implements a cycle-accurate model of a sixteen-task microcoded
//! processor with the following:
//! 1. **Core:** Microcycle execution, task scheduler, ALU, shifter and the
//!    early/late bus source and function dispatch tables.
//! 2. **Control Store:** Microcode ROM/RAM, PROMs and the constant ROM.
//! 3. **ISA:** Microword decode, field enums, name tables and disassembly.
//! 4. **SoC:** Collaborator traits for memory, peripherals and task extensions.
//! 5. **Simulation:** Image loading, configuration and statistics.

/// Common types and constants (geometry, errors, register file).
pub mod common;
/// Simulator configuration (defaults, timing, reset mode, tracing).
pub mod config;
/// CPU core (execution, dispatch, scheduler, units, architectural tables).
pub mod core;
/// Microinstruction set (microword, fields, names, disassembly).
pub mod isa;
/// Microcode loading and the simulator container.
pub mod sim;
/// System collaborators (builder, memory, traits).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, control store, tasks and stats.
pub use crate::core::Cpu;
/// Simulator pairing a `Cpu` with its `System`.
pub use crate::sim::Simulator;
/// Top-level system (memory, peripherals, task extension); construct with `System::new`.
pub use crate::soc::System;
