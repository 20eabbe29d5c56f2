//! Architectural components of the microcode engine.
//!
//! This module contains the state that is neither datapath nor control store.
//! It includes the following modules:
//! 1. **Tasks:** Task identifiers and per-task saved context.
//! 2. **Bank Registers:** The memory-mapped per-task bank selects.
//! 3. **PROMs:** Fixed PROM tables and the constant ROM.

/// Memory bank registers.
pub mod bank;

/// PROM tables and constant ROM.
pub mod prom;

/// Task identifiers and per-task state.
pub mod task;
