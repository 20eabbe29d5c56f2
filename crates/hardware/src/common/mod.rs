//! Common types and constants used throughout the microcode engine.
//!
//! This module provides building blocks shared across all components of the
//! emulator. It includes:
//! 1. **Constants:** Task count, register geometry, control store layout, and timing.
//! 2. **Error Handling:** The fatal `CpuError` type.
//! 3. **Register Management:** The shared datapath register file.

/// Machine-wide constants.
pub mod constants;

/// Fatal error type.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{TASK_COUNT, UCODE_SIZE};
pub use error::CpuError;
pub use reg::RegisterFile;
