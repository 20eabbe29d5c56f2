//! System components around the microengine.
//!
//! This module organizes the collaborators the engine drives: main memory,
//! peripherals, and the task extension, plus the `System` that owns them.

/// System construction.
pub mod builder;

/// Flat zero-latency main memory.
pub mod memory;

/// Collaborator trait definitions.
pub mod traits;

pub use builder::System;
pub use traits::{MemorySystem, NoExtension, NullPeripherals, Peripherals, TaskExtension};
