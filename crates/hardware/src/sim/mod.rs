//! Simulation front end.
//!
//! Provides microcode image loading and the `Simulator` that pairs a `Cpu`
//! with its `System`.

/// Microcode and constant ROM images.
pub mod loader;

/// CPU plus system container.
pub mod simulator;

pub use loader::{LoadError, MicrocodeImage};
pub use simulator::Simulator;
