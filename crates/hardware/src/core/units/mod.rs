//! Execution units and functional components.
//!
//! This module contains the datapath units of the microengine: the ALU, the
//! L shifter, and the microcode control store.

/// Arithmetic Logic Unit.
pub mod alu;

/// L shifter.
pub mod shifter;

/// Microcode ROM/RAM control store.
pub mod store;
