//! Microinstruction Set Definitions.
//!
//! Contains the microword layout, the symbolic values of each field, and the
//! name tables used in traces.
//!
//! # Modules
//!
//! * `microword`: 32-bit microword decode and encode.
//! * `fields`: ALU function, bus source, F1 and F2 enums.
//! * `names`: Task and R register names.
//! * `disasm`: One-line rendering of a microword.

/// Microinstruction disassembler for debug tracing.
pub mod disasm;

/// Field value enums with symbolic names.
pub mod fields;

/// Microword layout, decode and encode.
pub mod microword;

/// Task and register name tables.
pub mod names;
