/// Canonical ALU and agreement with the 74181 reference.
pub mod alu;


/// Control store encoding and RAM access.
pub mod store;
