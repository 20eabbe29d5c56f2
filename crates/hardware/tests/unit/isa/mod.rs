/// Disassembly format.
pub mod disasm;
