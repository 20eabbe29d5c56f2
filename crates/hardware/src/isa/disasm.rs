//! Microinstruction Disassembler.
//!
//! Converts a decoded microword into a one-line summary for debug tracing,
//! logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use alto2_core::isa::disasm::disassemble;
//! use alto2_core::isa::microword::Microword;
//!
//! let text = disassemble(0, 0o17, &Microword::decode(0o100_000));
//! assert!(text.starts_with("emu-00017:"));
//! ```

use crate::isa::microword::Microword;
use crate::isa::names::{register_name, task_name};

/// Renders a microinstruction in the form used by the trace log.
///
/// # Arguments
///
/// * `task` - Task number executing the word.
/// * `mpc` - Control store address of the word.
/// * `mir` - The decoded microword.
///
/// # Returns
///
/// A string such as `emu-00017: r:pc af:bus bs:read_r f1:nop f2:nop t:0 l:1 next:00020`.
pub fn disassemble(task: usize, mpc: u16, mir: &Microword) -> String {
    format!(
        "{}-{:05o}: r:{} af:{} bs:{} f1:{} f2:{} t:{} l:{} next:{:05o}",
        task_name(task),
        mpc,
        register_name(mir.rsel as usize),
        mir.aluf,
        mir.bs,
        mir.f1,
        mir.f2,
        u8::from(mir.load_t),
        u8::from(mir.load_l),
        mir.next
    )
}
