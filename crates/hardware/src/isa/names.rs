//! Task and register name tables.
//!
//! Names follow the standard microcode assembler conventions: tasks are
//! named after the device they serve, R registers after their use by the
//! emulator and device microcode.

/// Symbolic task names, indexed by task number.
pub const TASK_NAMES: [&str; 16] = [
    "emu", "task01", "task02", "task03", "ksec", "task05", "task06", "ether", "mrt", "dwt",
    "curt", "dht", "dvt", "part", "kwd", "task17",
];

/// Symbolic R register names, indexed by RSEL.
pub const REGISTER_NAMES: [&str; 32] = [
    "ac(3)", "ac(2)", "ac(1)", "ac(0)", "nww", "r05", "pc", "r07", "xh", "r11", "ecntr", "epntr",
    "r14", "r15", "r16", "r17", "curx", "curdata", "cba", "aecl", "slc", "mtemp", "htab",
    "ypos", "dwa", "kwdctw", "cksumrw", "knmarw", "dcbr", "dwax", "mask", "r37",
];

/// Returns the name of a task, or `"task??"` for an out-of-range index.
#[inline]
pub fn task_name(task: usize) -> &'static str {
    TASK_NAMES.get(task).copied().unwrap_or("task??")
}

/// Returns the name of an R register, or `"r??"` for an out-of-range index.
#[inline]
pub fn register_name(idx: usize) -> &'static str {
    REGISTER_NAMES.get(idx).copied().unwrap_or("r??")
}
