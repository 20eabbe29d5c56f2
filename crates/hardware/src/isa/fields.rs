//! Microinstruction Field Values.
//!
//! This module defines one enum per decoded microword field. It provides:
//! 1. **ALU Functions:** The 16 ALUF codes and which of them load T from the ALU.
//! 2. **Bus Sources:** The 8 BS codes.
//! 3. **F1 / F2 Functions:** The 16 codes of each special-function field.
//! 4. **Names:** The symbolic name of every code, used in traces and errors.
//!
//! Every field is fully decodable: each bit pattern maps to exactly one variant.

use std::fmt;

/// ALU function selected by the ALUF field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluFunction {
    /// `ALU <- BUS`.
    Bus = 0,
    /// `ALU <- T`.
    T = 1,
    /// `ALU <- BUS | T`.
    BusOrT = 2,
    /// `ALU <- BUS & T`.
    BusAndT = 3,
    /// `ALU <- BUS ^ T`.
    BusXorT = 4,
    /// `ALU <- BUS + 1`.
    BusPlus1 = 5,
    /// `ALU <- BUS - 1`.
    BusMinus1 = 6,
    /// `ALU <- BUS + T`.
    BusPlusT = 7,
    /// `ALU <- BUS - T`.
    BusMinusT = 8,
    /// `ALU <- BUS - T - 1`.
    BusMinusTMinus1 = 9,
    /// `ALU <- BUS + T + 1`.
    BusPlusTPlus1 = 10,
    /// `ALU <- BUS + SKIP`.
    BusPlusSkip = 11,
    /// `ALU <- BUS & T`, with T loaded from the ALU.
    BusAndTAluT = 12,
    /// `ALU <- BUS & ~T`.
    BusAndNotT = 13,
    /// Undefined code 14; yields 0.
    Undefined14 = 14,
    /// Undefined code 15; yields 0177777.
    Undefined15 = 15,
}

const ALU_NAMES: [&str; 16] = [
    "bus",
    "t",
    "bus or t",
    "bus and t",
    "bus xor t",
    "bus + 1",
    "bus - 1",
    "bus + t",
    "bus - t",
    "bus - t - 1",
    "bus + t + 1",
    "bus + skip",
    "bus, t",
    "bus and not t",
    "0 (undef)",
    "0 (undef)",
];

impl AluFunction {
    const ALL: [Self; 16] = [
        Self::Bus,
        Self::T,
        Self::BusOrT,
        Self::BusAndT,
        Self::BusXorT,
        Self::BusPlus1,
        Self::BusMinus1,
        Self::BusPlusT,
        Self::BusMinusT,
        Self::BusMinusTMinus1,
        Self::BusPlusTPlus1,
        Self::BusPlusSkip,
        Self::BusAndTAluT,
        Self::BusAndNotT,
        Self::Undefined14,
        Self::Undefined15,
    ];

    /// Decodes the low four bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0o17) as usize]
    }

    /// Returns the 4-bit field value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` if T is loaded from the ALU output rather than the bus.
    pub const fn t_from_alu(self) -> bool {
        matches!(
            self,
            Self::Bus
                | Self::BusOrT
                | Self::BusPlus1
                | Self::BusMinus1
                | Self::BusPlusTPlus1
                | Self::BusPlusSkip
                | Self::BusAndTAluT
        )
    }

    /// Returns the symbolic name of the function.
    pub const fn name(self) -> &'static str {
        ALU_NAMES[self as usize]
    }
}

impl fmt::Display for AluFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bus source selected by the BS field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BusSource {
    /// Drive the bus from `R[RSEL]`.
    ReadR = 0,
    /// Load `R[RSEL]` from the shifter; the bus reads 0.
    LoadR = 1,
    /// No source drives the bus.
    NoSource = 2,
    /// Task-specific source 3.
    Task3 = 3,
    /// Task-specific source 4.
    Task4 = 4,
    /// Drive the bus from memory data.
    ReadMd = 5,
    /// Drive the bus from the mouse.
    Mouse = 6,
    /// Drive the bus from the instruction displacement.
    Disp = 7,
}

const BS_NAMES: [&str; 8] = [
    "read_r", "load_r", "no_source", "task_3", "task_4", "read_md", "mouse", "disp",
];

impl BusSource {
    const ALL: [Self; 8] = [
        Self::ReadR,
        Self::LoadR,
        Self::NoSource,
        Self::Task3,
        Self::Task4,
        Self::ReadMd,
        Self::Mouse,
        Self::Disp,
    ];

    /// Decodes the low three bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 7) as usize]
    }

    /// Returns the 3-bit field value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the symbolic name of the source.
    pub const fn name(self) -> &'static str {
        BS_NAMES[self as usize]
    }
}

impl fmt::Display for BusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Special function 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum F1 {
    /// No function.
    Nop = 0,
    /// Load the memory address register from the ALU.
    LoadMar = 1,
    /// Arbitrate the next task.
    Task = 2,
    /// Block the current task (task-specific).
    Block = 3,
    /// Shifter output is L shifted left by one.
    LLsh1 = 4,
    /// Shifter output is L shifted right by one.
    LRsh1 = 5,
    /// Shifter output is L cycled by eight.
    LLcy8 = 6,
    /// Put a constant on the bus.
    Const = 7,
    /// Task-specific function 010.
    Task10 = 0o10,
    /// Task-specific function 011.
    Task11 = 0o11,
    /// Task-specific function 012.
    Task12 = 0o12,
    /// Task-specific function 013.
    Task13 = 0o13,
    /// Task-specific function 014.
    Task14 = 0o14,
    /// Task-specific function 015.
    Task15 = 0o15,
    /// Task-specific function 016.
    Task16 = 0o16,
    /// Task-specific function 017.
    Task17 = 0o17,
}

const F1_NAMES: [&str; 16] = [
    "nop", "load_mar", "task", "block", "l_lsh_1", "l_rsh_1", "l_lcy_8", "const", "task_10",
    "task_11", "task_12", "task_13", "task_14", "task_15", "task_16", "task_17",
];

impl F1 {
    const ALL: [Self; 16] = [
        Self::Nop,
        Self::LoadMar,
        Self::Task,
        Self::Block,
        Self::LLsh1,
        Self::LRsh1,
        Self::LLcy8,
        Self::Const,
        Self::Task10,
        Self::Task11,
        Self::Task12,
        Self::Task13,
        Self::Task14,
        Self::Task15,
        Self::Task16,
        Self::Task17,
    ];

    /// Decodes the low four bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0o17) as usize]
    }

    /// Returns the 4-bit field value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the symbolic name of the function.
    pub const fn name(self) -> &'static str {
        F1_NAMES[self as usize]
    }
}

impl fmt::Display for F1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Special function 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum F2 {
    /// No function.
    Nop = 0,
    /// Branch if the bus is zero.
    BusEqZero = 1,
    /// Branch if the shifter output is negative.
    ShifterLtZero = 2,
    /// Branch if the shifter output is zero.
    ShifterEqZero = 3,
    /// Branch on bus bits 6-15.
    Bus = 4,
    /// Branch on the latched ALU carry.
    AluCy = 5,
    /// Deliver the bus to memory.
    LoadMd = 6,
    /// Put a constant on the bus.
    Const = 7,
    /// Task-specific function 010.
    Task10 = 0o10,
    /// Task-specific function 011.
    Task11 = 0o11,
    /// Task-specific function 012.
    Task12 = 0o12,
    /// Task-specific function 013.
    Task13 = 0o13,
    /// Task-specific function 014.
    Task14 = 0o14,
    /// Task-specific function 015.
    Task15 = 0o15,
    /// Task-specific function 016.
    Task16 = 0o16,
    /// Task-specific function 017.
    Task17 = 0o17,
}

const F2_NAMES: [&str; 16] = [
    "nop",
    "bus=0",
    "shifter<0",
    "shifter=0",
    "bus",
    "alucy",
    "load_md",
    "const",
    "task_10",
    "task_11",
    "task_12",
    "task_13",
    "task_14",
    "task_15",
    "task_16",
    "task_17",
];

impl F2 {
    const ALL: [Self; 16] = [
        Self::Nop,
        Self::BusEqZero,
        Self::ShifterLtZero,
        Self::ShifterEqZero,
        Self::Bus,
        Self::AluCy,
        Self::LoadMd,
        Self::Const,
        Self::Task10,
        Self::Task11,
        Self::Task12,
        Self::Task13,
        Self::Task14,
        Self::Task15,
        Self::Task16,
        Self::Task17,
    ];

    /// Emulator F2 `MAGIC`: shifts pull in the neighbouring latch bit.
    pub const EMU_MAGIC: Self = Self::Task11;

    /// Emulator F2 `LOAD DNS`: the emulator's own shifter path writes R.
    pub const EMU_LOAD_DNS: Self = Self::Task12;

    /// Decodes the low four bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0o17) as usize]
    }

    /// Returns the 4-bit field value.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the symbolic name of the function.
    pub const fn name(self) -> &'static str {
        F2_NAMES[self as usize]
    }
}

impl fmt::Display for F2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
