//! Global Machine Constants.
//!
//! This module defines the fixed geometry of the microcode engine. It includes:
//! 1. **Task Constants:** Number of tasks and the emulator task index.
//! 2. **Register Constants:** R register count and S register bank geometry.
//! 3. **Control Store Constants:** ROM/RAM page layout, masks, and the inverted encoding.
//! 4. **Timing Constants:** Microcycle and display word times in picoseconds.
//! 5. **MMIO Constants:** Address range of the memory bank registers.

/// Number of hardware tasks sharing the microengine.
pub const TASK_COUNT: usize = 16;

/// Number of R registers addressed by RSEL.
pub const R_COUNT: usize = 32;

/// Number of S register banks.
pub const S_BANKS: usize = 8;

/// Number of S registers per bank.
pub const S_COUNT: usize = 32;

/// Microcode words per page (`02000` octal).
pub const UCODE_PAGE_SIZE: usize = 1024;

/// Number of microcode ROM pages.
pub const UCODE_ROM_PAGES: usize = 1;

/// Number of microcode RAM pages.
pub const UCODE_RAM_PAGES: usize = 3;

/// Total size of the control store in words.
pub const UCODE_SIZE: usize = (UCODE_ROM_PAGES + UCODE_RAM_PAGES) * UCODE_PAGE_SIZE;

/// First control store address backed by RAM.
pub const UCODE_RAM_BASE: u16 = (UCODE_ROM_PAGES * UCODE_PAGE_SIZE) as u16;

/// Mask for the in-page part of a microcode address.
pub const UCODE_PAGE_MASK: u16 = 0o1777;

/// Mask applied to every control store address.
pub const UCODE_ADDR_MASK: u16 = (UCODE_SIZE - 1) as u16;

/// XOR mask between the stored (raw) and logical form of a microword.
pub const UCODE_INVERTED: u32 = 0xFFFF_FFFF;

/// Value the bus floats to at the start of every microcycle.
pub const BUS_IDLE: u16 = 0o177777;

/// Number of words in the constant PROM (32 RSEL values times 8 BS values).
pub const CONST_PROM_SIZE: usize = 256;

/// Reset mode with every task starting in ROM.
pub const RESET_MODE_ALL_ROM: u16 = 0xFFFF;

/// Duration of one microcycle in picoseconds.
pub const UCYCLE_PS: i64 = 169_542;

/// Duration of one display pixel clock in picoseconds.
pub const DISPLAY_BIT_PS: i64 = 49_600;

/// Pixel clocks per display word slot.
pub const DISPLAY_WORD_BITS: i64 = 24;

/// State the display state machine is put in at reset.
pub const DISPLAY_RESET_STATE: u16 = 0o20;

/// First MMIO address of the bank registers.
pub const BANK_REG_FIRST: u32 = 0o177740;

/// Last MMIO address of the bank registers.
pub const BANK_REG_LAST: u32 = 0o177757;

/// Bits OR'd into every bank register read.
pub const BANK_REG_READ_ONES: u16 = 0o177760;

/// Mask of the writable bank register bits.
pub const BANK_REG_MASK: u16 = 0o17;
