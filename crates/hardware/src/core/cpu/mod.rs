//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire microengine state. It coordinates the following:
//! 1. **State Management:** Datapath registers, the microinstruction pipeline
//!    (MPC, MIR, next-address extension) and per-task saved context.
//! 2. **Control Store:** The microcode ROM/RAM, PROMs and constant ROM.
//! 3. **Dispatch:** Per-task BS/F1/F2 tables and the task scheduler.
//! 4. **Resets:** Cold reset (power on) and soft reset (STARTF).
//! 5. **Side Effects:** Control store RAM access and the bank register MMIO range.

/// Microcycle execution and the run loop.
pub mod execution;

use tracing::{debug, warn};

use crate::common::RegisterFile;
use crate::common::constants::{
    DISPLAY_RESET_STATE, RESET_MODE_ALL_ROM, TASK_COUNT, UCODE_PAGE_MASK, UCODE_RAM_BASE,
    UCODE_RAM_PAGES,
};
use crate::config::{Config, TimingConfig};
use crate::core::arch::bank::BankRegisters;
use crate::core::arch::prom::{ConstantRom, Proms};
use crate::core::arch::task::{Task, TaskState};
use crate::core::dispatch::DispatchTable;
use crate::core::scheduler::TaskScheduler;
use crate::core::units::store::MicrocodeStore;
use crate::isa::microword::Microword;
use crate::soc::System;
use crate::stats::SimStats;

/// CRAM address bits 2-3 (MSB first): RAM bank.
const CRAM_BANK_SHIFT: u16 = 12;
/// CRAM address bit 4: read ROM instead of RAM.
const CRAM_RAMROM_BIT: u16 = 1 << 11;
/// CRAM address bit 5: select the upper half of the word.
const CRAM_HALFSEL_BIT: u16 = 1 << 10;

/// Main CPU structure containing all microengine state.
///
/// The CPU owns everything the microcode can observe; the collaborators it
/// drives (memory, peripherals, task extension) live in a `System` passed to
/// each call, so the two can be borrowed side by side.
#[derive(Debug)]
pub struct Cpu {
    /// Datapath registers (R, S, L, T, M).
    pub regs: RegisterFile,
    /// Microcode ROM and RAM.
    pub store: MicrocodeStore,
    /// Fixed PROM tables.
    pub proms: Proms,
    /// Constant ROM.
    pub constants: ConstantRom,
    /// Per-task BS/F1/F2 dispatch tables.
    pub dispatch: DispatchTable,
    /// Wakeup mask and task switch latch.
    pub scheduler: TaskScheduler,
    /// Saved context and attributes of every task.
    pub tasks: [TaskState; TASK_COUNT],
    /// Memory bank registers.
    pub banks: BankRegisters,

    /// Address of the microinstruction being executed.
    pub mpc: u16,
    /// Microinstruction being executed.
    pub mir: Microword,
    /// R select of the current microinstruction (F2 handlers may modify it).
    pub rsel: u8,
    /// Address of the next microinstruction.
    pub next: u16,
    /// Next-address extension: page bits and pending branch bits.
    pub next2: u16,

    /// Bus value of the current cycle.
    pub bus: u16,
    /// ALU output of the current cycle.
    pub alu: u16,
    /// ALU carry of the current cycle.
    pub aluc0: bool,
    /// Shifter output of the current cycle.
    pub shifter: u16,
    /// Emulator skip latch, added by the `bus + skip` ALU function.
    pub skip: bool,

    /// Control store address for RDRAM/WRTRAM, loaded with T.
    pub cram_addr: u16,
    /// RDRAM requested; executed at the start of the next cycle.
    pub rdram_pending: bool,
    /// WRTRAM requested; executed after the ALU of the next cycle.
    pub wrtram_pending: bool,
    /// Per-task reset mode: a clear bit starts the task in RAM.
    pub reset_mode: u16,

    /// Display word time accumulator in picoseconds.
    pub dsp_time: i64,
    /// Display state machine state.
    pub dsp_state: u16,
    /// Unload time accumulator; `None` while no word is being unloaded.
    pub unload_time: Option<i64>,
    /// Word being unloaded.
    pub unload_word: u16,

    /// Microcycle and display timing.
    pub timing: TimingConfig,
    /// Emit per-microinstruction trace events.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,

    boot_reset_mode: u16,
}

impl Cpu {
    /// Creates a CPU from configuration.
    ///
    /// The CPU is not usable until `cold_reset` has installed the dispatch
    /// tables and reset addresses.
    ///
    /// # Arguments
    ///
    /// * `config` - Timing, reset and trace configuration.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with an empty control store.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            store: MicrocodeStore::new(),
            proms: Proms::new(),
            constants: ConstantRom::new(),
            dispatch: DispatchTable::new(),
            scheduler: TaskScheduler::new(),
            tasks: [TaskState::default(); TASK_COUNT],
            banks: BankRegisters::new(),
            mpc: 0,
            mir: Microword::default(),
            rsel: 0,
            next: 0,
            next2: 0,
            bus: 0,
            alu: 0,
            aluc0: false,
            shifter: 0,
            skip: false,
            cram_addr: 0,
            rdram_pending: false,
            wrtram_pending: false,
            reset_mode: config.reset.reset_mode,
            dsp_time: 0,
            dsp_state: DISPLAY_RESET_STATE,
            unload_time: None,
            unload_word: 0,
            timing: config.timing.clone(),
            trace: config.general.trace_microcode,
            stats: SimStats::default(),
            boot_reset_mode: config.reset.reset_mode,
        }
    }

    /// Returns the running task.
    #[inline]
    pub const fn current_task(&self) -> Task {
        self.scheduler.current()
    }

    /// Sets a task's wakeup bit.
    #[inline]
    pub const fn wake(&mut self, task: Task) {
        self.scheduler.wake(task);
    }

    /// Clears a task's wakeup bit.
    #[inline]
    pub const fn block(&mut self, task: Task) {
        self.scheduler.block(task);
    }

    /// Returns the control store address a task starts at after a reset.
    ///
    /// Task N starts at N in ROM, or at `RAM_BASE + N` when its reset mode bit is clear.
    pub const fn reset_address(&self, task: Task) -> u16 {
        let mpc = self.proms.reset_mpc(task);
        if self.reset_mode & task.bit() == 0 {
            mpc | UCODE_RAM_BASE
        } else {
            mpc
        }
    }

    /// Power-on reset.
    ///
    /// Reloads the PROMs, computes every task's reset address from the
    /// configured reset mode, installs the default dispatch entries, runs the
    /// task extension's `install`, clears the bank registers and display
    /// timing, and makes the emulator task the running, awake task. The
    /// datapath registers and the control store contents are kept.
    ///
    /// # Arguments
    ///
    /// * `system` - Collaborators; the task extension is installed from here.
    pub fn cold_reset(&mut self, system: &mut System) {
        self.proms = Proms::new();
        self.reset_mode = self.boot_reset_mode;

        for task in Task::ALL {
            self.tasks[task.index()] = TaskState {
                mpc: self.reset_address(task),
                ..TaskState::default()
            };
            self.dispatch.install_defaults(task);
        }

        self.scheduler = TaskScheduler::new();
        system.extension.install(self);

        self.banks.reset();
        self.dsp_time = 0;
        self.dsp_state = DISPLAY_RESET_STATE;
        self.unload_time = None;
        self.rdram_pending = false;
        self.wrtram_pending = false;

        self.scheduler.force(Task::Emu);
        self.scheduler.wake(Task::Emu);
        self.next = self.tasks[Task::Emu.index()].mpc;
        self.next2 = self.tasks[Task::Emu.index()].next2;

        debug!(
            "cold reset: reset_mode={:06o} emu mpc={:05o}",
            self.reset_mode, self.next
        );
    }

    /// Software initiated reset (STARTF).
    ///
    /// Recomputes every task's reset address from the current reset mode,
    /// clears the saved next-address extensions, requests a switch to the
    /// emulator task, puts every task back to ROM for the next reset and
    /// restarts the display timing.
    ///
    /// # Returns
    ///
    /// The task latched to run next.
    pub fn soft_reset(&mut self) -> Task {
        for task in Task::ALL {
            self.tasks[task.index()].mpc = self.reset_address(task);
            self.tasks[task.index()].next2 = 0;
        }
        self.scheduler.set_pending(Task::Emu);
        self.reset_mode = RESET_MODE_ALL_ROM;
        self.dsp_time = 0;
        self.dsp_state = DISPLAY_RESET_STATE;
        debug!(next = %self.scheduler.next(), "soft reset");
        self.scheduler.next()
    }

    /// Saves the live MPC and next-address extension into the current task's context.
    pub const fn save_context(&mut self) {
        let t = self.scheduler.current().index();
        self.tasks[t].mpc = self.next;
        self.tasks[t].next2 = self.next2;
    }

    /// Loads the live MPC and next-address extension from the current task's context.
    pub const fn restore_context(&mut self) {
        let t = self.scheduler.current().index();
        self.next = self.tasks[t].mpc;
        self.next2 = self.tasks[t].next2;
    }

    /// Starts unloading display words.
    ///
    /// # Arguments
    ///
    /// * `word` - First word handed to `Peripherals::unload_word`.
    /// * `delay_ps` - Picoseconds until the first word is due.
    pub const fn start_unload(&mut self, word: u16, delay_ps: i64) {
        self.unload_word = word;
        self.unload_time = Some(delay_ps);
    }

    /// Reads a bank register through its MMIO address.
    ///
    /// # Returns
    ///
    /// The register value, or `None` if `address` is outside 0177740-0177757.
    pub fn bank_reg_read(&self, address: u32) -> Option<u16> {
        BankRegisters::contains(address).then(|| self.banks.read(address))
    }

    /// Writes a bank register through its MMIO address.
    ///
    /// # Returns
    ///
    /// `false` if `address` is outside 0177740-0177757; nothing is written.
    pub fn bank_reg_write(&mut self, address: u32, data: u16) -> bool {
        if !BankRegisters::contains(address) {
            warn!("bank register write outside MMIO range: {address:06o}={data:06o}");
            return false;
        }
        self.banks.write(address, data);
        let task = Task::from_index((address & 0o17) as usize);
        debug!(
            %task,
            normal = self.banks.normal(task),
            extended = self.banks.extended(task),
            "write bank[{:02o}]={:06o}",
            task.index(),
            data
        );
        true
    }

    /// Reads half a control store word onto the bus (RDRAM).
    ///
    /// The CRAM address selects ROM (at the current MPC) or one of the RAM
    /// banks, and the upper or lower half. An invalid address leaves the bus
    /// untouched.
    pub fn rdram(&mut self) {
        let (bank, word) = self.cram_location();
        let value = if self.cram_addr & CRAM_RAMROM_BIT != 0 {
            let addr = self.mpc & UCODE_PAGE_MASK;
            debug!("rdram: ROM [{addr:05o}]");
            self.store.read_rom(addr)
        } else {
            debug!("rdram: RAM{bank} [{word:04o}]");
            self.store.read_ram(bank, word)
        };
        self.stats.rdram += 1;

        let Some(value) = value else {
            warn!("rdram: invalid address (cram_addr {:06o})", self.cram_addr);
            return;
        };
        let half = if self.cram_addr & CRAM_HALFSEL_BIT != 0 {
            (value >> 16) as u16
        } else {
            value as u16
        };
        self.bus &= half;
    }

    /// Writes `(M << 16) | ALU` to a control store RAM word (WRTRAM).
    pub fn wrtram(&mut self) {
        let (bank, word) = self.cram_location();
        let value = (u32::from(self.regs.m) << 16) | u32::from(self.alu);
        debug!(
            "wrtram: RAM{bank} [{word:04o}] upper:{:06o} lower:{:06o}",
            self.regs.m, self.alu
        );
        self.stats.wrtram += 1;
        if !self.store.write_ram(bank, word, value) {
            warn!("wrtram: invalid address (cram_addr {:06o})", self.cram_addr);
        }
    }

    const fn cram_location(&self) -> (usize, usize) {
        let bank = ((self.cram_addr >> CRAM_BANK_SHIFT) & 3) as usize % UCODE_RAM_PAGES;
        let word = (self.cram_addr & UCODE_PAGE_MASK) as usize;
        (bank, word)
    }
}
