//! Main Execution Loop.
//!
//! This module implements the microcycle of the engine. It performs the following:
//! 1. **Timing Management:** Display and unload time accumulators, per-task time.
//! 2. **Fetch:** Microword fetch and next-address computation.
//! 3. **Stalls:** Memory stall checks that re-issue the same microinstruction.
//! 4. **Datapath:** Constant gating, early dispatch, ALU, shifter, late dispatch.
//! 5. **Commit:** L, T, M and S loads followed by task switch evaluation.

use tracing::{debug, error, trace, warn};

use super::Cpu;
use crate::common::constants::{BUS_IDLE, UCODE_PAGE_MASK};
use crate::common::error::CpuError;
use crate::core::arch::task::Task;
use crate::core::dispatch::{Family, Operation, Phase};
use crate::core::scheduler::Switch;
use crate::core::units::alu::Alu;
use crate::core::units::shifter::Shifter;
use crate::isa::disasm::disassemble;
use crate::isa::fields::{BusSource, F1, F2};
use crate::isa::names::register_name;
use crate::soc::System;
use crate::soc::traits::{MemorySystem, Peripherals};

/// Memory condition that held a microinstruction back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stall {
    /// `MAR<-` while the previous reference is still busy.
    LoadMar,
    /// `MD<-` before memory can accept data.
    Write,
    /// `<-MD` before the data is available.
    Read,
}

/// Outcome of one microcycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    /// The microinstruction executed.
    Executed,
    /// The microinstruction stalled and will be re-issued.
    Stalled(Stall),
}

impl Cpu {
    /// Executes one microcycle.
    ///
    /// Operates on the live MPC/next-address registers of the running task.
    ///
    /// # Arguments
    ///
    /// * `system` - Memory, peripherals and task extension.
    ///
    /// # Returns
    ///
    /// Whether the microinstruction executed or stalled.
    ///
    /// # Errors
    ///
    /// `CpuError` when an unset dispatch slot is invoked, arbitration finds
    /// no awake task, or the task extension fails.
    pub fn step(&mut self, system: &mut System) -> Result<Cycle, CpuError> {
        self.tick_timers(system.peripherals.as_mut());

        let task = self.scheduler.current();
        self.stats.cycles += 1;
        self.stats.task_cycles[task.index()] += 1;
        self.stats.task_time_ps[task.index()] += self.timing.ucycle_ps.unsigned_abs();

        self.mpc = self.next;
        self.mir = self.store.fetch(self.mpc);
        self.rsel = self.mir.rsel;
        self.next = self.mir.next | self.next2;
        self.next2 = self.store.next_field(self.next) | (self.next2 & !UCODE_PAGE_MASK);
        let mir = self.mir;

        if self.trace {
            trace!(
                "{} next2:{:05o} cycle:{}",
                disassemble(task.index(), self.mpc, &mir),
                self.next2,
                self.stats.cycles
            );
        }

        // BS is part of the constant ROM address when F1 or F2 is const.
        let do_bs = !(mir.f1 == F1::Const || mir.f2 == F2::Const);

        if let Some(stall) = self.check_stall(system.memory.as_mut(), do_bs) {
            if self.trace {
                trace!("{stall:?} stall");
            }
            self.next2 = self.next;
            self.next = self.mpc;
            self.stats.record_stall(stall);
            return Ok(Cycle::Stalled(stall));
        }

        self.bus = BUS_IDLE;
        if std::mem::take(&mut self.rdram_pending) {
            self.rdram();
        }
        let wrtram = std::mem::take(&mut self.wrtram_pending);

        if !do_bs || mir.bs.code() >= 4 {
            let constant = self.constants.get(self.rsel, mir.bs.code());
            if self.trace {
                trace!("BUS &= CONST[r:{:02o} bs:{}] ({constant:06o})", self.rsel, mir.bs.code());
            }
            self.bus &= constant;
        }

        // Early F2 first: emulator F2s may modify RSEL for the bus source.
        self.perform(Family::F2, Phase::Early, task, system)?;
        if do_bs {
            self.perform(Family::BusSource, Phase::Early, task, system)?;
        }
        self.perform(Family::F1, Phase::Early, task, system)?;

        let out = Alu::compute(mir.aluf, self.bus, self.regs.t, self.skip);
        self.alu = out.value;
        self.aluc0 = out.carry;

        // Before L changes.
        if wrtram {
            self.wrtram();
        }

        self.shifter = Shifter::shift(
            mir.f1,
            mir.f2,
            task,
            self.regs.l,
            self.regs.t,
            self.shifter,
        );

        self.perform(Family::F1, Phase::Late, task, system)?;
        self.perform(Family::F2, Phase::Late, task, system)?;
        if do_bs {
            self.perform(Family::BusSource, Phase::Late, task, system)?;
        }

        if mir.load_l {
            self.regs.l = self.alu;
            self.regs.laluc0 = out.arithmetic && out.carry;
            let state = self.tasks[task.index()];
            if state.ram_related {
                self.regs.m = self.alu;
                self.regs.write_s(state.s_bank as usize, 0, self.alu);
            }
        }

        if mir.load_t {
            self.cram_addr = self.alu;
            self.regs.t = if out.t_from_alu { self.alu } else { self.bus };
        }

        self.switch_tasks(system);
        Ok(Cycle::Executed)
    }

    /// Runs microcycles until the budget is spent or a leave is requested.
    ///
    /// On entry the running task's MPC and next-address extension are
    /// restored from its context, so a reset between runs takes effect. On
    /// return, normal or fatal, they are saved back.
    ///
    /// # Arguments
    ///
    /// * `system` - Memory, peripherals, task extension and leave flag.
    /// * `budget` - Maximum number of microcycles (stalled cycles included).
    ///
    /// # Returns
    ///
    /// The number of microcycles executed.
    ///
    /// # Errors
    ///
    /// The first `CpuError` raised by `step`.
    pub fn run(&mut self, system: &mut System, budget: u64) -> Result<u64, CpuError> {
        self.restore_context();
        let mut executed = 0;
        let result = loop {
            if executed >= budget || system.take_leave() {
                break Ok(executed);
            }
            if let Err(e) = self.step(system) {
                error!(
                    "halting after {executed} cycles: {e} (task {}, mpc {:05o})",
                    self.current_task(),
                    self.mpc
                );
                break Err(e);
            }
            executed += 1;
        };
        self.save_context();
        result
    }

    fn tick_timers(&mut self, peripherals: &mut dyn Peripherals) {
        let ucycle = self.timing.ucycle_ps;

        self.dsp_time -= ucycle;
        if self.dsp_time < 0 {
            self.dsp_state = peripherals.display_state(self.dsp_state);
            self.dsp_time += self.timing.display_word_ps;
            self.stats.display_slots += 1;
        }

        if let Some(time) = self.unload_time {
            let time = time - ucycle;
            self.unload_time = if time < 0 {
                match peripherals.unload_word(self.unload_word) {
                    Some((word, delay)) => {
                        self.unload_word = word;
                        self.stats.unload_words += 1;
                        Some(time + delay)
                    }
                    None => None,
                }
            } else {
                Some(time)
            };
        }
    }

    fn check_stall(&mut self, memory: &mut dyn MemorySystem, do_bs: bool) -> Option<Stall> {
        let mir = self.mir;
        if mir.f1 == F1::LoadMar {
            if memory.check_load_mar_stall(self.rsel) {
                return Some(Stall::LoadMar);
            }
        } else if mir.f2 == F2::LoadMd && memory.check_write_stall() {
            return Some(Stall::Write);
        }
        if do_bs && mir.bs == BusSource::ReadMd && memory.check_read_stall() {
            return Some(Stall::Read);
        }
        None
    }

    fn switch_tasks(&mut self, system: &mut System) {
        match self.scheduler.evaluate() {
            Switch::Stay => {}
            Switch::Latched => {
                if self.trace {
                    trace!("task switch latched to {}", self.scheduler.next());
                }
            }
            Switch::To { from, to } => {
                self.tasks[from.index()].mpc = self.next;
                self.tasks[from.index()].next2 = self.next2;
                self.next = self.tasks[to.index()].mpc;
                self.next2 = self.tasks[to.index()].next2;
                self.stats.task_switches += 1;
                debug!(
                    "task switch {from} -> {:02o}:{to} (cycle {})",
                    to.index(),
                    self.stats.cycles
                );
                if self.tasks[to.index()].notify_active {
                    system.extension.activated(to, self);
                }
            }
        }
    }

    /// Runs the operation of one dispatch slot.
    fn perform(
        &mut self,
        family: Family,
        phase: Phase,
        task: Task,
        system: &mut System,
    ) -> Result<(), CpuError> {
        let mir = self.mir;
        let (slot, name) = match family {
            Family::BusSource => (self.dispatch.bs(task, mir.bs), mir.bs.name()),
            Family::F1 => (self.dispatch.f1(task, mir.f1), mir.f1.name()),
            Family::F2 => (self.dispatch.f2(task, mir.f2), mir.f2.name()),
        };
        let op = slot.get(phase);
        if self.trace && op != Operation::Nop {
            trace!("{phase} {family}:{name} -> {op:?}");
        }

        match op {
            Operation::Nop => {}
            Operation::Unset => {
                return Err(CpuError::UnsetOperation {
                    phase,
                    family,
                    task,
                    mpc: self.mpc,
                    name,
                });
            }
            Operation::ReadR => self.bus &= self.regs.read_r(self.rsel as usize),
            Operation::LoadRBus => self.bus = 0,
            Operation::LoadR => self.load_r(),
            Operation::ReadMd => self.bus &= system.memory.read(),
            Operation::Mouse => self.bus &= system.peripherals.mouse(),
            Operation::Disp => {
                let disp = if let Some(value) = system.peripherals.disp() {
                    value
                } else {
                    warn!("BS <-DISP not handled by task {task} mpc:{:05o}", self.mpc);
                    BUS_IDLE
                };
                self.bus &= disp;
            }
            Operation::LoadMar => self.load_mar(task, system.memory.as_mut()),
            Operation::Arbitrate => {
                if self.scheduler.arbitrate().is_none() {
                    return Err(CpuError::NoTaskRequestingService {
                        task,
                        mpc: self.mpc,
                    });
                }
            }
            Operation::Block => self.scheduler.block(task),
            Operation::BranchBusZero => self.next2 |= u16::from(self.bus == 0),
            Operation::BranchShifterNegative => self.next2 |= self.shifter >> 15,
            Operation::BranchShifterZero => self.next2 |= u16::from(self.shifter == 0),
            Operation::BranchBus => self.next2 |= self.bus & UCODE_PAGE_MASK,
            Operation::BranchCarry => self.next2 |= u16::from(self.regs.laluc0),
            Operation::LoadMd => {
                if mir.f1 != F1::LoadMar {
                    system.memory.write(self.bus);
                }
            }
            Operation::RequestRdRam => self.rdram_pending = true,
            Operation::RequestWrtRam => self.wrtram_pending = true,
            Operation::Extension(id) => {
                system
                    .extension
                    .execute(id, phase, self, system.memory.as_mut())?;
            }
        }
        Ok(())
    }

    /// `R[RSEL] <- SHIFTER`, skipped when the emulator's `LOAD DNS` owns the write.
    fn load_r(&mut self) {
        if self.mir.f2 == F2::EMU_LOAD_DNS {
            return;
        }
        let mut value = self.shifter;
        if self.rsel == 0o37 && value & 3 == 3 {
            warn!("writing {} = {value:06o}, clearing bits 14-15", register_name(0o37));
            value &= !3;
        }
        self.regs.write_r(self.rsel as usize, value);
    }

    /// `MAR <- (BANK << 16) | ALU`, using the extended bank for XMAR.
    fn load_mar(&mut self, task: Task, memory: &mut dyn MemorySystem) {
        let bank = if self.mir.f2 == F2::LoadMd {
            self.banks.extended(task)
        } else {
            self.banks.normal(task)
        };
        memory.load_mar(self.rsel, (bank << 16) | u32::from(self.alu));
    }
}
