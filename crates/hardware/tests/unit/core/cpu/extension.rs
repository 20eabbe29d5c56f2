//! # Task Extension Tests
//!
//! Extension slots delegate to the installed `TaskExtension` with the
//! engine and memory; failures stop the engine.

use alto2_core::common::CpuError;
use alto2_core::core::arch::task::Task;
use alto2_core::core::dispatch::{Operation, Phase};
use alto2_core::isa::fields::{AluFunction, BusSource, F1, F2};
use alto2_core::soc::System;
use alto2_core::config::Config;
use alto2_core::Simulator;
use pretty_assertions::assert_eq;

use crate::common::builder::microword::MicrowordBuilder;
use crate::common::harness::TestContext;
use crate::common::mocks::extension::{EXT_FAIL, EXT_LOAD_R1, EXT_WRITE_BUS, RecordingExtension};

#[test]
fn early_and_late_extension_slots_run_in_phase() {
    let (extension, log) = RecordingExtension::new();
    let mut ctx = TestContext::with_extension(Box::new(extension)).with_ucode(&[(
        0,
        MicrowordBuilder::new()
            .rsel(1)
            .bs(BusSource::ReadR)
            .f1(F1::Task10)
            .f2(F2::Task10)
            .next(1)
            .build(),
    )]);

    let _ = ctx.step();

    assert_eq!(
        log.lock().unwrap().executed,
        vec![
            (EXT_LOAD_R1, Phase::Early, Task::Emu),
            (EXT_WRITE_BUS, Phase::Late, Task::Emu),
        ]
    );
    // BS ran before early F1, so the bus saw the old R1.
    assert_eq!(ctx.cpu().regs.read_r(1), 0o777);
    assert_eq!(ctx.memory.lock().unwrap().writes, vec![(0, 0)]);
}

#[test]
fn installed_ram_related_flag_mirrors_l() {
    let (extension, _log) = RecordingExtension::new();
    let mut ctx = TestContext::with_extension(Box::new(extension)).with_ucode(&[(
        0,
        MicrowordBuilder::new().aluf(AluFunction::BusMinus1).load_l().next(1).build(),
    )]);
    let _ = ctx.step();
    assert_eq!(ctx.cpu().regs.m, 0o177776);
    assert_eq!(ctx.cpu().regs.read_s(1, 0), 0o177776);
}

#[test]
fn extension_failure_is_fatal() {
    let (extension, _log) = RecordingExtension::new();
    let mut ctx = TestContext::with_extension(Box::new(extension))
        .with_ucode(&[(0, MicrowordBuilder::new().f2(F2::Task11).next(1).build())]);
    assert_eq!(
        ctx.try_step(),
        Err(CpuError::Extension {
            task: Task::Emu,
            mpc: 0,
            message: format!("device function {EXT_FAIL} failed"),
        })
    );
}

#[test]
fn notified_task_is_reported_when_switched_in() {
    let (extension, log) = RecordingExtension::new();
    let mut ctx = TestContext::with_extension(Box::new(extension))
        .with_ucode(&[(0, MicrowordBuilder::new().f1(F1::Task).next(1).build())]);
    ctx.cpu_mut().wake(Task::Ksec);
    ctx.run(2);
    assert_eq!(ctx.cpu().current_task(), Task::Ksec);
    assert_eq!(log.lock().unwrap().activated, vec![Task::Ksec]);
}

#[test]
fn default_system_rejects_extension_slots() {
    let mut sim = Simulator::new(System::default(), &Config::default());
    sim.cpu
        .dispatch
        .set_f2(Task::Emu, F2::Task13, Operation::Nop, Operation::Extension(42));
    sim.cpu.store.write(0, MicrowordBuilder::new().f2(F2::Task13).build());
    let err = sim.cpu.step(&mut sim.system).unwrap_err();
    assert_eq!(
        err,
        CpuError::Extension {
            task: Task::Emu,
            mpc: 0,
            message: "no extension operation 42".to_string(),
        }
    );
}
