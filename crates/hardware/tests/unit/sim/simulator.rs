//! # Simulator Tests

use std::sync::atomic::Ordering;

use alto2_core::config::Config;
use alto2_core::core::arch::task::Task;
use alto2_core::isa::fields::F1;
use alto2_core::sim::MicrocodeImage;
use alto2_core::soc::System;
use alto2_core::Simulator;

use crate::common::builder::microword::MicrowordBuilder;
use crate::common::mocks::extension::RecordingExtension;
use crate::common::mocks::memory::RecordingMemory;
use crate::common::mocks::peripherals::RecordingPeripherals;

#[test]
fn new_cold_resets_into_the_emulator() {
    let sim = Simulator::new(System::default(), &Config::default());
    assert_eq!(sim.cpu.current_task(), Task::Emu);
    assert_eq!(sim.cpu.next, 0);
}

#[test]
fn load_installs_the_image_and_cold_resets() {
    let (memory, _) = RecordingMemory::new();
    let (peripherals, _) = RecordingPeripherals::new();
    let (extension, log) = RecordingExtension::new();
    let system = System::new(Box::new(memory), Box::new(peripherals), Box::new(extension));
    let mut sim = Simulator::new(system, &Config::default());

    sim.cpu.wake(Task::Ksec);
    sim.cpu.next = 0o100;

    let rom = vec![
        MicrowordBuilder::new().next(1).build(),
        MicrowordBuilder::new().next(0).build(),
    ];
    let image = MicrocodeImage::from_words(rom, Vec::new()).unwrap();
    assert_eq!(sim.load(&image), 2);

    assert_eq!(log.lock().unwrap().installs, 2);
    assert_eq!(sim.cpu.next, 0);
    assert_eq!(sim.cpu.scheduler.wakeup_mask(), Task::Emu.bit());
    assert_eq!(sim.run(3), Ok(3));
    assert_eq!(sim.cpu.mpc, 0);
}

#[test]
fn soft_reset_latches_the_emulator() {
    let mut sim = Simulator::new(System::default(), &Config::default());
    assert_eq!(sim.soft_reset(), Task::Emu);
}

#[test]
fn leave_handle_stops_a_run() {
    let mut sim = Simulator::new(System::default(), &Config::default());
    sim.cpu
        .store
        .write(0, MicrowordBuilder::new().f1(F1::Nop).build());
    let leave = sim.leave_handle();
    leave.store(true, Ordering::Relaxed);
    assert_eq!(sim.run(1_000), Ok(0));
    assert_eq!(sim.run(1_000), Ok(1_000));
}
