//! # System Tests

use std::sync::atomic::Ordering;

use alto2_core::core::Cpu;
use alto2_core::core::arch::task::Task;
use alto2_core::core::dispatch::Phase;
use alto2_core::common::CpuError;
use alto2_core::config::Config;
use alto2_core::soc::{NoExtension, NullPeripherals, Peripherals, System, TaskExtension};

#[test]
fn leave_request_is_taken_once() {
    let system = System::default();
    assert!(!system.take_leave());
    system.request_leave();
    assert!(system.take_leave());
    assert!(!system.take_leave());
}

#[test]
fn leave_handle_shares_the_flag() {
    let system = System::default();
    let handle = system.leave_handle();
    handle.store(true, Ordering::Relaxed);
    assert!(system.take_leave());
    assert!(!handle.load(Ordering::Relaxed));
}

#[test]
fn debug_output_names_the_flag() {
    let system = System::default();
    assert_eq!(format!("{system:?}"), "System { leave: false, .. }");
}

#[test]
fn null_peripherals_are_idle() {
    let mut peripherals = NullPeripherals;
    assert_eq!(peripherals.display_state(0o20), 0o20);
    assert_eq!(peripherals.unload_word(0o1), None);
    assert_eq!(peripherals.mouse(), 0o177777);
    assert_eq!(peripherals.disp(), None);
}

#[test]
fn no_extension_rejects_every_id() {
    let (mut memory, _) = crate::common::mocks::memory::RecordingMemory::new();
    let mut cpu = Cpu::new(&Config::default());
    let mut extension = NoExtension;
    extension.install(&mut cpu);
    assert_eq!(
        extension.execute(7, Phase::Late, &mut cpu, &mut memory),
        Err(CpuError::Extension {
            task: Task::Emu,
            mpc: 0,
            message: "no extension operation 7".to_string(),
        })
    );
}
