//! # Error Formatting Tests

use alto2_core::common::CpuError;
use alto2_core::core::arch::task::Task;
use alto2_core::core::dispatch::{Family, Phase};
use pretty_assertions::assert_eq;

#[test]
fn unset_operation_names_phase_family_and_code() {
    let err = CpuError::UnsetOperation {
        phase: Phase::Late,
        family: Family::F2,
        task: Task::Dwt,
        mpc: 0o1234,
        name: "task_13",
    };
    assert_eq!(
        err.to_string(),
        "bad late f2 operation for task dwt, mpc:01234 f2:task_13"
    );
}

#[test]
fn no_task_message_carries_mpc_in_octal() {
    let err = CpuError::NoTaskRequestingService {
        task: Task::Emu,
        mpc: 0o17,
    };
    assert_eq!(
        err.to_string(),
        "no tasks requesting service (task emu, mpc:00017)"
    );
}

#[test]
fn extension_message_is_included() {
    let err = CpuError::Extension {
        task: Task::Ether,
        mpc: 0o2000,
        message: "crc".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "task ether extension failed at mpc:02000: crc"
    );
}
