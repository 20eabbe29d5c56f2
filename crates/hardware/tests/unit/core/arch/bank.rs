//! # Bank Register Tests
//!
//! Writes keep the low four bits; reads set the upper twelve.

use alto2_core::core::arch::bank::BankRegisters;
use alto2_core::core::arch::task::Task;
use proptest::prelude::*;

#[test]
fn mmio_range_is_0177740_to_0177757() {
    assert!(!BankRegisters::contains(0o177737));
    assert!(BankRegisters::contains(0o177740));
    assert!(BankRegisters::contains(0o177757));
    assert!(!BankRegisters::contains(0o177760));
}

#[test]
fn normal_and_extended_banks_split_the_nibble() {
    let mut banks = BankRegisters::new();
    banks.write(0o177740 + Task::Ether.index() as u32, 0b1110);
    assert_eq!(banks.get(Task::Ether), 0b1110);
    assert_eq!(banks.normal(Task::Ether), 3);
    assert_eq!(banks.extended(Task::Ether), 2);
    assert_eq!(banks.normal(Task::Emu), 0);
}

#[test]
fn reset_clears_every_task() {
    let mut banks = BankRegisters::new();
    banks.write(0o177745, 0o17);
    banks.reset();
    assert_eq!(banks.read(0o177745), 0o177760);
}

proptest! {
    #[test]
    fn read_back_is_low_nibble_with_ones(reg in 0u32..16, value in any::<u16>()) {
        let mut banks = BankRegisters::new();
        banks.write(0o177740 + reg, value);
        prop_assert_eq!(banks.read(0o177740 + reg), (value & 0o17) | 0o177760);
    }
}
