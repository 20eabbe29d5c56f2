//! # Control Store Tests
//!
//! Words are stored inverted; reads and writes see logical values.

use alto2_core::core::units::store::MicrocodeStore;
use proptest::prelude::*;

#[test]
fn fresh_store_reads_zero_and_holds_ones() {
    let store = MicrocodeStore::new();
    assert_eq!(store.read(0), 0);
    assert_eq!(store.read(0o7777), 0);
    assert_eq!(store.raw_word(0o2000), 0xFFFF_FFFF);
}

#[test]
fn write_stores_the_complement() {
    let mut store = MicrocodeStore::new();
    store.write(0o17, 0x1234_5678);
    assert_eq!(store.raw_word(0o17), !0x1234_5678);
    assert_eq!(store.fetch(0o17).raw, 0x1234_5678);
    assert_eq!(store.next_field(0o17), (0x1234_5678 & 0o1777) as u16);
}

#[test]
fn addresses_wrap_at_store_size() {
    let mut store = MicrocodeStore::new();
    store.write(0o10005, 42);
    assert_eq!(store.read(5), 42);
}

#[test]
fn ram_banks_follow_the_rom_page() {
    let mut store = MicrocodeStore::new();
    assert!(store.write_ram(0, 0, 1));
    assert!(store.write_ram(2, 0o1777, 3));
    assert_eq!(store.read(0o2000), 1);
    assert_eq!(store.read(0o7777), 3);
    assert_eq!(store.read_ram(2, 0o1777), Some(3));
}

#[test]
fn out_of_range_ram_is_rejected() {
    let mut store = MicrocodeStore::new();
    assert_eq!(store.read_ram(3, 0), None);
    assert_eq!(store.read_ram(0, 0o2000), None);
    assert!(!store.write_ram(3, 0, 1));
    assert_eq!(store, MicrocodeStore::new());
}

#[test]
fn rom_reads_stop_at_the_page() {
    let mut store = MicrocodeStore::new();
    assert_eq!(store.load_rom(&[7, 8, 9]), 3);
    assert_eq!(store.read_rom(2), Some(9));
    assert_eq!(store.read_rom(0o2000), None);
}

#[test]
fn load_rom_truncates_to_one_page() {
    let mut store = MicrocodeStore::new();
    assert_eq!(store.load_rom(&[1; 2000]), 1024);
    assert_eq!(store.read(0o1777), 1);
    assert_eq!(store.read(0o2000), 0);
}

proptest! {
    #[test]
    fn ram_read_returns_written(bank in 0usize..3, word in 0usize..1024, value in any::<u32>()) {
        let mut store = MicrocodeStore::new();
        prop_assert!(store.write_ram(bank, word, value));
        prop_assert_eq!(store.read_ram(bank, word), Some(value));
        prop_assert_eq!(store.raw_word(0o2000 + (bank * 1024 + word) as u16), !value);
    }
}
