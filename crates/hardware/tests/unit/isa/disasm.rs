//! # Disassembler Tests

use alto2_core::isa::disasm::disassemble;
use alto2_core::isa::fields::{AluFunction, BusSource, F1, F2};
use alto2_core::isa::microword::Microword;
use pretty_assertions::assert_eq;

use crate::common::builder::microword::MicrowordBuilder;

#[test]
fn renders_every_field() {
    let raw = MicrowordBuilder::new()
        .rsel(6)
        .aluf(AluFunction::BusPlus1)
        .bs(BusSource::ReadR)
        .f1(F1::LoadMar)
        .f2(F2::LoadMd)
        .load_l()
        .next(0o20)
        .build();
    assert_eq!(
        disassemble(0, 0o17, &Microword::decode(raw)),
        "emu-00017: r:pc af:bus + 1 bs:read_r f1:load_mar f2:load_md t:0 l:1 next:00020"
    );
}

#[test]
fn names_the_executing_task() {
    let text = disassemble(7, 0o2001, &Microword::decode(0));
    assert!(text.starts_with("ether-02001:"), "{text}");
}
