//! # ALU Tests
//!
//! Exact value, carry, T source and arithmetic flag for every function,
//! plus agreement with the gate-level 74181 model.

use alto2_core::core::units::alu::{Alu, AluOutput};
use alto2_core::isa::fields::AluFunction;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::reference::alu_74181;

const BUS: u16 = 0o123456;
// BUS + T is all ones.
const T: u16 = 0o054321;

fn out(value: u16, carry: bool, t_from_alu: bool, arithmetic: bool) -> AluOutput {
    AluOutput {
        value,
        carry,
        t_from_alu,
        arithmetic,
    }
}

#[rstest]
#[case(AluFunction::Bus, out(BUS, true, true, false))]
#[case(AluFunction::T, out(T, true, false, false))]
#[case(AluFunction::BusOrT, out(BUS | T, true, true, false))]
#[case(AluFunction::BusAndT, out(BUS & T, true, false, false))]
#[case(AluFunction::BusXorT, out(BUS ^ T, true, false, false))]
#[case(AluFunction::BusPlus1, out(BUS + 1, false, true, true))]
#[case(AluFunction::BusMinus1, out(BUS - 1, true, true, true))]
#[case(AluFunction::BusPlusT, out(0o177777, false, false, true))]
#[case(AluFunction::BusMinusT, out(BUS - T, true, false, true))]
#[case(AluFunction::BusMinusTMinus1, out(BUS - T - 1, true, false, true))]
#[case(AluFunction::BusPlusTPlus1, out(0, true, true, true))]
#[case(AluFunction::BusPlusSkip, out(BUS, false, true, true))]
#[case(AluFunction::BusAndTAluT, out(BUS & T, true, true, false))]
#[case(AluFunction::BusAndNotT, out(BUS & !T, true, false, false))]
#[case(AluFunction::Undefined14, out(0, true, false, true))]
#[case(AluFunction::Undefined15, out(0o177777, true, false, true))]
fn function_table(#[case] func: AluFunction, #[case] expected: AluOutput) {
    assert_eq!(Alu::compute(func, BUS, T, false), expected);
}

#[rstest]
#[case(AluFunction::BusPlus1, 0o177777, 0, 0, true)]
#[case(AluFunction::BusMinus1, 0, 0, 0o177777, false)]
#[case(AluFunction::BusMinusT, 5, 7, 0o177776, false)]
#[case(AluFunction::BusMinusT, 7, 5, 2, true)]
#[case(AluFunction::BusMinusT, 5, 5, 0, true)]
#[case(AluFunction::BusMinusTMinus1, 5, 5, 0o177777, false)]
#[case(AluFunction::BusPlusT, 0o100000, 0o100000, 0, true)]
fn carry_edges(
    #[case] func: AluFunction,
    #[case] bus: u16,
    #[case] t: u16,
    #[case] value: u16,
    #[case] carry: bool,
) {
    let result = Alu::compute(func, bus, t, false);
    assert_eq!((result.value, result.carry), (value, carry));
}

#[test]
fn skip_adds_one() {
    let result = Alu::compute(AluFunction::BusPlusSkip, 0o177777, 0, true);
    assert_eq!((result.value, result.carry), (0, true));
}

#[test]
fn undefined_15_carry_differs_from_reference() {
    let canonical = Alu::compute(AluFunction::Undefined15, 0, 0, false);
    let (value, carry) = alu_74181(15, 0, 0, false);
    assert_eq!(canonical.value, value);
    assert!(canonical.carry);
    assert!(!carry);
}

proptest! {
    #[test]
    fn agrees_with_74181(code in 0u8..16, bus in any::<u16>(), t in any::<u16>(), skip in any::<bool>()) {
        let canonical = Alu::compute(AluFunction::from_bits(code), bus, t, skip);
        let (value, carry) = alu_74181(code, bus, t, skip);
        prop_assert_eq!(canonical.value, value, "value of code {}", code);
        if code < 15 {
            prop_assert_eq!(canonical.carry, carry, "carry of code {}", code);
        }
    }
}
