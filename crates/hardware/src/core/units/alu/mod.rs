//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 16-bit ALU of the microengine. It computes one
//! of sixteen functions of the bus and T, and reports:
//! - the 16-bit result,
//! - the carry out of bit 0 (the "no borrow" for subtractions),
//! - whether T should be loaded from the ALU or from the bus,
//! - whether the function was arithmetic (its carry is latched with L).
//!
//! Arithmetic functions compute the full 17-bit sum; subtraction adds the
//! one's complement of T. Logic functions always report carry 1.

use crate::isa::fields::AluFunction;

const MASK16: u32 = 0xFFFF;

/// Result of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// The 16-bit result.
    pub value: u16,
    /// Carry out of the most significant bit.
    pub carry: bool,
    /// T is loaded from the ALU (rather than the bus) when LOADT is set.
    pub t_from_alu: bool,
    /// The function was arithmetic; its carry is latched into LALUC0.
    pub arithmetic: bool,
}

/// The 16-bit microengine ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates an ALU function.
    ///
    /// # Arguments
    ///
    /// * `func` - The ALUF field value.
    /// * `bus` - Current bus value (operand A).
    /// * `t` - Current T register (operand B).
    /// * `skip` - Emulator skip latch, used by `bus + skip`.
    ///
    /// # Returns
    ///
    /// The `AluOutput` for this function.
    ///
    /// # Examples
    ///
    /// ```
    /// use alto2_core::core::units::alu::Alu;
    /// use alto2_core::isa::fields::AluFunction;
    ///
    /// let out = Alu::compute(AluFunction::BusMinusT, 5, 7, false);
    /// assert_eq!(out.value, 0o177776);
    /// assert!(!out.carry);
    /// ```
    pub fn compute(func: AluFunction, bus: u16, t: u16, skip: bool) -> AluOutput {
        let a = u32::from(bus);
        let b = u32::from(t);
        let not_b = !b & MASK16;

        let (sum, arithmetic) = match func {
            AluFunction::Bus => (a, false),
            AluFunction::T => (b, false),
            AluFunction::BusOrT => (a | b, false),
            AluFunction::BusAndT | AluFunction::BusAndTAluT => (a & b, false),
            AluFunction::BusXorT => (a ^ b, false),
            AluFunction::BusPlus1 => (a + 1, true),
            AluFunction::BusMinus1 => (a + MASK16, true),
            AluFunction::BusPlusT => (a + b, true),
            AluFunction::BusMinusT => (a + not_b + 1, true),
            AluFunction::BusMinusTMinus1 => (a + not_b, true),
            AluFunction::BusPlusTPlus1 => (a + b + 1, true),
            AluFunction::BusPlusSkip => (a + u32::from(skip), true),
            AluFunction::BusAndNotT => (a & not_b, false),
            AluFunction::Undefined14 => {
                return AluOutput {
                    value: 0,
                    carry: true,
                    t_from_alu: false,
                    arithmetic: true,
                };
            }
            AluFunction::Undefined15 => {
                return AluOutput {
                    value: 0o177777,
                    carry: true,
                    t_from_alu: false,
                    arithmetic: true,
                };
            }
        };

        AluOutput {
            value: (sum & MASK16) as u16,
            carry: if arithmetic { (sum >> 16) & 1 == 1 } else { true },
            t_from_alu: func.t_from_alu(),
            arithmetic,
        }
    }
}
