//! Microword encoding and decoding.
//!
//! A microinstruction is a 32-bit word, numbered MSB first:
//!
//! | bits  | field | width |
//! |-------|-------|-------|
//! | 0-4   | RSEL  | 5     |
//! | 5-8   | ALUF  | 4     |
//! | 9-11  | BS    | 3     |
//! | 12-15 | F1    | 4     |
//! | 16-19 | F2    | 4     |
//! | 20    | LOADT | 1     |
//! | 21    | LOADL | 1     |
//! | 22-31 | NEXT  | 10    |

use crate::isa::fields::{AluFunction, BusSource, F1, F2};

/// Shift of the RSEL field.
pub const RSEL_SHIFT: u32 = 27;
/// Mask of the RSEL field after shifting.
pub const RSEL_MASK: u32 = 0o37;
/// Shift of the ALUF field.
pub const ALUF_SHIFT: u32 = 23;
/// Shift of the BS field.
pub const BS_SHIFT: u32 = 20;
/// Shift of the F1 field.
pub const F1_SHIFT: u32 = 16;
/// Shift of the F2 field.
pub const F2_SHIFT: u32 = 12;
/// LOADT flag bit.
pub const LOADT_BIT: u32 = 1 << 11;
/// LOADL flag bit.
pub const LOADL_BIT: u32 = 1 << 10;
/// Mask of the NEXT field.
pub const NEXT_MASK: u32 = 0o1777;

/// A decoded microinstruction.
///
/// Decoding is total: every 32-bit value yields a `Microword`, and
/// `Microword::decode(w).raw == w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Microword {
    /// The logical (non-inverted) 32-bit encoding.
    pub raw: u32,
    /// R register select (0-037).
    pub rsel: u8,
    /// ALU function.
    pub aluf: AluFunction,
    /// Bus source.
    pub bs: BusSource,
    /// Special function 1.
    pub f1: F1,
    /// Special function 2.
    pub f2: F2,
    /// Load T at the end of the cycle.
    pub load_t: bool,
    /// Load L (and M for RAM-related tasks) at the end of the cycle.
    pub load_l: bool,
    /// In-page next microinstruction address.
    pub next: u16,
}

impl Microword {
    /// Decodes a logical 32-bit microword.
    ///
    /// # Arguments
    ///
    /// * `raw` - The microword in logical (non-inverted) form.
    ///
    /// # Returns
    ///
    /// The decoded fields.
    #[inline]
    pub const fn decode(raw: u32) -> Self {
        Self {
            raw,
            rsel: ((raw >> RSEL_SHIFT) & RSEL_MASK) as u8,
            aluf: AluFunction::from_bits((raw >> ALUF_SHIFT) as u8),
            bs: BusSource::from_bits((raw >> BS_SHIFT) as u8),
            f1: F1::from_bits((raw >> F1_SHIFT) as u8),
            f2: F2::from_bits((raw >> F2_SHIFT) as u8),
            load_t: raw & LOADT_BIT != 0,
            load_l: raw & LOADL_BIT != 0,
            next: (raw & NEXT_MASK) as u16,
        }
    }

    /// Extracts only the NEXT field of a logical microword.
    #[inline]
    pub const fn next_of(raw: u32) -> u16 {
        (raw & NEXT_MASK) as u16
    }

    /// Encodes individual field values into a logical microword.
    ///
    /// Out-of-range values are truncated to their field width.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub const fn encode(
        rsel: u8,
        aluf: AluFunction,
        bs: BusSource,
        f1: F1,
        f2: F2,
        load_t: bool,
        load_l: bool,
        next: u16,
    ) -> u32 {
        ((rsel as u32 & RSEL_MASK) << RSEL_SHIFT)
            | ((aluf.code() as u32) << ALUF_SHIFT)
            | ((bs.code() as u32) << BS_SHIFT)
            | ((f1.code() as u32) << F1_SHIFT)
            | ((f2.code() as u32) << F2_SHIFT)
            | (if load_t { LOADT_BIT } else { 0 })
            | (if load_l { LOADL_BIT } else { 0 })
            | (next as u32 & NEXT_MASK)
    }
}

impl Default for Microword {
    fn default() -> Self {
        Self::decode(0)
    }
}
