//! Bit-serial register update core.
//!
//! This module is the canonical source of truth for the engine: a Galois
//! shift register advanced one input bit at a time, masked to the configured
//! width after every step. Everything else in the crate — table folding, the
//! circuit-equivalent stepper, the catalog self-checks — is required to
//! produce results identical to these functions.
//!
//! The register always works most-significant bit first. Input reflection is
//! resolved by the caller before bits reach [`advance_bit`]; the core itself
//! is agnostic to byte boundaries and bit order.
//!
//! All functions are `const fn`, so check values can be asserted at compile
//! time (see the `const` blocks at the bottom of this module).

// Array indexing below uses bounded loop indices (0..data.len()); clippy
// cannot see this through const-fn loops.
#![allow(clippy::indexing_slicing)]

use crate::params::{CrcParams, reflect_bits};

const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

/// Advance a `width`-bit register by one input bit.
///
/// The feedback bit is the register's top bit XOR the input bit; the
/// register shifts left one position and the polynomial is folded in when
/// the feedback bit is set. Only bit 0 of `bit` participates.
#[inline]
#[must_use]
pub const fn advance_bit(register: u64, bit: u64, polynomial: u64, width: u8) -> u64 {
  let feedback = ((register >> (width - 1)) ^ bit) & 1;
  let shifted = (register << 1) & width_mask(width);
  if feedback != 0 { shifted ^ polynomial } else { shifted }
}

/// Advance a register by `word_width` bits of `word`, most significant first.
///
/// Bits of `word` above `word_width` are ignored. Input reflection, when the
/// algorithm calls for it, must already have been applied by the caller.
#[must_use]
pub const fn advance_word(register: u64, word: u64, word_width: u8, polynomial: u64, width: u8) -> u64 {
  let mut register = register;
  let mut i = word_width;
  while i > 0 {
    i -= 1;
    register = advance_bit(register, (word >> i) & 1, polynomial, width);
  }
  register
}

/// Fold a byte slice into a raw register, applying the input reflection
/// from `params`. Neither `initial` nor the output transform is applied.
#[must_use]
pub(crate) const fn update_bytes(register: u64, data: &[u8], params: &CrcParams) -> u64 {
  let mut register = register;
  let mut i = 0usize;
  while i < data.len() {
    let word = if params.reflect_in {
      reflect_bits(data[i] as u64, 8)
    } else {
      data[i] as u64
    };
    register = advance_word(register, word, 8, params.polynomial, params.width);
    i += 1;
  }
  register
}

/// Full bit-serial CRC of `data`: init, per-byte folding, output transform.
///
/// `params` must be valid (see [`CrcParams::validate`]); out-of-range fields
/// are masked rather than reported here. Use [`CrcParams::compute`] for the
/// validating entry point.
#[must_use]
pub const fn compute(params: &CrcParams, data: &[u8]) -> u64 {
  let register = update_bytes(params.initial & params.mask(), data, params);
  params.finalize_register(register)
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// Check values over b"123456789" for a cross-section of widths and
// reflection conventions. A failure here fails the build.

const CHECK_INPUT: &[u8] = b"123456789";

const fn params(
  width: u8,
  polynomial: u64,
  initial: u64,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u64,
) -> CrcParams {
  CrcParams {
    width,
    polynomial,
    initial,
    reflect_in,
    reflect_out,
    xor_out,
  }
}

// CRC-3/GSM: width is not a byte multiple; masking must hold every step.
const _: () = {
  let p = params(3, 0x3, 0x0, false, false, 0x7);
  assert!(compute(&p, CHECK_INPUT) == 0x4);
};

// CRC-5/USB: reflected, width below one byte.
const _: () = {
  let p = params(5, 0x05, 0x1F, true, true, 0x1F);
  assert!(compute(&p, CHECK_INPUT) == 0x19);
};

// CRC-8/SMBUS.
const _: () = {
  let p = params(8, 0x07, 0x00, false, false, 0x00);
  assert!(compute(&p, CHECK_INPUT) == 0xF4);
};

// CRC-16/XMODEM.
const _: () = {
  let p = params(16, 0x1021, 0x0000, false, false, 0x0000);
  assert!(compute(&p, CHECK_INPUT) == 0x31C3);
};

// CRC-32/ISO-HDLC (Ethernet, zip, PNG).
const _: () = {
  let p = params(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
  assert!(compute(&p, CHECK_INPUT) == 0xCBF4_3926);
};

// CRC-64/XZ: full-width register, shifts must not overflow.
const _: () = {
  let p = params(
    64,
    0x42F0_E1EB_A9EA_3693,
    0xFFFF_FFFF_FFFF_FFFF,
    true,
    true,
    0xFFFF_FFFF_FFFF_FFFF,
  );
  assert!(compute(&p, CHECK_INPUT) == 0x995D_C9BB_DF19_39FA);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
