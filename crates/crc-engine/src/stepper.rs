//! Circuit-equivalent fixed-width stepper.
//!
//! A [`Stepper`] realizes the same algorithm as [`Processor`](crate::Processor)
//! the way a synchronous digital circuit would: one data word of a fixed
//! width per discrete step, one application of a precomputed XOR tap network
//! per step, register state persisting across steps.
//!
//! The tap network is the linear state relation of the CRC register,
//! `register' = F·register ⊕ G·input`, with F and G derived at construction
//! by probing the bit-serial core with unit vectors. Each output bit is the
//! parity of the register and input bits selected by its tap masks — exactly
//! the XOR tree a synthesis tool would emit for this polynomial and word
//! width. No whole-message shortcuts exist on this path: state after step k
//! depends only on state after step k-1 and the word presented at step k.

// Tap arrays are indexed by bounded loop indices (0..width <= 64); clippy
// cannot see the bound through the loops.
#![allow(clippy::indexing_slicing)]

use crate::{
  bitwise,
  error::{ParameterError, WidthMismatchError},
  params::{CrcParams, reflect_bits},
};

/// Fixed-width stepping engine.
///
/// Owns its register exclusively; construct one per concurrent computation.
#[derive(Clone, Debug)]
pub struct Stepper {
  params: CrcParams,
  data_width: u8,
  /// Per output bit: mask of register bits feeding its XOR tree.
  f_taps: [u64; 64],
  /// Per output bit: mask of input-word bits feeding its XOR tree.
  g_taps: [u64; 64],
  residue: u64,
  register: u64,
}

impl Stepper {
  /// Build the tap network for `params` with `data_width` bits per step.
  ///
  /// # Errors
  ///
  /// Validation failures from `params`, or
  /// [`ParameterError::ChunkWidthOutOfRange`] when `data_width` is 0 or
  /// above 64.
  pub fn new(params: CrcParams, data_width: u8) -> Result<Self, ParameterError> {
    params.validate()?;
    if data_width == 0 || data_width > 64 {
      return Err(ParameterError::ChunkWidthOutOfRange {
        chunk_width: data_width,
      });
    }

    let width = usize::from(params.width);
    let mut f_taps = [0u64; 64];
    let mut g_taps = [0u64; 64];

    // Column j of F: where a lone register bit j lands after one step of
    // zero input. Column j of G: where a lone input bit j lands starting
    // from a zero register.
    for j in 0..width {
      let image = bitwise::advance_word(1u64 << j, 0, data_width, params.polynomial, params.width);
      for (i, taps) in f_taps.iter_mut().enumerate().take(width) {
        if (image >> i) & 1 != 0 {
          *taps |= 1u64 << j;
        }
      }
    }
    for j in 0..usize::from(data_width) {
      let image = bitwise::advance_word(0, 1u64 << j, data_width, params.polynomial, params.width);
      for (i, taps) in g_taps.iter_mut().enumerate().take(width) {
        if (image >> i) & 1 != 0 {
          *taps |= 1u64 << j;
        }
      }
    }

    let residue = params.residue()?;
    Ok(Self {
      params,
      data_width,
      f_taps,
      g_taps,
      residue,
      register: params.initial,
    })
  }

  /// Present one data word and advance the register by one step.
  ///
  /// # Errors
  ///
  /// [`WidthMismatchError`] when `word` has significant bits above the
  /// configured step width. The register is unchanged in that case.
  pub fn step(&mut self, word: u64) -> Result<(), WidthMismatchError> {
    let significant = (64 - word.leading_zeros()) as u8;
    if significant > self.data_width {
      return Err(WidthMismatchError::new(self.data_width, significant));
    }

    let input = if self.params.reflect_in {
      reflect_bits(word, self.data_width)
    } else {
      word
    };

    let mut next = 0u64;
    for i in 0..usize::from(self.params.width) {
      let parity =
        ((self.register & self.f_taps[i]).count_ones() + (input & self.g_taps[i]).count_ones()) & 1;
      next |= u64::from(parity) << i;
    }
    self.register = next;
    Ok(())
  }

  /// Present a sequence of words, one step each, in order.
  ///
  /// # Errors
  ///
  /// Stops at the first offending word; the register reflects every word
  /// before it.
  pub fn steps(&mut self, words: &[u64]) -> Result<(), WidthMismatchError> {
    for &word in words {
      self.step(word)?;
    }
    Ok(())
  }

  /// The output CRC for the words consumed so far.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    self.params.finalize_register(self.register)
  }

  /// True when the words consumed so far form a valid codeword — a message
  /// followed by its own CRC — leaving the register at the algorithm's
  /// residue.
  #[must_use]
  pub fn match_detected(&self) -> bool {
    let out = if self.params.reflect_out {
      reflect_bits(self.register, self.params.width)
    } else {
      self.register
    };
    out == self.residue
  }

  /// Return the register to `initial` for an independent message.
  #[inline]
  pub fn reset(&mut self) {
    self.register = self.params.initial;
  }

  /// Raw register state, before the output transform.
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.register
  }

  /// Bits consumed per step.
  #[inline]
  #[must_use]
  pub const fn data_width(&self) -> u8 {
    self.data_width
  }

  /// The parameter set this stepper was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }
}
