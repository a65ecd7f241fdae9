//! Streaming software evaluator.
//!
//! A [`Processor`] owns the live `width`-bit register for one in-progress
//! computation. It is constructed from a [`CrcParams`] (optionally with a
//! precomputed [`LookupTable`]), fed bytes through [`update`](Processor::update)
//! any number of times, and read out with the non-mutating
//! [`finalize`](Processor::finalize).
//!
//! Without a table the processor runs the bit-serial core — functionally
//! identical, slower. The two paths are interchangeable per message and per
//! call site; which one is active is reported by
//! [`strategy`](Processor::strategy).

use crate::{bitwise, error::ParameterError, params::CrcParams};

#[cfg(feature = "alloc")]
use crate::tables::LookupTable;

/// Incremental CRC computation engine.
///
/// One live instance per in-progress computation. A processor exclusively
/// owns its register; share parameter sets and lookup tables instead of
/// sharing processors.
#[derive(Clone, Debug)]
pub struct Processor {
  params: CrcParams,
  register: u64,
  #[cfg(feature = "alloc")]
  table: Option<LookupTable>,
}

impl Processor {
  /// Construct a bit-serial processor; the register starts at `initial`.
  ///
  /// # Errors
  ///
  /// Validation failures from `params`; see [`CrcParams::new`].
  pub fn new(params: CrcParams) -> Result<Self, ParameterError> {
    params.validate()?;
    Ok(Self {
      params,
      register: params.initial,
      #[cfg(feature = "alloc")]
      table: None,
    })
  }

  /// Construct a table-accelerated processor.
  ///
  /// The table is cheap to clone (entry storage is shared) and must have
  /// been generated for exactly `params`. Its chunk width must divide 8 so
  /// bytes split into whole sub-chunks.
  ///
  /// # Errors
  ///
  /// Validation failures from `params`;
  /// [`ParameterError::TableMismatch`] when the table describes a different
  /// parameter set; [`ParameterError::ChunkWidthOutOfRange`] when the chunk
  /// width does not divide 8.
  #[cfg(feature = "alloc")]
  pub fn with_table(params: CrcParams, table: &LookupTable) -> Result<Self, ParameterError> {
    params.validate()?;
    if *table.params() != params {
      return Err(ParameterError::TableMismatch);
    }
    let chunk_width = table.chunk_width();
    if 8 % chunk_width != 0 {
      return Err(ParameterError::ChunkWidthOutOfRange { chunk_width });
    }
    Ok(Self {
      params,
      register: params.initial,
      table: Some(table.clone()),
    })
  }

  /// Fold `data` into the register.
  ///
  /// Zero-length input is a no-op. Splitting a message across calls changes
  /// nothing: `update(a); update(b)` equals `update(ab)`.
  pub fn update(&mut self, data: &[u8]) {
    #[cfg(feature = "alloc")]
    if let Some(table) = &self.table {
      self.register = table.fold_bytes(self.register, data, self.params.reflect_in);
      return;
    }
    self.register = bitwise::update_bytes(self.register, data, &self.params);
  }

  /// The output CRC for the data consumed so far.
  ///
  /// Applies `reflect_out` and `xor_out` to a copy of the register; the
  /// processor can keep consuming data afterwards.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u64 {
    self.params.finalize_register(self.register)
  }

  /// Compare the current output CRC against an expected checksum.
  #[inline]
  #[must_use]
  pub fn verify(&self, expected: u64) -> bool {
    self.finalize() == expected
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

  /// The parameter set this processor was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Name of the active computation strategy.
  #[must_use]
  pub fn strategy(&self) -> &'static str {
    #[cfg(feature = "alloc")]
    if let Some(table) = &self.table {
      return match table.chunk_width() {
        1 => "table/1",
        2 => "table/2",
        4 => "table/4",
        _ => "table/8",
      };
    }
    "bitwise"
  }
}
