//! Parameterized cyclic-redundancy-check engine.
//!
//! This crate computes the CRC of arbitrary byte streams for any algorithm
//! describable in the Rocksoft/RevEng convention — register width 1..=64,
//! generator polynomial, initial value, input/output reflection and final
//! XOR — and validates received data against an expected checksum.
//!
//! Two realizations of the identical algorithm are provided and are
//! bit-identical for every parameter set and input:
//!
//! | Type | Realization |
//! |------|-------------|
//! | [`Processor`] | Software evaluator: streaming bytes, bit-serial or table-accelerated |
//! | [`Stepper`] | Circuit equivalent: one fixed-width word per discrete step through an XOR tap network |
//!
//! Components:
//!
//! | Module | Role |
//! |--------|------|
//! | [`bitwise`] | Register update core — the canonical bit-serial recurrence |
//! | [`LookupTable`] | Chunk-at-a-time acceleration derived from the core (`alloc`) |
//! | [`catalog`] | Named standard algorithms with check values and self-validation |
//!
//! # Example
//!
//! ```
//! use crc_engine::{Processor, Stepper, catalog};
//!
//! // Software evaluator, streaming.
//! let params = catalog::lookup("CRC-32/ISO-HDLC")?;
//! let mut processor = Processor::new(params)?;
//! processor.update(b"1234");
//! processor.update(b"56789");
//! assert_eq!(processor.finalize(), 0xCBF43926);
//!
//! // Circuit-equivalent stepper: one byte per step, register state
//! // persisting across steps exactly as a hardware register would.
//! let mut stepper = Stepper::new(params, 8)?;
//! for &byte in b"123456789" {
//!   stepper.step(byte.into())?;
//! }
//! assert_eq!(stepper.finalize(), processor.finalize());
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std`. The bit-serial evaluator and the stepper need no
//! allocation; lookup tables require the `alloc` feature (enabled by the
//! default `std` feature):
//!
//! ```toml
//! [dependencies]
//! crc-engine = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
pub mod catalog;
mod error;
mod params;
mod processor;
mod stepper;
#[cfg(feature = "alloc")]
mod tables;

pub use error::{CatalogLookupError, ParameterError, ParameterField, WidthMismatchError};
pub use params::{CrcParams, reflect_bits};
pub use processor::Processor;
pub use stepper::Stepper;
#[cfg(feature = "alloc")]
pub use tables::{LookupTable, MAX_CHUNK_WIDTH};
