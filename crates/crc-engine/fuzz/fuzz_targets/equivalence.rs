//! Cross-realization fuzzing: every evaluation strategy must agree.
//!
//! The fuzz input encodes an arbitrary parameter set followed by message
//! bytes; bit-serial, table-accelerated and stepped computation must all
//! produce the identical CRC, and streaming must match one-shot.

#![no_main]

use crc_engine::{CrcParams, LookupTable, Processor, Stepper};
use libfuzzer_sys::fuzz_target;

const HEADER_LEN: usize = 26;

fn decode(input: &[u8]) -> Option<(CrcParams, &[u8])> {
  if input.len() < HEADER_LEN {
    return None;
  }
  let width = input[0] % 64 + 1;
  let flags = input[1];
  let polynomial = u64::from_le_bytes(input[2..10].try_into().ok()?);
  let initial = u64::from_le_bytes(input[10..18].try_into().ok()?);
  let xor_out = u64::from_le_bytes(input[18..26].try_into().ok()?);
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };

  let params = CrcParams::new(
    width,
    polynomial & mask,
    initial & mask,
    flags & 1 != 0,
    flags & 2 != 0,
    xor_out & mask,
  )
  .ok()?;
  Some((params, &input[HEADER_LEN..]))
}

fuzz_target!(|input: &[u8]| {
  let Some((params, data)) = decode(input) else {
    return;
  };

  let mut bitwise = Processor::new(params).expect("masked parameters validate");
  bitwise.update(data);
  let expected = bitwise.finalize();

  // Table folding at every byte-dividing chunk width.
  for chunk_width in [1u8, 2, 4, 8] {
    let table = LookupTable::generate(params, chunk_width).expect("chunk width in range");
    let mut tabled = Processor::with_table(params, &table).expect("matching table");
    tabled.update(data);
    assert_eq!(
      tabled.finalize(),
      expected,
      "table mismatch: width={} chunk_width={chunk_width} len={}",
      params.width,
      data.len()
    );
  }

  // Circuit-equivalent stepping, one byte per step.
  let mut stepper = Stepper::new(params, 8).expect("step width in range");
  for &byte in data {
    stepper.step(u64::from(byte)).expect("byte fits the step width");
  }
  assert_eq!(
    stepper.finalize(),
    expected,
    "stepper mismatch: width={} len={}",
    params.width,
    data.len()
  );

  // Streaming self-consistency at a data-derived split.
  let split = data.len() / 2;
  let mut streamed = Processor::new(params).expect("masked parameters validate");
  streamed.update(&data[..split]);
  streamed.update(&data[split..]);
  assert_eq!(streamed.finalize(), expected, "streaming mismatch at split {split}");
});
