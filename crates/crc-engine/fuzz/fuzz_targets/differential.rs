//! Differential fuzzing against an independent CRC implementation.
//!
//! Compares the engine's output for well-known algorithms against the
//! `crc` crate to catch any discrepancy in reflection, masking or residue
//! handling.

#![no_main]

use crc_engine::{Processor, Stepper, catalog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc8_differential(data);
  test_crc16_differential(data);
  test_crc24_differential(data);
  test_crc32_differential(data);
  test_crc64_differential(data);
});

fn engine_oneshot(name: &str, data: &[u8]) -> u64 {
  let params = catalog::lookup(name).expect("catalog entry");
  let mut processor = Processor::new(params).expect("valid parameters");
  processor.update(data);
  processor.finalize()
}

fn engine_stepped(name: &str, data: &[u8]) -> u64 {
  let params = catalog::lookup(name).expect("catalog entry");
  let mut stepper = Stepper::new(params, 8).expect("valid stepper");
  for &byte in data {
    stepper.step(u64::from(byte)).expect("byte fits the step width");
  }
  stepper.finalize()
}

fn test_crc8_differential(data: &[u8]) {
  let ours = engine_oneshot("CRC-8/SMBUS", data);
  let reference = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS).checksum(data);
  assert_eq!(
    ours,
    u64::from(reference),
    "CRC-8/SMBUS mismatch: ours={ours:#04x}, reference={reference:#04x}, len={}",
    data.len()
  );
}

fn test_crc16_differential(data: &[u8]) {
  let ours = engine_oneshot("CRC-16/XMODEM", data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(data);
  assert_eq!(
    ours,
    u64::from(reference),
    "CRC-16/XMODEM mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );
}

fn test_crc24_differential(data: &[u8]) {
  let ours = engine_oneshot("CRC-24/OPENPGP", data);
  let reference = crc::Crc::<u32>::new(&crc::CRC_24_OPENPGP).checksum(data);
  assert_eq!(
    ours,
    u64::from(reference),
    "CRC-24/OPENPGP mismatch: ours={ours:#08x}, reference={reference:#08x}, len={}",
    data.len()
  );
}

fn test_crc32_differential(data: &[u8]) {
  let ours = engine_oneshot("CRC-32/ISO-HDLC", data);
  let reference = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data);
  assert_eq!(
    ours,
    u64::from(reference),
    "CRC-32/ISO-HDLC mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );

  // The circuit-equivalent path must agree with both.
  let stepped = engine_stepped("CRC-32/ISO-HDLC", data);
  assert_eq!(stepped, ours, "CRC-32 stepper self-consistency mismatch");
}

fn test_crc64_differential(data: &[u8]) {
  let ours = engine_oneshot("CRC-64/XZ", data);
  let reference = crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(data);
  assert_eq!(
    ours, reference,
    "CRC-64/XZ mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
    data.len()
  );
}
