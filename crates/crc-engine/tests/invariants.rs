//! Deterministic invariant sweeps across engines and strategies.

#![cfg(feature = "alloc")]

use crc_engine::{CrcParams, LookupTable, Processor, Stepper, catalog, reflect_bits};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

const LENGTHS: [usize; 12] = [0, 1, 2, 3, 7, 8, 15, 16, 31, 64, 255, 1024];
const SEEDS: [u64; 3] = [0x0123_4567_89AB_CDEF, 0xD1B5_4A32_D192_ED03, 0x9E37_79B9_7F4A_7C15];

/// Independent LSB-first reference for fully reflected algorithms.
///
/// Works with the reflected polynomial and a reflected register, so it
/// shares no code path (and no bit orientation) with the engine under test.
fn crc_reflected_reference(poly_reflected: u64, width: u8, init: u64, xor_out: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let mut crc = reflect_bits(init, width);
  for &b in data {
    crc ^= u64::from(b);
    for _ in 0..8 {
      let feed = 0u64.wrapping_sub(crc & 1);
      crc = (crc >> 1) ^ (poly_reflected & feed);
    }
  }
  (crc ^ xor_out) & mask
}

/// Independent MSB-first reference for non-reflected algorithms of
/// byte-multiple width.
fn crc_msb_reference(poly: u64, width: u8, init: u64, xor_out: u64, data: &[u8]) -> u64 {
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width - 1);
  let shift = u32::from(width) - 8;
  let mut crc = init & mask;
  for &b in data {
    crc ^= u64::from(b) << shift;
    for _ in 0..8 {
      crc = if crc & top != 0 { ((crc << 1) ^ poly) & mask } else { (crc << 1) & mask };
    }
  }
  (crc ^ xor_out) & mask
}

fn oneshot(params: CrcParams, data: &[u8]) -> u64 {
  let mut processor = Processor::new(params).expect("valid parameters");
  processor.update(data);
  processor.finalize()
}

#[test]
fn reflected_algorithms_match_independent_reference() {
  for name in ["CRC-8/MAXIM-DOW", "CRC-16/KERMIT", "CRC-32/ISO-HDLC", "CRC-64/XZ"] {
    let params = catalog::lookup(name).expect("catalog entry");
    assert!(params.reflect_in && params.reflect_out, "{name} is not fully reflected");
    let poly_reflected = reflect_bits(params.polynomial, params.width);

    for &len in &LENGTHS {
      for &seed in &SEEDS {
        let data = gen_bytes(len, seed ^ len as u64);
        let expected =
          crc_reflected_reference(poly_reflected, params.width, params.initial, params.xor_out, &data);
        assert_eq!(oneshot(params, &data), expected, "{name} len={len}");
      }
    }
  }
}

#[test]
fn msb_first_algorithms_match_independent_reference() {
  for name in ["CRC-8/SMBUS", "CRC-16/XMODEM", "CRC-24/OPENPGP", "CRC-32/BZIP2"] {
    let params = catalog::lookup(name).expect("catalog entry");
    assert!(!params.reflect_in && !params.reflect_out, "{name} is reflected");

    for &len in &LENGTHS {
      for &seed in &SEEDS {
        let data = gen_bytes(len, seed ^ len as u64);
        let expected = crc_msb_reference(params.polynomial, params.width, params.initial, params.xor_out, &data);
        assert_eq!(oneshot(params, &data), expected, "{name} len={len}");
      }
    }
  }
}

#[test]
fn streaming_splits_match_oneshot() {
  for name in ["CRC-5/USB", "CRC-12/UMTS", "CRC-16/DNP", "CRC-32/ISO-HDLC"] {
    let params = catalog::lookup(name).expect("catalog entry");
    let table = LookupTable::generate(params, 8).expect("valid table");

    for &len in &LENGTHS {
      let data = gen_bytes(len, 0x5D58_39A7_3D87_1CEB ^ len as u64);
      let expected = oneshot(params, &data);

      for &split in &[0usize, 1, len / 3, len / 2, len.saturating_sub(1), len] {
        if split > len {
          continue;
        }
        let (a, b) = data.split_at(split);

        let mut bitwise = Processor::new(params).expect("valid parameters");
        bitwise.update(a);
        bitwise.update(b);
        assert_eq!(bitwise.finalize(), expected, "{name} bitwise len={len} split={split}");

        let mut tabled = Processor::with_table(params, &table).expect("matching table");
        tabled.update(a);
        tabled.update(b);
        assert_eq!(tabled.finalize(), expected, "{name} tabled len={len} split={split}");
      }
    }
  }
}

#[test]
fn every_table_width_matches_bitwise() {
  for name in ["CRC-3/GSM", "CRC-7/MMC", "CRC-11/FLEXRAY", "CRC-16/ARC", "CRC-40/GSM", "CRC-64/WE"] {
    let params = catalog::lookup(name).expect("catalog entry");
    for chunk_width in [1u8, 2, 4, 8] {
      let table = LookupTable::generate(params, chunk_width).expect("valid table");
      for &len in &[0usize, 1, 9, 64, 257] {
        let data = gen_bytes(len, u64::from(chunk_width) << 32 | len as u64);
        let mut tabled = Processor::with_table(params, &table).expect("matching table");
        tabled.update(&data);
        assert_eq!(
          tabled.finalize(),
          oneshot(params, &data),
          "{name} chunk_width={chunk_width} len={len}"
        );
      }
    }
  }
}

#[test]
fn stepper_matches_processor() {
  for name in ["CRC-3/ROHC", "CRC-8/AUTOSAR", "CRC-15/CAN", "CRC-21/CAN-FD", "CRC-32/ISCSI", "CRC-64/GO-ISO"]
  {
    let params = catalog::lookup(name).expect("catalog entry");
    let mut stepper = Stepper::new(params, 8).expect("valid stepper");
    for &len in &[0usize, 1, 8, 63, 256] {
      let data = gen_bytes(len, 0xC4FF_8071 ^ len as u64);
      stepper.reset();
      for &byte in &data {
        stepper.step(u64::from(byte)).expect("byte fits the step width");
      }
      assert_eq!(stepper.finalize(), oneshot(params, &data), "{name} len={len}");
    }
  }
}

#[test]
fn reset_matches_fresh_processor() {
  let params = catalog::lookup("CRC-16/MODBUS").expect("catalog entry");
  let data = gen_bytes(300, 0xBEEF);

  let mut reused = Processor::new(params).expect("valid parameters");
  reused.update(b"stale state from an unrelated message");
  reused.reset();
  reused.update(&data);

  assert_eq!(reused.finalize(), oneshot(params, &data));
}
