//! Basic engine usage: catalog lookup, streaming, and stepping.
//!
//! Run with: `cargo run --example basic -p crc-engine`

use crc_engine::{LookupTable, Processor, Stepper, catalog};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  println!("=== CRC Engine Examples ===\n");

  catalog_examples()?;
  streaming_example()?;
  stepper_example()?;
  Ok(())
}

/// Look up standard algorithms and compute their check values.
fn catalog_examples() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Catalog ---\n");

  let data = b"123456789";

  for name in ["CRC-8/SMBUS", "CRC-16/XMODEM", "CRC-24/OPENPGP", "CRC-32/ISO-HDLC", "CRC-64/XZ"] {
    let entry = catalog::entry(name)?;
    let mut processor = Processor::new(entry.params())?;
    processor.update(data);
    let crc = processor.finalize();
    let hex_digits = usize::from(entry.params().width.div_ceil(4));
    println!("{name:<18} 0x{crc:0hex_digits$X}");
    assert_eq!(crc, entry.check());
  }

  println!("\n{} algorithms cataloged, all self-checking:", catalog::names().count());
  assert!(catalog::names().all(|name| catalog::self_check(name).unwrap_or(false)));
  println!("ok\n");
  Ok(())
}

/// Streaming computation with a shared lookup table.
fn streaming_example() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Streaming ---\n");

  let params = catalog::lookup("CRC-32/ISO-HDLC")?;
  let table = LookupTable::generate(params, 8)?;

  // Any number of processors can share one table.
  let mut processor = Processor::with_table(params, &table)?;
  processor.update(b"1234");
  processor.update(b"56789");
  let crc = processor.finalize();
  println!("Streaming CRC-32: 0x{crc:08X} ({})", processor.strategy());
  assert_eq!(crc, 0xCBF4_3926);

  // finalize() is non-consuming: the stream can continue.
  processor.update(b"...");
  println!("Extended CRC-32:  0x{:08X}", processor.finalize());

  // reset() reuses the processor for an independent message.
  processor.reset();
  processor.update(b"new message");
  println!("Reset CRC-32:     0x{:08X}\n", processor.finalize());
  Ok(())
}

/// Circuit-equivalent stepping with codeword match detection.
fn stepper_example() -> Result<(), Box<dyn std::error::Error>> {
  println!("--- Stepper ---\n");

  let params = catalog::lookup("CRC-16/XMODEM")?;
  let mut stepper = Stepper::new(params, 8)?;

  // One data word per step, as a synchronous circuit would consume them.
  for &byte in b"123456789" {
    stepper.step(u64::from(byte))?;
  }
  let crc = stepper.finalize() as u16;
  println!("Stepped CRC-16:  0x{crc:04X}");
  assert_eq!(crc, 0x31C3);

  // Appending the CRC itself yields a valid codeword.
  for byte in crc.to_be_bytes() {
    stepper.step(u64::from(byte))?;
  }
  println!("Codeword match:  {}", stepper.match_detected());
  assert!(stepper.match_detected());
  Ok(())
}
