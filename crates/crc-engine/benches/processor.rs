//! Processor benchmarks: bit-serial vs table folding vs stepping.
//!
//! Run: `cargo bench -p crc-engine -- processor`

use crc_engine::{LookupTable, Processor, Stepper, catalog};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 4] = [64, 1024, 16384, 262144];

/// Smaller sizes for the intentionally slow bit-serial path.
const BITWISE_SIZES: [usize; 3] = [64, 256, 1024];

fn test_data(len: usize) -> Vec<u8> {
  (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
}

fn bench_table(c: &mut Criterion) {
  let params = catalog::lookup("CRC-32/ISO-HDLC").expect("catalog entry");
  let table = LookupTable::generate(params, 8).expect("valid table");
  let mut group = c.benchmark_group("processor/table8");

  for size in SIZES {
    let data = test_data(size);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut processor = Processor::with_table(params, &table).expect("matching table");
        processor.update(data);
        core::hint::black_box(processor.finalize())
      });
    });
  }

  group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
  let params = catalog::lookup("CRC-32/ISO-HDLC").expect("catalog entry");
  let mut group = c.benchmark_group("processor/bitwise");

  for size in BITWISE_SIZES {
    let data = test_data(size);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut processor = Processor::new(params).expect("valid parameters");
        processor.update(data);
        core::hint::black_box(processor.finalize())
      });
    });
  }

  group.finish();
}

fn bench_stepper(c: &mut Criterion) {
  let params = catalog::lookup("CRC-32/ISO-HDLC").expect("catalog entry");
  let mut group = c.benchmark_group("stepper/byte");

  for size in BITWISE_SIZES {
    let data = test_data(size);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut stepper = Stepper::new(params, 8).expect("valid stepper");
        for &byte in data {
          stepper.step(u64::from(byte)).expect("byte fits the step width");
        }
        core::hint::black_box(stepper.finalize())
      });
    });
  }

  group.finish();
}

fn bench_table_generation(c: &mut Criterion) {
  let params = catalog::lookup("CRC-32/ISO-HDLC").expect("catalog entry");
  let mut group = c.benchmark_group("tables/generate");

  for chunk_width in [4u8, 8] {
    group.bench_with_input(
      BenchmarkId::from_parameter(chunk_width),
      &chunk_width,
      |b, &chunk_width| {
        b.iter(|| core::hint::black_box(LookupTable::generate(params, chunk_width).expect("valid table")));
      },
    );
  }

  group.finish();
}

criterion_group!(benches, bench_table, bench_bitwise, bench_stepper, bench_table_generation);
criterion_main!(benches);
