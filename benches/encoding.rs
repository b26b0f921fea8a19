use basexx::{BASE10, BASE16, BASE62, BASE94, BINARY, Buffer, convert, convert_bytes, estimate_length};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_binary_to_base62(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_to_base62");

    for size in [16, 64, 256, 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 251) as u8 + 1).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| convert_bytes(black_box(data), &BINARY, &BASE62).unwrap());
        });
    }
    group.finish();
}

fn bench_base94_to_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("base94_to_binary");

    for size in [16, 64, 256, 1024].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 251) as u8 + 1).collect();
        let encoded = convert_bytes(&data, &BINARY, &BASE94).unwrap();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| convert_bytes(black_box(encoded), &BASE94, &BINARY).unwrap());
        });
    }
    group.finish();
}

fn bench_preallocated_decimal_to_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_to_hex_preallocated");

    for digits in [20, 100, 500].iter() {
        let input: Vec<u8> = (0..*digits).map(|i| b'1' + (i % 9) as u8).collect();
        let mut storage = vec![0u8; estimate_length(10, 16, input.len())];

        group.throughput(Throughput::Bytes(*digits as u64));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &input, |b, input| {
            b.iter(|| {
                let mut src = Buffer::new(black_box(&input[..]), BASE10);
                let mut dest = Buffer::new(&mut storage[..], BASE16);
                convert(&mut dest, &mut src).unwrap()
            });
        });
    }
    group.finish();
}

fn bench_estimate_length(c: &mut Criterion) {
    c.bench_function("estimate_length_1k", |b| {
        b.iter(|| estimate_length(black_box(256), black_box(62), black_box(1024)));
    });
}

criterion_group!(
    benches,
    bench_binary_to_base62,
    bench_base94_to_binary,
    bench_preallocated_decimal_to_hex,
    bench_estimate_length
);
criterion_main!(benches);
