use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tle_reader::{checksum, FileFormat, TleRecord, TleStream};

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

fn bench_checksum(c: &mut Criterion) {
    c.bench_function("checksum/verify", |b| {
        b.iter(|| checksum::verify(black_box(ISS_LINE1)))
    });
}

fn bench_record(c: &mut Criterion) {
    c.bench_function("record/from_two_lines_strict", |b| {
        b.iter(|| TleRecord::from_two_lines(black_box(ISS_LINE1), black_box(ISS_LINE2), true))
    });
}

/// Catalog of 1000 three-line records read through the stream
fn bench_stream(c: &mut Criterion) {
    let catalog: String = (0..1000)
        .map(|i| format!("SAT {i}\n{ISS_LINE1}\n{ISS_LINE2}\n"))
        .collect();

    c.bench_function("stream/three_lines_1000", |b| {
        b.iter(|| {
            let mut source = Cursor::new(catalog.as_bytes());
            let mut stream = TleStream::new(&mut source, FileFormat::ThreeLines);
            stream.set_strict(true);
            stream.filter(Result::is_ok).count()
        })
    });
}

criterion_group!(benches, bench_checksum, bench_record, bench_stream);
criterion_main!(benches);
