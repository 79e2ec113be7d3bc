use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_wkb_common::{Endianness, FlatCoordsCodec};

/// A polygon with 100 rings of 1000 XY coordinates each
fn create_data() -> (Vec<f64>, Vec<usize>) {
    let ring_len = 1000 * 2;
    let flat: Vec<f64> = (0..100 * ring_len).map(|i| i as f64 * 0.5).collect();
    let ends = (1..=100).map(|i| i * ring_len).collect();
    (flat, ends)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let codec = FlatCoordsCodec::default();
    let (flat, ends) = create_data();

    let mut encoded: Vec<u8> = vec![];
    codec
        .write_flat_coords_2(&mut encoded, Endianness::LittleEndian, &flat, &ends, 2)
        .unwrap();

    c.bench_function("write level 2 flat coords", |b| {
        b.iter(|| {
            let mut buf: Vec<u8> = Vec::with_capacity(encoded.len());
            codec
                .write_flat_coords_2(&mut buf, Endianness::LittleEndian, &flat, &ends, 2)
                .unwrap();
        })
    });
    c.bench_function("read level 2 flat coords", |b| {
        b.iter(|| {
            let _ = codec
                .read_flat_coords_2(encoded.as_slice(), Endianness::LittleEndian, 2)
                .unwrap();
        })
    });
    c.bench_function("read level 2 flat coords, byte swapped", |b| {
        let mut swapped: Vec<u8> = vec![];
        codec
            .write_flat_coords_2(&mut swapped, Endianness::BigEndian, &flat, &ends, 2)
            .unwrap();
        b.iter(|| {
            let _ = codec
                .read_flat_coords_2(swapped.as_slice(), Endianness::BigEndian, 2)
                .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
