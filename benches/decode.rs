use byteorder::{LittleEndian, WriteBytesExt};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gaiageo::io::gaia::constants::{markers, type_codes};
use gaiageo::{read_geometry, GaiaReader};

fn header(code: i32) -> Vec<u8> {
    let mut blob = vec![markers::START, markers::LITTLE_ENDIAN];
    blob.write_i32::<LittleEndian>(4326).unwrap();
    for _ in 0..4 {
        blob.write_f64::<LittleEndian>(0.0).unwrap();
    }
    blob.push(markers::MBR);
    blob.write_i32::<LittleEndian>(code).unwrap();
    blob
}

/// Polygon with one ring of `n` coordinates
fn polygon_blob(n: usize, compressed: bool) -> Vec<u8> {
    let code = if compressed {
        type_codes::COMPRESSED_POLYGON
    } else {
        type_codes::POLYGON
    };
    let mut blob = header(code);
    blob.write_i32::<LittleEndian>(1).unwrap();
    blob.write_i32::<LittleEndian>(n as i32).unwrap();
    for i in 0..n {
        if compressed && i > 0 {
            blob.write_f32::<LittleEndian>(0.001).unwrap();
            blob.write_f32::<LittleEndian>(-0.001).unwrap();
        } else {
            blob.write_f64::<LittleEndian>(i as f64).unwrap();
            blob.write_f64::<LittleEndian>(i as f64).unwrap();
        }
    }
    blob.push(markers::END);
    blob
}

fn bench_decode(c: &mut Criterion) {
    let plain = polygon_blob(10_000, false);
    let compressed = polygon_blob(10_000, true);

    c.bench_function("polygon_10k", |b| {
        b.iter(|| read_geometry(black_box(&plain)).unwrap())
    });
    c.bench_function("compressed_polygon_10k", |b| {
        b.iter(|| read_geometry(black_box(&compressed)).unwrap())
    });

    let batch: Vec<Vec<u8>> = (0..256).map(|_| polygon_blob(1_000, true)).collect();
    c.bench_function("decode_all_256", |b| {
        b.iter(|| GaiaReader::new().decode_all(black_box(&batch)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
