use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use swatchbook::{ColorFormat, Rgb, color::value, get_colors_from_scheme, hex_to_rgb, rgb_to_hex};

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function("hex_to_rgb", |b| b.iter(|| hex_to_rgb(black_box("#1f77b4"))));

    c.bench_function("rgb_to_hex", |b| {
        b.iter(|| rgb_to_hex(black_box(Rgb::new(31, 119, 180))))
    });

    let untyped = json!([31, 119, 180]);
    c.bench_function("value_convert_color", |b| {
        b.iter(|| value::convert_color(black_box(&untyped), "hex"))
    });

    c.bench_function("seaborn_as_hex", |b| {
        b.iter(|| get_colors_from_scheme(black_box("seaborn"), ColorFormat::Hex))
    });
}

criterion_group!(benches, benchmark_conversion);
criterion_main!(benches);
