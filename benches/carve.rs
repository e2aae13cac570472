#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{compute_energy, find_vertical_seam, seamcarve};

fn source() -> RgbImage {
    ImageBuffer::from_fn(64, 48, |x, y| {
        Rgb([(x * 7 + y) as u8, (x * y) as u8, ((x ^ y) * 5) as u8])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let img = source();
    c.bench_function("energy 64x48", move |b| b.iter(|| compute_energy(&img)));
}

fn seam_benchmark(c: &mut Criterion) {
    let energy = compute_energy(&source());
    c.bench_function("vertical seam 64x48", move |b| {
        b.iter(|| find_vertical_seam(&energy))
    });
}

fn carve_benchmark(c: &mut Criterion) {
    let img = source();
    c.bench_function("carve 64x48 -> 48x40", move |b| {
        b.iter(|| seamcarve(&img, 48, 40))
    });
}

criterion_group!(benches, energy_benchmark, seam_benchmark, carve_benchmark);
criterion_main!(benches);
