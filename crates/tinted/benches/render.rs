use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tinted::{foreground, Alias, StyledText, BOLD};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    group.bench_function("foreground-hex", |b| {
        b.iter(|| foreground(black_box("#a0522d")))
    });

    let text = StyledText::new((160, 82, 45))
        .expect("valid color")
        .with_style(BOLD);
    let parts = ["hello", "brave", "new", "world"];
    group.bench_function("styled-text", |b| {
        b.iter(|| text.render(black_box(&parts[..])))
    });

    let alias = Alias::new("SERVER", (255, 255, 255), "#1e90ff")
        .expect("valid colors")
        .with_banner_width(12);
    group.bench_function("banner", |b| b.iter(|| black_box(&alias).banner()));
    group.bench_function("badge", |b| b.iter(|| black_box(&alias).badge()));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
