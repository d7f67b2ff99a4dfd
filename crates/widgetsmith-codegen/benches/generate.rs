//! Bundle generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use widgetsmith_codegen::GeneratorRegistry;
use widgetsmith_core::{find_widget, parse_background, CIRCULAR_TESTIMONIALS, STACKED_TESTIMONIALS};

fn generate_defaults(c: &mut Criterion) {
    let registry = GeneratorRegistry::new();
    for id in [CIRCULAR_TESTIMONIALS, STACKED_TESTIMONIALS] {
        let Some(widget) = find_widget(id) else { continue };
        let settings = widget.default_settings();
        c.bench_function(&format!("generate_{id}"), |b| {
            b.iter(|| registry.generate(black_box(id), black_box(&settings)))
        });
    }
}

fn parse_gradient_background(c: &mut Criterion) {
    const GRADIENT: &str = "linear-gradient(135deg, rgba(255, 0, 0, 0.5) 0%, #00ff00 50%, #0000ff 100%)";
    c.bench_function("parse_background", |b| {
        b.iter(|| parse_background(black_box(GRADIENT)))
    });
}

criterion_group!(benches, generate_defaults, parse_gradient_background);
criterion_main!(benches);
