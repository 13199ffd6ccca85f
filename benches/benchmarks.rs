//! Performance benchmarks for the preview's hot paths.
//!
//! Everything here runs on every seed or style change:
//! - Palette generation
//! - APCA contrast calculations
//! - Gamut mapping operations
//! - Style rule resolution
//! - Summary rendering

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use palette::{Oklch, Srgb};
use styleboard::apca::apca_contrast;
use styleboard::gamut_map::{gamut_map, max_chroma_at};
use styleboard::generate::{ColorPalette, generate_palette};
use styleboard::layout::ViewMode;
use styleboard::seed::SeedColor;
use styleboard::style::{
    ComponentKind, InteractionState, StyleId, Variant, resolve, resolved_rules,
};
use styleboard::summary;
use styleboard::validation::validate;

/// 256 colors cycling through RGB.
fn test_colors() -> Vec<Srgb<u8>> {
    (0u8..=255)
        .map(|i: u8| Srgb::new(i, i.wrapping_mul(97), i.wrapping_mul(193)))
        .collect()
}

/// Benchmark palette generation for 256 seeds.
fn bench_palette_generation(c: &mut Criterion) {
    let seeds: Vec<SeedColor> = test_colors().into_iter().map(SeedColor::from).collect();

    c.bench_function("palette_generation_256", |b| {
        b.iter(|| {
            for seed in &seeds {
                black_box(generate_palette(black_box(*seed)));
            }
        })
    });
}

/// Benchmark APCA contrast for 256 foreground colors against the surface.
fn bench_apca_contrast(c: &mut Criterion) {
    let background = Srgb::new(0xF9u8, 0xFA, 0xFB);
    let foregrounds = test_colors();

    c.bench_function("apca_contrast_256", |b| {
        b.iter(|| {
            for fg in &foregrounds {
                black_box(apca_contrast(*fg, background));
            }
        })
    });
}

/// Benchmark palette validation.
fn bench_validate(c: &mut Criterion) {
    let palette = ColorPalette::default();

    c.bench_function("validate", |b| b.iter(|| black_box(validate(black_box(&palette)))));
}

/// Benchmark gamut mapping for 256 colors, in and out of gamut.
fn bench_gamut_map(c: &mut Criterion) {
    let colors: Vec<Oklch<f32>> = (0u8..=255)
        .map(|i: u8| {
            // Lightness 0.1..0.95, chroma up to 0.4 (often out of gamut)
            let l = 0.1 + (i as f32 / 255.0) * 0.85;
            let chroma = (i.wrapping_mul(73) as f32 / 255.0) * 0.4;
            let hue = (i.wrapping_mul(193) as f32 / 255.0) * 360.0;
            Oklch::new(l, chroma, hue)
        })
        .collect();

    c.bench_function("gamut_map_256", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(gamut_map(*color));
            }
        })
    });
}

/// Benchmark the in-gamut chroma search at full requested chroma.
fn bench_max_chroma_at(c: &mut Criterion) {
    let colors: Vec<Oklch<f32>> = (0u8..=255)
        .map(|i: u8| {
            let l = 0.1 + (i as f32 / 255.0) * 0.8;
            let hue = (i.wrapping_mul(193) as f32 / 255.0) * 360.0;
            Oklch::new(l, 0.4, hue)
        })
        .collect();

    c.bench_function("max_chroma_at_256", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(max_chroma_at(*color));
            }
        })
    });
}

/// Benchmark resolving one rule per component and state for every style.
fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_all_styles", |b| {
        b.iter(|| {
            for style in StyleId::ALL {
                for component in ComponentKind::ALL {
                    for state in InteractionState::ALL {
                        black_box(resolve(style, component, Variant::Default, state));
                    }
                }
            }
        })
    });
}

fn bench_resolved_rules(c: &mut Criterion) {
    c.bench_function("resolved_rules_brutalist", |b| {
        b.iter(|| black_box(resolved_rules(black_box(StyleId::Brutalist))))
    });
}

fn bench_summary(c: &mut Criterion) {
    let palette = ColorPalette::default();

    c.bench_function("summary_render", |b| {
        b.iter(|| {
            black_box(summary::render(
                black_box(&palette),
                StyleId::Corporate,
                ViewMode::Desktop,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_palette_generation,
    bench_apca_contrast,
    bench_validate,
    bench_gamut_map,
    bench_max_chroma_at,
    bench_resolve,
    bench_resolved_rules,
    bench_summary,
);

criterion_main!(benches);
