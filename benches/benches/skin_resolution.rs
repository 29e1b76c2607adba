// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for hint resolution in `understory_skin`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::fmt::Write as _;
use std::sync::Once;

use peniko::Color;
use understory_skin::{
    Aspect, ControlType, HintTable, Primitive, Skin, SkinBuilder, Skinnable, State, Subcontrol,
    resolve_hint,
};
use understory_skin_sheet::{Vocabulary, load_skin};

const PANEL: Subcontrol = Subcontrol::new(1);

fn fill() -> Aspect {
    PANEL.aspect(Primitive::Fill)
}

/// A skin with a generic fill plus one entry per single state bit.
fn skin() -> Skin {
    let mut builder = SkinBuilder::new("bench").hint(fill(), Color::from_rgba8(0, 0, 255, 255));
    for bit in 0..5 {
        builder.set_hint(
            fill().with_state(State::from_bits_retain(1 << bit)),
            Color::from_rgba8(bit * 40, 0, 0, 255),
        );
    }
    builder.build()
}

fn bench_resolve(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Aspect={} Hint={} Skinnable={}",
            size_of::<Aspect>(),
            size_of::<understory_skin::Hint>(),
            size_of::<Skinnable>(),
        );
    });

    let skin = skin();
    let mut group = c.benchmark_group("skin/resolve");

    group.bench_function("local", |b| {
        let mut skinnable = Skinnable::with_skin(ControlType::CONTROL, skin.clone());
        skinnable.set_color(fill(), Color::WHITE);
        b.iter(|| black_box(skinnable.color(fill())));
    });

    group.bench_function("skin", |b| {
        let skinnable = Skinnable::with_skin(ControlType::CONTROL, skin.clone());
        b.iter(|| black_box(skinnable.color(fill())));
    });

    group.bench_function("control_fallback", |b| {
        let skin = SkinBuilder::new("fallback")
            .hint(Subcontrol::CONTROL.aspect(Primitive::Fill), Color::BLACK)
            .build();
        let skinnable = Skinnable::with_skin(ControlType::CONTROL, skin);
        b.iter(|| black_box(skinnable.color(fill())));
    });

    group.bench_function("not_found", |b| {
        let skinnable = Skinnable::with_skin(ControlType::CONTROL, skin.clone());
        b.iter(|| black_box(skinnable.effective_hint(PANEL.aspect(Primitive::Spacing))));
    });

    // Worst case: no state-specific entry matches, so every submask is tried.
    for bits in [1_u32, 3, 5, 8] {
        let state = State::from_bits_retain(((1_u32 << bits) - 1) as u16);
        let local = HintTable::new();
        let mut table = HintTable::new();
        table.set_hint(fill(), Color::BLACK);
        group.bench_function(BenchmarkId::new("submasks", bits), |b| {
            b.iter(|| black_box(resolve_hint(Some(&local), Some(&table), fill(), state)));
        });
    }

    group.finish();
}

fn bench_sheet(c: &mut Criterion) {
    let mut sheet = String::from("name = \"bench\"\n");
    for index in 0..64 {
        let _ = write!(
            sheet,
            "\n[[hints]]\nprimitive = \"Spacing\"\nstates = [\"HOVERED\"]\nmetric = {index}.0\n"
        );
    }
    let vocabulary = Vocabulary::new();
    c.bench_function("skin/sheet/load_64", |b| {
        b.iter(|| black_box(load_skin(&sheet, &vocabulary)));
    });
}

criterion_group!(benches, bench_resolve, bench_sheet);
criterion_main!(benches);
