// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for animated state changes in `understory_skin`.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use peniko::Color;
use understory_skin::{
    AnimationHint, Aspect, Category, ControlType, Primitive, Skin, SkinBuilder, Skinnable, State,
    Subcontrol,
};

const SUBCONTROLS: u16 = 16;

/// Every subcontrol changes its fill when pressed, and colors animate.
fn skin() -> Skin {
    let mut builder = SkinBuilder::new("bench");
    for index in 1..=SUBCONTROLS {
        let fill = Subcontrol::new(index).aspect(Primitive::Fill);
        builder.set_hint(fill, Color::from_rgba8(0, 0, 255, 255));
        builder.set_hint(fill.with_state(State::PRESSED), Color::from_rgba8(255, 0, 0, 255));
    }
    builder.set_hint(
        Aspect::animator(Subcontrol::CONTROL, Category::Color),
        AnimationHint::new(Duration::from_millis(200)),
    );
    builder.build()
}

fn bench_transitions(c: &mut Criterion) {
    let skin = skin();
    let mut group = c.benchmark_group("skin/state");

    group.bench_function("set_state_plain", |b| {
        b.iter_batched(
            || Skinnable::with_skin(ControlType::CONTROL, skin.clone()),
            |mut skinnable| {
                skinnable.set_skin_state(State::PRESSED, false);
                black_box(skinnable)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("set_state_animated", |b| {
        b.iter_batched(
            || Skinnable::with_skin(ControlType::CONTROL, skin.clone()),
            |mut skinnable| {
                skinnable.set_skin_state(State::PRESSED, true);
                black_box(skinnable)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("advance_and_read", |b| {
        let mut skinnable = Skinnable::with_skin(ControlType::CONTROL, skin.clone());
        skinnable.set_skin_state(State::PRESSED, true);
        let fill = Subcontrol::new(1).aspect(Primitive::Fill);
        b.iter(|| {
            // Zero steps keep the transitions running.
            skinnable.advance_transitions(Duration::ZERO);
            black_box(skinnable.color(fill))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_transitions);
criterion_main!(benches);
