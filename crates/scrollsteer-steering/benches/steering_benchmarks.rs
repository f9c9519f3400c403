//! Benchmark tests for transition and cycle planning.
//!
//! Run with: cargo bench --bench steering_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use scrollsteer_steering::prelude::*;
use std::hint::black_box;

/// Deterministic scroll pattern mixing deepening and unwinding steps.
fn scroll_pattern() -> Vec<f64> {
    (0..1000)
        .map(|i| if i % 7 < 4 { 1.0 } else { -1.0 })
        .collect()
}

fn bench_quantized_transition(c: &mut Criterion) {
    let deltas = scroll_pattern();

    c.bench_function("quantized_transition", |b| {
        b.iter(|| {
            let mut state = SteeringState {
                enabled: true,
                ..SteeringState::neutral()
            };
            for &dy in &deltas {
                apply_scroll(
                    &mut state,
                    ScrollDelta::vertical(black_box(dy)),
                    SteeringPolicy::DutyCycle,
                );
            }
            black_box(state)
        });
    });
}

fn bench_continuous_transition(c: &mut Criterion) {
    let deltas = scroll_pattern();

    c.bench_function("continuous_transition", |b| {
        b.iter(|| {
            let mut state = SteeringState {
                enabled: true,
                ..SteeringState::neutral()
            };
            for &dy in &deltas {
                apply_scroll(
                    &mut state,
                    ScrollDelta::vertical(black_box(dy)),
                    SteeringPolicy::TapRate,
                );
            }
            black_box(state)
        });
    });
}

fn bench_cycle_planning(c: &mut Criterion) {
    let states: Vec<SteeringState> = (0..=MAX_LEVEL)
        .map(|level| SteeringState {
            enabled: true,
            direction: (level > 0).then_some(Side::Right),
            level,
            intensity: 0.0,
        })
        .collect();

    c.bench_function("plan_next_cycle", |b| {
        b.iter(|| {
            for state in &states {
                black_box(next_cycle(black_box(state), SteeringPolicy::DutyCycle));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_quantized_transition,
    bench_continuous_transition,
    bench_cycle_planning
);
criterion_main!(benches);
