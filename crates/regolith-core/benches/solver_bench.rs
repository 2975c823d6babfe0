// ─────────────────────────────────────────────────────────────────────
// SCPN Regolith Core — Slab Solver Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use regolith_core::{BoundaryDrive, SlabSolver};
use regolith_types::config::SlabConfig;
use std::hint::black_box;

/// Reference scenario trimmed to a short run (Nt = 2000, Nz = 100).
fn bench_config() -> SlabConfig {
    SlabConfig {
        t_extent: 0.05,
        mu: 1e-12,
        ..Default::default()
    }
}

fn bench_integrators(c: &mut Criterion) {
    let mut group = c.benchmark_group("slab_integrators");

    group.bench_function("oscillating_double", |b| {
        b.iter_batched(
            || SlabSolver::new(bench_config()).expect("valid bench config"),
            |solver| {
                let field = solver
                    .oscillating(BoundaryDrive::Double)
                    .expect("solve should succeed");
                black_box(field[[0, 0]]);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("constant", |b| {
        b.iter_batched(
            || SlabSolver::new(bench_config()).expect("valid bench config"),
            |solver| {
                let field = solver.constant().expect("solve should succeed");
                black_box(field[[0, 0]]);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("radiative_double", |b| {
        b.iter_batched(
            || SlabSolver::new(bench_config()).expect("valid bench config"),
            |solver| {
                let field = solver
                    .radiative(BoundaryDrive::Double)
                    .expect("solve should succeed");
                black_box(field[[0, 0]]);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("slab_analytic");

    group.bench_function("thermal_wave", |b| {
        b.iter_batched(
            || SlabSolver::new(bench_config()).expect("valid bench config"),
            |solver| {
                let field = solver.thermal_wave();
                black_box(field[[1, 0]]);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("constant_surface", |b| {
        b.iter_batched(
            || SlabSolver::new(bench_config()).expect("valid bench config"),
            |solver| {
                let field = solver.constant_surface();
                black_box(field[[1, 0]]);
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_integrators, bench_analytic);
criterion_main!(benches);
