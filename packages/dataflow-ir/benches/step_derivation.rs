//! Step derivation throughput over synthetic programs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dataflow_ir::{
    ExprKind, FieldAccessExpr, LocalFlowModel, Program, StepConfig, Type,
};

/// A program with `n` field write/read round trips
fn synthetic_program(n: usize) -> Program {
    let mut b = Program::builder();
    let field = b.field("f", Type::named("C"), Type::int(), false);

    for _ in 0..n {
        let x_write = b.expr(ExprKind::VarAccess { name: "x".into() });
        let write_access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: x_write,
            target: field,
        }));
        let y = b.expr(ExprKind::VarAccess { name: "y".into() });
        b.expr(ExprKind::Assign {
            lhs: write_access,
            rhs: y,
        });

        let x_read = b.expr(ExprKind::VarAccess { name: "x".into() });
        let read_access = b.expr(ExprKind::FieldAccess(FieldAccessExpr {
            qualifier: x_read,
            target: field,
        }));
        let z = b.expr(ExprKind::VarAccess { name: "z".into() });
        b.expr(ExprKind::Assign {
            lhs: z,
            rhs: read_access,
        });
    }

    b.build().unwrap()
}

fn bench_step_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_derivation");

    for &size in &[100usize, 1_000, 10_000] {
        let program = synthetic_program(size);
        let model = LocalFlowModel::new(&program).with_config(StepConfig::default());

        group.bench_with_input(BenchmarkId::new("store_steps", size), &size, |bench, _| {
            bench.iter(|| black_box(model.store_steps()));
        });

        group.bench_with_input(BenchmarkId::new("read_steps", size), &size, |bench, _| {
            bench.iter(|| black_box(model.read_steps()));
        });

        group.bench_with_input(BenchmarkId::new("index_build", size), &size, |bench, _| {
            bench.iter(|| black_box(model.index()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step_derivation);
criterion_main!(benches);
