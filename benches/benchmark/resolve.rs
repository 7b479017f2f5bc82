use crate::common::{configure_criterion, plain_chain, status_chain, DEPTHS};
use criterion::{criterion_group, BenchmarkId, Criterion};
use status_rail::chain::AsDynError;
use status_rail::{code, from_error, Resolver};
use std::hint::black_box;

pub fn bench_from_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/from_error");
    for depth in DEPTHS {
        let err = status_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(from_error(Some(err.as_dyn_error()))))
        });
    }
    group.finish();
}

pub fn bench_code_vs_from_error(c: &mut Criterion) {
    let err = status_chain(5);
    let node = err.as_dyn_error();

    c.bench_function("resolve/code_only", |b| b.iter(|| black_box(code(Some(node)))));
    c.bench_function("resolve/full_status", |b| b.iter(|| black_box(from_error(Some(node)))));
    c.bench_function("resolve/none", |b| b.iter(|| black_box(from_error(black_box(None)))));
}

pub fn bench_unmatched(c: &mut Criterion) {
    let err = plain_chain(20);
    let node = err.as_dyn_error();
    let bounded = Resolver::new().max_depth(64);

    c.bench_function("resolve/unmatched_unbounded", |b| b.iter(|| black_box(code(Some(node)))));
    c.bench_function("resolve/unmatched_bounded", |b| {
        b.iter(|| black_box(bounded.code(Some(node))))
    });
}

criterion_group! {
    name = resolve_benches;
    config = configure_criterion();
    targets =
        bench_from_error,
        bench_code_vs_from_error,
        bench_unmatched,
}
