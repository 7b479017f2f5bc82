use criterion::criterion_main;

mod common;
mod resolve;

criterion_main!(walk::walk_benches, resolve::resolve_benches, attach::attach_benches);
