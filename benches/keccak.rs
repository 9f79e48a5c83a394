use core::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kryptonsponge::keccak::{keccak_f1600, State};
use kryptonsponge::keccak256;

fn bench_permutation(c: &mut Criterion) {
	c.bench_function("keccak_f1600", |b| {
		let mut state = State::new();
		b.iter(|| keccak_f1600(black_box(&mut state)));
	});
}

fn bench_keccak256(c: &mut Criterion) {
	let mut g = c.benchmark_group("keccak256");

	for len in [0, 135, 1024, 16 * 1024] {
		let input = vec![0xa5; len];

		g.throughput(Throughput::Bytes(len as u64));
		g.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
			b.iter(|| keccak256(black_box(input)));
		});
	}

	g.finish();
}

criterion_group!(benches, bench_permutation, bench_keccak256);
criterion_main!(benches);
