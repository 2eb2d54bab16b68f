//! Benchmarks for the triangulation pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tessera::triangulate;

/// Deterministic xorshift, so runs are comparable.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn in_range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next() % (hi - lo) as u64) as i32
    }
}

/// A star polygon with `spikes` spikes: alternating inner and outer radii
/// around the origin, which makes every other vertex reflex.
fn star_path(spikes: usize, seed: u64) -> Vec<i16> {
    let mut rng = XorShift(seed);
    let n = spikes * 2;
    let mut path = Vec::with_capacity(n * 2);

    for i in 0..n {
        let angle = i as f64 / n as f64 * std::f64::consts::TAU;
        let radius = if i % 2 == 0 {
            rng.in_range(12_000, 16_000)
        } else {
            rng.in_range(3_000, 6_000)
        } as f64;
        path.push((radius * angle.cos()) as i16);
        path.push((radius * angle.sin()) as i16);
    }

    path
}

/// A `side x side` grid of disjoint square islands, exercising the
/// path-joining phase.
fn island_paths(side: usize) -> Vec<Vec<i16>> {
    let mut paths = Vec::with_capacity(side * side);
    let pitch = 30_000 / side as i32;
    let size = pitch / 2;

    for gy in 0..side {
        for gx in 0..side {
            let x0 = (-15_000 + gx as i32 * pitch) as i16;
            let y0 = (-15_000 + gy as i32 * pitch) as i16;
            let x1 = (i32::from(x0) + size) as i16;
            let y1 = (i32::from(y0) + size) as i16;
            paths.push(vec![x0, y0, x1, y0, x1, y1, x0, y1]);
        }
    }

    paths
}

fn bench_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_star");

    for spikes in [32, 256, 2048] {
        let path = star_path(spikes, 12345);
        let verts = path.len() / 2;
        group.throughput(Throughput::Elements(verts as u64));

        group.bench_with_input(BenchmarkId::new("spikes", spikes), &path, |b, path| {
            b.iter(|| {
                let mut out = Vec::new();
                triangulate(&mut out, &[black_box(path.as_slice())]);
                out
            })
        });
    }

    group.finish();
}

fn bench_islands(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_islands");

    for side in [2, 4, 8] {
        let paths = island_paths(side);
        let refs: Vec<&[i16]> = paths.iter().map(|p| p.as_slice()).collect();
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("grid", side), &refs, |b, refs| {
            b.iter(|| {
                let mut out = Vec::new();
                triangulate(&mut out, black_box(refs));
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_star, bench_islands);
criterion_main!(benches);
