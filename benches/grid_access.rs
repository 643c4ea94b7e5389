use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixgrid::{FixedGrid, Point};

const CAPACITY: usize = 64 * 64;

type BenchGrid = FixedGrid<u32, CAPACITY>;

fn _linear(g: &BenchGrid) -> u64 {
    let mut sum = 0_u64;
    for i in 0..g.size() {
        sum += g[i] as u64;
    }
    sum
}

fn _grid(g: &BenchGrid) -> u64 {
    let mut sum = 0_u64;
    for y in 0..g.height() {
        for x in 0..g.width() {
            sum += g[(x, y)] as u64;
        }
    }
    sum
}

fn _checked(g: &BenchGrid) -> u64 {
    let mut sum = 0_u64;
    for y in 0..g.height() {
        for x in 0..g.width() {
            sum += *g.at_xy(x, y).unwrap() as u64;
        }
    }
    sum
}

fn _point(g: &BenchGrid) -> u64 {
    let mut sum = 0_u64;
    for y in 0..g.height() {
        for x in 0..g.width() {
            sum += g.value_at(Point::new(x, y)) as u64;
        }
    }
    sum
}

pub fn access(c: &mut Criterion) {
    let g = BenchGrid::from_fn(64, |p| (p.x ^ p.y) as u32).unwrap();

    let mut group = c.benchmark_group("access");
    group.bench_with_input(BenchmarkId::new("linear", 64), &g, |b, g| {
        b.iter(|| _linear(black_box(g)));
    });
    group.bench_with_input(BenchmarkId::new("grid", 64), &g, |b, g| {
        b.iter(|| _grid(black_box(g)));
    });
    group.bench_with_input(BenchmarkId::new("checked", 64), &g, |b, g| {
        b.iter(|| _checked(black_box(g)));
    });
    group.bench_with_input(BenchmarkId::new("point", 64), &g, |b, g| {
        b.iter(|| _point(black_box(g)));
    });
    group.finish();
}

pub fn reshape(c: &mut Criterion) {
    let mut g = BenchGrid::new(64).unwrap();

    c.bench_function("reshape", |b| {
        b.iter(|| {
            g.reshape(black_box(128), black_box(32)).unwrap();
            g.reshape(black_box(64), black_box(64)).unwrap();
        })
    });
}

criterion_group!(benches, access, reshape);
criterion_main!(benches);
