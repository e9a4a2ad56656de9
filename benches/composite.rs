//! Benchmarks for composite construction, classification and transformation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use geokernel::d3::objects::{Composite, LineString, Point};
use geokernel::d3::{Object, Transformation};
use geokernel::Vec3;

/// Generates a deterministic helix with `count` vertices.
fn helix(count: usize) -> LineString<f64> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.1;
            Point::new(t.cos(), t.sin(), t * 0.05).unwrap()
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_construction");

    for count in [10, 100, 1000] {
        let objects: Vec<Object<f64>> = (0..count).map(|_| helix(16).into()).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &objects, |b, objects| {
            b.iter(|| {
                let composite = Composite::from_objects(black_box(objects.clone()));
                black_box(composite.is_defined())
            })
        });
    }

    group.finish();
}

fn bench_transformation(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_transformation");

    let t = Transformation::rotation(Vec3::new(1.0, 1.0, 0.0), 0.3)
        .unwrap()
        .then(&Transformation::translation(Vec3::new(1.0, -2.0, 0.5)))
        .unwrap();

    for count in [100, 1000, 10000] {
        let composite = Composite::new(helix(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &composite,
            |b, composite| b.iter(|| composite.apply_transformation(black_box(&t)).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_transformation);
criterion_main!(benches);
