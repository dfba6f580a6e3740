use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrine::animation::AnimationDriver;
use vitrine::layout::{
    LayoutConfig, Positioner, PositionerRegistry, StackPositioner,
};

fn stack_transform_benchmark(c: &mut Criterion) {
    let positioner = StackPositioner::default();
    let config = LayoutConfig::new(50, 100);
    let _ = c.bench_function("stack_item_transform", |b| {
        b.iter(|| {
            black_box(
                positioner.item_transform(black_box(75), black_box(&config)),
            )
        })
    });
}

fn registry_resolve_benchmark(c: &mut Criterion) {
    let registry = PositionerRegistry::builtin();
    let _ = c.bench_function("registry_resolve", |b| {
        b.iter(|| black_box(registry.resolve(black_box("carousel"))))
    });
}

fn driver_tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_tick");

    for count in [10, 100, 1000] {
        let positioner = StackPositioner::default();
        let mut driver = AnimationDriver::new();
        driver.retarget(&positioner, &LayoutConfig::new(0, count));
        driver.retarget(&positioner, &LayoutConfig::new(count / 2, count));

        let _ = group.bench_function(format!("{count}_items"), |b| {
            b.iter(|| black_box(driver.tick(black_box(1.0 / 60.0))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    stack_transform_benchmark,
    registry_resolve_benchmark,
    driver_tick_benchmark
);
criterion_main!(benches);
