use criterion::{Criterion, black_box, criterion_group, criterion_main};

use coin_combinations::dynamic_programming::coin_combinations_2::count_ways;

fn bench_count_ways(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_ways");

    // CSES goes up to x = 10^6; kept smaller so one iteration stays short
    let mut coins = vec![0];
    coins.extend(1..100);
    group.bench_function("100 coins, x=10000", |b| {
        b.iter(|| count_ways(black_box(10_000), black_box(&coins)))
    });

    let ones = vec![0, 1, 1, 1, 1, 1, 1, 1];
    group.bench_function("8 coins, x=100000", |b| {
        b.iter(|| count_ways(black_box(100_000), black_box(&ones)))
    });

    group.finish();
}

criterion_group!(benches, bench_count_ways);
criterion_main!(benches);
