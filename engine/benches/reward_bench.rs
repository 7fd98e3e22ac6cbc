use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use patron_engine::config::ProtocolConfig;
use patron_engine::reward;
use patron_engine::support;

const THIRTY_DAYS: u64 = 30 * 24 * 60 * 60;

fn bench_accrual(c: &mut Criterion) {
    let mut group = c.benchmark_group("reward_accrual");
    for staked in [1_000_000u64, 1_000_000_000, 1_000_000_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(staked), &staked, |b, &staked| {
            b.iter(|| reward::accrued(black_box(staked), black_box(1000), black_box(THIRTY_DAYS)));
        });
    }
    group.finish();
}

fn bench_full_claim_math(c: &mut Criterion) {
    let config = ProtocolConfig::default();
    c.bench_function("claim_math_end_to_end", |b| {
        b.iter(|| {
            let raw = reward::accrued(black_box(3_000_000), config.apr, black_box(THIRTY_DAYS))
                .unwrap();
            let scaled = reward::scale(raw, &config).unwrap();
            reward::split_shares(scaled, config.supporter_reward_ratio)
        });
    });
}

fn bench_split_payment(c: &mut Criterion) {
    c.bench_function("split_payment", |b| {
        b.iter(|| support::split_payment(black_box(10_000_000), black_box(70)));
    });
}

criterion_group!(benches, bench_accrual, bench_full_claim_math, bench_split_payment);
criterion_main!(benches);
