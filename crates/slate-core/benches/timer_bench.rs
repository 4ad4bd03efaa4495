//! Benchmarks for the timer queue.
//!
//! Run with: cargo bench -p slate-core

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use slate_core::timer::{Scheduler, TimerQueue};
use std::hint::black_box;
use std::time::Duration;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer/schedule_drain");

    for n in [16u64, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut timers = TimerQueue::new();
                for i in 0..n {
                    timers.schedule(Duration::from_millis((i * 7919) % 5_000));
                }
                let fired = timers.advance_to(Duration::from_secs(5), |id, _| {
                    black_box(id);
                });
                black_box(fired)
            })
        });
    }

    group.finish();
}

fn bench_restart_churn(c: &mut Criterion) {
    // Hover enter/leave pairs: cancel the pending timer, schedule a new one.
    c.bench_function("timer/restart_churn", |b| {
        b.iter(|| {
            let mut timers = TimerQueue::new();
            let mut pending = timers.schedule(Duration::from_secs(3));
            for _ in 0..1_000 {
                timers.cancel(pending);
                pending = timers.schedule(Duration::from_secs(3));
            }
            black_box(timers.pending_count())
        })
    });
}

criterion_group!(benches, bench_schedule_and_drain, bench_restart_churn);
criterion_main!(benches);
