//! # SCP Quorum Benchmarks
//!
//! Evaluator cost on tiered networks of growing size:
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | Quorum slice | O(tree), short-circuits on success |
//! | V-blocking | O(tree), short-circuits on success |
//! | Quorum closure | O(passes * senders * tree) |
//! | Closest v-blocking | O(tree log children) |
//! | Normalize + hash | O(tree log tree) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_scp_quorum::{
    find_closest_v_blocking, is_quorum, is_quorum_slice, is_v_blocking, quorum_set_hash,
    QuorumSet, Sha256Driver,
};
use qc_tests::fixtures::{broadcast, organizations, random_subset, tiered_quorum_set};
use std::collections::BTreeSet;
use std::time::Duration;

/// (organizations, validators per organization)
const NETWORKS: [(usize, usize); 4] = [(4, 3), (7, 3), (13, 5), (25, 7)];

fn bench_slice_and_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("scp-slice-blocking");
    group.measurement_time(Duration::from_secs(5));

    for (orgs, per_org) in NETWORKS {
        let network = organizations(orgs, per_org);
        let qset = tiered_quorum_set(&network);
        let all: Vec<_> = network.concat();
        let size = all.len();
        let live: BTreeSet<_> = random_subset(&all, size * 3 / 4, 42).into_iter().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("is_quorum_slice", size), &live, |b, live| {
            b.iter(|| black_box(is_quorum_slice(&qset, live)))
        });
        group.bench_with_input(BenchmarkId::new("is_v_blocking", size), &live, |b, live| {
            b.iter(|| black_box(is_v_blocking(&qset, live)))
        });
    }

    group.finish();
}

fn bench_quorum_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("scp-quorum");
    group.measurement_time(Duration::from_secs(10));

    for (orgs, per_org) in NETWORKS {
        let network = organizations(orgs, per_org);
        let qset = tiered_quorum_set(&network);
        let all: Vec<_> = network.concat();
        let view = broadcast(&all, 1, true, [0u8; 32]);

        group.throughput(Throughput::Elements(all.len() as u64));
        group.bench_with_input(BenchmarkId::new("is_quorum", all.len()), &view, |b, view| {
            b.iter(|| black_box(is_quorum(&qset, view, |_| Some(qset.clone()), |e| e.accepted)))
        });
    }

    group.finish();
}

fn bench_closest_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("scp-closest-blocking");

    for (orgs, per_org) in NETWORKS {
        let network = organizations(orgs, per_org);
        let qset = tiered_quorum_set(&network);
        let all: Vec<_> = network.concat();
        let pool: BTreeSet<_> = random_subset(&all, all.len() / 2, 7).into_iter().collect();
        let local = all[0];

        group.bench_with_input(
            BenchmarkId::new("find_closest_v_blocking", all.len()),
            &pool,
            |b, pool| b.iter(|| black_box(find_closest_v_blocking(&qset, pool, Some(&local)))),
        );
    }

    group.finish();
}

fn bench_normalize_and_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("scp-quorum-set-hash");
    let driver = Sha256Driver::new();

    for (orgs, per_org) in NETWORKS {
        let network = organizations(orgs, per_org);
        let mut scrambled: QuorumSet = tiered_quorum_set(&network);
        scrambled.inner_sets.reverse();

        group.bench_with_input(
            BenchmarkId::new("quorum_set_hash", orgs * per_org),
            &scrambled,
            |b, qset| b.iter(|| black_box(quorum_set_hash(qset, &driver))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_slice_and_blocking,
    bench_quorum_closure,
    bench_closest_blocking,
    bench_normalize_and_hash,
);
criterion_main!(benches);
