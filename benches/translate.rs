//! Translation benchmarks on synthetic AIGs.
//!
//! Run with:
//! ```bash
//! cargo bench --bench translate
//! ```

use aig_transys::aiger::Aig;
use aig_transys::cnf::Cnf;
use aig_transys::config::TranslateConfig;
use aig_transys::transys::TransitionSystem;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random well-formed AIG: every AND operand points to an input, a latch or an earlier gate.
fn random_aig(seed: u64, num_inputs: u32, num_latches: u32, num_ands: u32) -> Aig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_var = num_inputs + num_latches + num_ands;
    let mut aig = Aig::new(max_var);

    for i in 1..=num_inputs {
        aig.add_input(2 * i);
    }

    let first_and = num_inputs + num_latches + 1;

    let mut nexts = Vec::new();
    for _ in 0..num_latches {
        nexts.push(random_lit(&mut rng, max_var + 1));
    }
    for (i, next) in nexts.into_iter().enumerate() {
        aig.add_latch(2 * (num_inputs + 1 + i as u32), next, 0);
    }

    for node in first_and..=max_var {
        let rhs0 = random_lit(&mut rng, node);
        let rhs1 = random_lit(&mut rng, node);
        aig.add_and(2 * node, rhs0, rhs1);
    }

    aig.add_bad(2 * max_var);
    aig
}

/// Random literal over nodes `1..below`.
fn random_lit(rng: &mut ChaCha8Rng, below: u32) -> u32 {
    let node = rng.random_range(1..below);
    2 * node + rng.random_bool(0.5) as u32
}

// ============================================================================
// Benchmark: Translation
// ============================================================================

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");
    let config = TranslateConfig::default();

    for num_ands in [1_000u32, 10_000, 100_000] {
        let aig = random_aig(42, 64, 64, num_ands);

        group.throughput(Throughput::Elements(num_ands as u64));
        group.bench_with_input(BenchmarkId::new("random", num_ands), &aig, |b, aig| {
            b.iter(|| TransitionSystem::from_aig(aig, &config).unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Tseitin lowering of the transition relation
// ============================================================================

fn bench_lower_cnf(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower/cnf");
    let config = TranslateConfig::default();

    for num_ands in [1_000u32, 10_000, 100_000] {
        let aig = random_aig(7, 64, 64, num_ands);
        let ts = TransitionSystem::from_aig(&aig, &config).unwrap();

        group.throughput(Throughput::Elements(num_ands as u64));
        group.bench_with_input(BenchmarkId::new("trans", num_ands), &ts, |b, ts| {
            b.iter(|| {
                let mut cnf = Cnf::new();
                ts.pool().lower(&mut cnf, ts.trans());
                cnf.clauses().len()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_translate, bench_lower_cnf);

criterion_main!(benches);
