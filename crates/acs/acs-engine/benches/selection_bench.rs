//! Selection and fan-in benchmarks.
//!
//! Run with: cargo bench -p acs-engine --bench selection_bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use acs_core::types::{Arch, LevelFilterMode, RuleId};
use acs_core::SelectionConfig;
use acs_engine::pe::{PeContext, PeRendezvous, PeSlots, ThreadCluster};
use acs_engine::selection::{filter_rule_list, SelectionContext};
use acs_engine::{ModuleGate, RuleCatalog};

fn selection_filter(c: &mut Criterion) {
    let catalog = RuleCatalog::standard();
    let mut group = c.benchmark_group("filter_rule_list");

    for arch in [Arch::Bsa, Arch::Sbsa, Arch::Pcbsa] {
        let config = SelectionConfig {
            arch,
            level_filter_mode: LevelFilterMode::Max,
            level_value: arch.max_level().unwrap_or(1),
            ..Default::default()
        };
        let gate = ModuleGate::with_build_list(&config, None);
        group.bench_with_input(BenchmarkId::new("arch", arch), &config, |b, config| {
            b.iter(|| {
                let ctx = SelectionContext::new(&catalog, config, &gate);
                filter_rule_list(&ctx, Vec::new()).unwrap()
            });
        });
    }

    // Every rule requested explicitly, reversed.
    let config = SelectionConfig::default();
    let gate = ModuleGate::with_build_list(&config, None);
    let all: Vec<RuleId> = RuleId::ALL.iter().rev().copied().collect();
    group.bench_function("explicit_all_reversed", |b| {
        b.iter(|| {
            let ctx = SelectionContext::new(&catalog, &config, &gate);
            filter_rule_list(&ctx, black_box(all.clone())).unwrap()
        });
    });

    group.finish();
}

fn pe_fan_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_on_pes");
    group.sample_size(20);

    for num_pe in [1usize, 4, 8] {
        let slots = Arc::new(PeSlots::new(num_pe));
        let cluster = ThreadCluster::spawn(Arc::clone(&slots)).unwrap();
        let rendezvous = PeRendezvous::new(slots, Box::new(cluster));
        group.bench_with_input(BenchmarkId::new("pes", num_pe), &num_pe, |b, &num_pe| {
            let mut test_id = 0u16;
            b.iter(|| {
                test_id = test_id.wrapping_add(1);
                rendezvous
                    .run_on_pes(
                        test_id,
                        num_pe,
                        Arc::new(|ctx: &PeContext<'_>| {
                            ctx.set_pass();
                        }),
                        0,
                    )
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, selection_filter, pe_fan_in);
criterion_main!(benches);
