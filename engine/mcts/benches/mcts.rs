//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full search with varying playout counts
//! - Search with different depth limits and ensemble sizes
//! - Estimator operations (planning action selection, backup, pruning)

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mcts::{
    EnsembleSelector, Mcts, MctsConfig, SingleModelSelector, UctConfig, UctEstimator,
    ValueEstimator,
};
use planning_core::shared;
use sim_models::{ChainWalk, Move, Toggle, TwoState, TwoStateModel};

fn chain_estimator() -> UctEstimator<u32, Move> {
    UctEstimator::new(Move::ALL.to_vec(), UctConfig::default())
}

// =============================================================================
// Full Search Benchmarks
// =============================================================================

fn bench_search_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_playouts");

    for playouts in [50u32, 100, 200, 400, 800, 1600] {
        group.throughput(Throughput::Elements(playouts as u64));
        group.bench_with_input(
            BenchmarkId::new("chain_walk", playouts),
            &playouts,
            |b, &playouts| {
                let config = MctsConfig::for_testing()
                    .with_playouts(playouts)
                    .with_max_depth(30);

                b.iter(|| {
                    let estimator = shared(chain_estimator());
                    let selector =
                        shared(SingleModelSelector::new(ChainWalk::new(20, 0.1, 42).unwrap()));
                    let mcts = Mcts::new(estimator, selector, config.clone()).unwrap();
                    black_box(mcts.search(&0).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_two_state(c: &mut Criterion) {
    c.bench_function("two_state_1000_playouts", |b| {
        let config = MctsConfig::default().with_playouts(1000).with_max_depth(3);

        b.iter(|| {
            let estimator = shared(UctEstimator::new(Toggle::ALL.to_vec(), UctConfig::default()));
            let selector = shared(SingleModelSelector::new(TwoStateModel::default()));
            let mcts = Mcts::new(estimator, selector, config.clone()).unwrap();
            mcts.search(&TwoState::start()).unwrap();
            black_box(mcts.select_world_action(&TwoState::start()).unwrap())
        });
    });
}

// =============================================================================
// Configuration Benchmarks
// =============================================================================

fn bench_search_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_depths");

    for depth in [5u32, 20, 50, 0] {
        let label = if depth == 0 {
            "until_terminal".to_string()
        } else {
            depth.to_string()
        };
        group.bench_with_input(BenchmarkId::new("chain_walk", label), &depth, |b, &depth| {
            // Depth 0 needs a deadline to be a valid configuration.
            let config = MctsConfig::for_testing()
                .with_playouts(200)
                .with_max_depth(depth)
                .with_planning_time(if depth == 0 { 10.0 } else { 0.0 });

            b.iter(|| {
                let estimator = shared(chain_estimator());
                let selector =
                    shared(SingleModelSelector::new(ChainWalk::new(30, 0.2, 7).unwrap()));
                let mcts = Mcts::new(estimator, selector, config.clone()).unwrap();
                black_box(mcts.search(&0).unwrap())
            });
        });
    }

    group.finish();
}

fn bench_ensemble_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble_sizes");

    for size in [1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("chain_walk", size), &size, |b, &size| {
            let config = MctsConfig::for_testing().with_playouts(200).with_max_depth(30);

            b.iter(|| {
                let models = (0..size)
                    .map(|i| ChainWalk::new(20, 0.05 * i as f64 / size as f64, i as u64).unwrap())
                    .collect();
                let selector = shared(EnsembleSelector::new(models, 42).unwrap());
                let estimator = shared(chain_estimator());
                let mcts = Mcts::new(estimator, selector, config.clone()).unwrap();
                black_box(mcts.search(&0).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Estimator Operation Benchmarks
// =============================================================================

fn bench_estimator_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimator_operations");

    // A warmed-up table with statistics over the whole corridor
    let warm = {
        let estimator = shared(chain_estimator());
        let selector = shared(SingleModelSelector::new(ChainWalk::new(20, 0.1, 1).unwrap()));
        let config = MctsConfig::for_testing().with_playouts(2000).with_max_depth(40);
        let mcts = Mcts::new(Rc::clone(&estimator), selector, config).unwrap();
        mcts.search(&0).unwrap();
        drop(mcts);
        Rc::try_unwrap(estimator).ok().unwrap().into_inner()
    };

    group.bench_function("select_planning_action", |b| {
        let mut estimator = warm.clone();
        b.iter(|| black_box(estimator.select_planning_action(black_box(&5)).unwrap()));
    });

    group.bench_function("select_world_action", |b| {
        let mut estimator = warm.clone();
        b.iter(|| black_box(estimator.select_world_action(black_box(&5)).unwrap()));
    });

    group.bench_function("backup_depth_20", |b| {
        let mut estimator = warm.clone();
        b.iter(|| {
            estimator.start_rollout();
            for s in 0..20u32 {
                estimator.visit(&s, &Move::Right, -0.01).unwrap();
            }
            estimator.finish_rollout(&20, true).unwrap();
        });
    });

    group.bench_function("prune_old_visits", |b| {
        b.iter(|| {
            let mut estimator = warm.clone();
            estimator.prune_old_visits(100);
            black_box(estimator.num_states())
        });
    });

    group.bench_function("describe", |b| {
        b.iter(|| black_box(warm.describe(1)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_playouts,
    bench_two_state,
    bench_search_depths,
    bench_ensemble_sizes,
    bench_estimator_operations,
);

criterion_main!(benches);
