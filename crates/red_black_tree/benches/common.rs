use std::hint::black_box;

use bench::{
    apply_medium_runtime_config, apply_small_runtime_config, default_rng, sequential_keys,
    shuffled_keys,
};
use criterion::measurement::Measurement;
use criterion::{BatchSize, BenchmarkGroup, BenchmarkId};
use rand::Rng;

use red_black_tree::{RedBlackTree, SearchTree};

const SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
const QUERIES_PER_ITER: usize = 1_000;

#[derive(Clone, Copy)]
enum KeyOrder {
    Sequential,
    Shuffled,
}

impl KeyOrder {
    const ALL: [KeyOrder; 2] = [KeyOrder::Sequential, KeyOrder::Shuffled];

    fn label(self) -> &'static str {
        match self {
            KeyOrder::Sequential => "sequential",
            KeyOrder::Shuffled => "shuffled",
        }
    }

    fn keys(self, n: usize) -> Vec<u64> {
        match self {
            KeyOrder::Sequential => sequential_keys(n),
            KeyOrder::Shuffled => shuffled_keys(&mut default_rng(), n),
        }
    }
}

pub fn bench_insert<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_medium_runtime_config(group);
    for &size in &SIZES {
        for order in KeyOrder::ALL {
            let keys = order.keys(size);
            group.bench_function(BenchmarkId::new(order.label(), size), |bencher| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for &k in &keys {
                        black_box(tree.insert(k));
                    }
                    tree
                })
            });
        }
    }
}

pub fn bench_read<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_small_runtime_config(group);
    for &size in &SIZES {
        let tree = KeyOrder::Shuffled
            .keys(size)
            .into_iter()
            .collect::<RedBlackTree<u64>>();
        let mut rng = default_rng();
        // Half of the probes miss: the stored keys are `0..size`.
        let probes = (0..QUERIES_PER_ITER)
            .map(|_| rng.random_range(0..2 * size as u64))
            .collect::<Vec<_>>();

        group.bench_function(BenchmarkId::new("search", size), |bencher| {
            bencher.iter(|| {
                for p in &probes {
                    black_box(tree.search(black_box(p)));
                }
            })
        });
        group.bench_function(BenchmarkId::new("inorder_successor", size), |bencher| {
            bencher.iter(|| {
                for p in &probes {
                    black_box(tree.inorder_successor(black_box(p)));
                }
            })
        });
    }
}

pub fn bench_delete<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_medium_runtime_config(group);
    for &size in &SIZES {
        for order in KeyOrder::ALL {
            let tree = order.keys(size).into_iter().collect::<RedBlackTree<u64>>();
            let victims = shuffled_keys(&mut default_rng(), size);
            group.bench_function(BenchmarkId::new(order.label(), size), |bencher| {
                bencher.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        for v in &victims {
                            black_box(tree.delete(v));
                        }
                        tree
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
}
