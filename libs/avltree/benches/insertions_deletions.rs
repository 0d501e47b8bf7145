use avltree::AvlTree;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::SliceRandom;
use std::collections::BTreeSet;

fn avl(inserts: &[usize], deletes: &[usize]) {
    let mut tree: AvlTree<usize> = AvlTree::new();

    for i in inserts {
        tree.insert(*i);
    }

    for i in deletes {
        tree.remove(i);
    }
}

fn btree(inserts: &[usize], deletes: &[usize]) {
    let mut set: BTreeSet<usize> = BTreeSet::new();

    for i in inserts {
        set.insert(*i);
    }

    for i in deletes {
        set.remove(i);
    }
}

fn bench_inserts_deletes(c: &mut Criterion) {
    let mut rng = rand::rng();

    let mut inserts = (0..700).collect::<Vec<_>>();
    inserts.shuffle(&mut rng);

    let mut deletes = inserts.clone();
    deletes.shuffle(&mut rng);

    let mut group = c.benchmark_group("inserts_deletes");
    group.bench_function("avl", |b| b.iter(|| avl(&inserts, &deletes)));
    group.bench_function("btreeset", |b| b.iter(|| btree(&inserts, &deletes)));
    group.finish();
}

criterion_group!(benches, bench_inserts_deletes);
criterion_main!(benches);
