//! Criterion benchmarks for DFA construction and trie search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levtrie::{fuzzy_search, LevenshteinDfa, QueryAutomaton, Trie};

const VOCABULARY: &[&str] = &[
    "kernel", "gemm", "tensor", "warp", "mma", "blockwise", "threadblock", "pipeline",
    "database", "algorithm", "structure", "concurrency", "parallelism", "allocation",
    "compiler", "interpreter", "bytecode", "framework", "authentication", "authorization",
    "encryption", "performance", "optimization", "caching", "indexing", "websocket",
    "graphql", "microservice", "container", "orchestration", "kubernetes", "distributed",
    "replication", "partition", "throughput", "latency", "scheduler", "preemption",
    "virtualization", "hypervisor", "bootstrap", "checksum", "signature", "certificate",
];

fn build_vocabulary_trie() -> Trie {
    let mut trie = Trie::new();
    for word in VOCABULARY {
        trie.add(word);
    }
    trie
}

fn bench_dfa_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfa_construction");
    for d in [0usize, 1, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| LevenshteinDfa::build(black_box(d)).unwrap());
        });
    }
    group.finish();
}

fn bench_search_by_bound(c: &mut Criterion) {
    let trie = build_vocabulary_trie();
    let mut group = c.benchmark_group("search_by_bound");
    for d in [0usize, 1, 2, 3] {
        let dfa = LevenshteinDfa::build(d).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(d), &d, |b, &d| {
            b.iter(|| {
                let mut automaton = QueryAutomaton::new(&dfa, black_box("kernel"), d).unwrap();
                fuzzy_search(&trie, &mut automaton).count()
            });
        });
    }
    group.finish();
}

fn bench_search_by_query(c: &mut Criterion) {
    let trie = build_vocabulary_trie();
    let dfa = LevenshteinDfa::build(2).unwrap();
    let mut group = c.benchmark_group("search_by_query");

    for query in ["kernel", "kernl", "gemmm", "threadblok", "xyzzy"] {
        group.bench_function(query, |b| {
            b.iter(|| {
                let mut automaton = QueryAutomaton::new(&dfa, black_box(query), 2).unwrap();
                fuzzy_search(&trie, &mut automaton).count()
            });
        });
    }
    group.finish();
}

fn bench_automaton_reuse_of_shared_dfa(c: &mut Criterion) {
    let dfa = LevenshteinDfa::build(2).unwrap();
    c.bench_function("automaton_construction_against_shared_dfa", |b| {
        b.iter(|| QueryAutomaton::new(&dfa, black_box("kernel"), 2).unwrap());
    });
}

criterion_group!(
    benches,
    bench_dfa_construction,
    bench_search_by_bound,
    bench_search_by_query,
    bench_automaton_reuse_of_shared_dfa,
);
criterion_main!(benches);
