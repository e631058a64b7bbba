//! Criterion benchmarks for oboscan.
//!
//! Covers the main pipelines over synthetic ontologies:
//! - Tokenization of term fields
//! - Spell-checking, sequential and parallel
//! - Reciprocal xref mapping

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use oboscan::analysis::tokenizer::Tokenizer;
use oboscan::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use oboscan::ontology::Ontology;
use oboscan::ontology::term::Term;
use oboscan::spelling::checker::OntoChecker;
use oboscan::spelling::config::CheckerConfig;
use oboscan::xref::resolver::XrefResolver;
use std::hint::black_box;

const WORDS: [&str; 24] = [
    "cell",
    "membrane",
    "mitocondrial",
    "outer",
    "layer",
    "region",
    "tissue",
    "neurone",
    "DNA",
    "structure",
    "protein",
    "transport",
    "organ",
    "axonn",
    "body",
    "surrounding",
    "mRNA",
    "part",
    "nerve",
    "located",
    "epithelium",
    "complex",
    "inner",
    "development",
];

/// Pseudo-random phrase of `length` words.
fn phrase(seed: usize, length: usize) -> String {
    (0..length)
        .map(|j| WORDS[(seed * 7 + j * 13) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate an ontology of `count` terms with names, definitions and synonyms.
fn generate_ontology(prefix: &str, target: &str, count: usize) -> Ontology {
    let terms = (0..count).map(|i| {
        Term::new(format!("{prefix}:{i:07}"))
            .with_name(phrase(i, 3))
            .with_definition(phrase(i + 1, 20 + i % 30))
            .with_synonym(phrase(i + 2, 4))
            .with_xref(format!("{target}:{:07}", (i * 31) % (count + count / 10)))
    });
    Ontology::from_terms(terms).expect("generated ids are unique")
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let tokenizer = UnicodeWordTokenizer::new();
    let definitions: Vec<String> = (0..100).map(|i| phrase(i, 40)).collect();

    group.throughput(Throughput::Elements(definitions.len() as u64));
    group.bench_function("tokenize_definitions", |b| {
        b.iter(|| {
            for text in &definitions {
                black_box(tokenizer.tokenize(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_spellcheck(c: &mut Criterion) {
    let mut group = c.benchmark_group("spellcheck");
    group.sample_size(20);

    let ontology = generate_ontology("X", "Y", 2_000);
    let config = CheckerConfig::default();
    let sequential = OntoChecker::from_config(&config);
    let parallel = OntoChecker::from_config(&config).parallel(true);

    group.throughput(Throughput::Elements(ontology.len() as u64));
    group.bench_function("check_ontology_sequential", |b| {
        b.iter(|| black_box(sequential.check_ontology(black_box(&ontology))))
    });
    group.bench_function("check_ontology_parallel", |b| {
        b.iter(|| black_box(parallel.check_ontology(black_box(&ontology))))
    });

    group.finish();
}

fn bench_xref_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("xref_mapping");
    group.sample_size(20);

    let source = generate_ontology("A", "B", 10_000);
    let foreign = generate_ontology("B", "A", 10_000);

    group.throughput(Throughput::Elements(source.len() as u64));
    group.bench_function("resolve", |b| {
        b.iter(|| black_box(XrefResolver::new(&source, &foreign).resolve()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_tokenization,
    bench_spellcheck,
    bench_xref_mapping
);
criterion_main!(benches);
