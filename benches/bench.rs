//! Criterion benchmarks for the near-dupe pipeline.
//!
//! Covers the stages that dominate a call:
//! - name normalization and phonetic keys
//! - street expansion
//! - full key generation for a place
//! - language detection

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use neardupe::component::LabeledComponent;
use neardupe::expander::{FieldRole, VariantExpander};
use neardupe::near_dupe::NearDupe;
use neardupe::options::{NearDupeHashOptions, NormalizeOptions};
use neardupe::resources::Resources;
use std::hint::black_box;

const NAMES: &[&str] = &[
    "Atlantic",
    "Central Park",
    "McDonald's",
    "7Eleven",
    "Joe's Café",
    "The Old Mill",
    "Sixth Street Diner",
    "IV Corners",
];

const ROADS: &[&str] = &[
    "Main St",
    "5th Ave",
    "N Park Ave",
    "Rue de la Paix",
    "Martin Luther King Jr Blvd",
];

fn place() -> Vec<LabeledComponent> {
    vec![
        LabeledComponent::new("house", "Central Park Cafe"),
        LabeledComponent::new("house_number", "350"),
        LabeledComponent::new("road", "5th Ave"),
        LabeledComponent::new("unit", "Apt 3"),
        LabeledComponent::new("city", "New York"),
        LabeledComponent::new("postcode", "10118"),
    ]
}

fn bench_names(c: &mut Criterion) {
    let engine = NearDupe::builtin().unwrap();
    let options = NormalizeOptions::default();
    let mut group = c.benchmark_group("names");

    group.throughput(Throughput::Elements(NAMES.len() as u64));
    group.bench_function("name_hashes", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(engine.name_hashes(black_box(name), &options).unwrap());
            }
        })
    });

    group.finish();
}

fn bench_streets(c: &mut Criterion) {
    let resources = Resources::builtin().unwrap();
    let expander = VariantExpander::new().unwrap();
    let languages = vec!["en".to_string(), "fr".to_string()];
    let mut group = c.benchmark_group("streets");

    group.throughput(Throughput::Elements(ROADS.len() as u64));
    group.bench_function("expand_street", |b| {
        b.iter(|| {
            for road in ROADS {
                black_box(
                    expander
                        .expand(&resources, FieldRole::Street, black_box(road), &languages)
                        .unwrap(),
                );
            }
        })
    });

    group.finish();
}

fn bench_hashes(c: &mut Criterion) {
    let engine = NearDupe::builtin().unwrap();
    let components = place();
    let mut group = c.benchmark_group("hashes");
    group.sample_size(50);

    let defaults = NearDupeHashOptions::default();
    group.bench_function("default_options", |b| {
        b.iter(|| black_box(engine.hashes(black_box(&components), &defaults, None).unwrap()))
    });

    let mut everything = NearDupeHashOptions::default().with_latlon(40.7484, -73.9857, 7);
    everything.with_unit = true;
    everything.name_only_keys = true;
    everything.address_only_keys = true;
    group.bench_function("all_shapes", |b| {
        b.iter(|| black_box(engine.hashes(black_box(&components), &everything, None).unwrap()))
    });

    group.finish();
}

fn bench_languages(c: &mut Criterion) {
    let engine = NearDupe::builtin().unwrap();
    let places = vec![
        place(),
        vec![
            LabeledComponent::new("road", "Rue de la Loi"),
            LabeledComponent::new("city", "Bruxelles"),
            LabeledComponent::new("country", "Belgium"),
        ],
        vec![
            LabeledComponent::new("suburb", "渋谷区"),
            LabeledComponent::new("city", "東京都"),
            LabeledComponent::new("country", "日本"),
        ],
    ];
    let mut group = c.benchmark_group("languages");

    group.throughput(Throughput::Elements(places.len() as u64));
    group.bench_function("detect", |b| {
        b.iter(|| {
            for components in &places {
                black_box(engine.detect_languages(black_box(components)).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_names,
    bench_streets,
    bench_hashes,
    bench_languages
);
criterion_main!(benches);
