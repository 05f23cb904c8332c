use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kicks::catalog::{Catalog, NewSneaker, SearchFilters, Year};
use kicks::storage::MemoryStore;

const BRANDS: &[&str] = &["Nike", "Adidas", "Puma", "Reebok", "Asics", "New Balance", "Vans"];
const MODELS: &[&str] = &[
    "Air Max",
    "Dunk",
    "Superstar",
    "Suede",
    "Club C",
    "Gel-Lyte",
    "574",
    "Old Skool",
];

/// Catalog with `size` generated pairs. Every `add` rewrites the snapshot,
/// so setup cost grows quadratically.
fn build_catalog(size: usize) -> Catalog<MemoryStore> {
    let mut catalog = Catalog::new(MemoryStore::new());
    for i in 0..size {
        catalog
            .add(NewSneaker {
                brand: BRANDS[i % BRANDS.len()].to_string(),
                model: MODELS[i % MODELS.len()].to_string(),
                model2: format!("Edition {}", i % 97),
                collection: if i % 5 == 0 { "Retro".into() } else { String::new() },
                description: format!("pair number {i}"),
                year: Some(Year::Number(1980 + (i % 45) as i64)),
                main_color: "White".into(),
                ..Default::default()
            })
            .unwrap();
    }
    catalog
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100usize, 1_000] {
        let catalog = build_catalog(size);

        group.bench_with_input(BenchmarkId::new("text", size), &catalog, |b, catalog| {
            b.iter(|| catalog.search(black_box("retro"), &SearchFilters::none()))
        });

        let filters = SearchFilters::none()
            .with_brand("Adidas")
            .with_year(Year::Text("1999".into()));
        group.bench_with_input(BenchmarkId::new("filtered", size), &catalog, |b, catalog| {
            b.iter(|| catalog.search(black_box(""), &filters))
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_with_snapshot_200", |b| {
        b.iter_batched(
            || build_catalog(200),
            |mut catalog| {
                catalog
                    .add(NewSneaker {
                        brand: "Puma".into(),
                        model: "Suede".into(),
                        main_color: "Blue".into(),
                        ..Default::default()
                    })
                    .unwrap()
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_search, bench_add);
criterion_main!(benches);
