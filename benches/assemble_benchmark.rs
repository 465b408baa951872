//! Benchmarks for document assembly and verification.
//!
//! Run with: cargo bench
//!
//! Inputs are synthetic element lists: per page a few paragraphs, a figure
//! with a caption candidate and a small table.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docstruct::{AssembleOptions, Element, ElementAttributes, Metadata, PageAssembler, Verifier};

/// Creates a synthetic element list covering `page_count` pages.
fn create_test_elements(page_count: u32) -> Vec<Element> {
    let mut elements = Vec::new();

    for page in 0..page_count {
        for p in 0..5 {
            elements.push(
                Element::new(format!("//Document/P[{}]", page * 10 + p + 1), page)
                    .with_text(format!("Paragraph {} on page {}", p, page + 1))
                    .with_bounds(vec![72.0, 700.0 - 40.0 * p as f64, 540.0, 712.0 - 40.0 * p as f64]),
            );
        }

        elements.push(
            Element::new(format!("//Document/Figure[{}]", page + 1), page)
                .with_bounds(vec![80.0, 300.0, 400.0, 450.0]),
        );

        let table = format!("//Document/Table[{}]", page + 1);
        elements.push(Element::new(table.clone(), page));
        for row in 0..4u32 {
            for col in 0..3u32 {
                let cell = format!("{}/TR[{}]/TD[{}]", table, row + 1, col + 1);
                elements.push(
                    Element::new(cell.clone(), page)
                        .with_attributes(ElementAttributes::cell(row, col)),
                );
                elements.push(Element::new(format!("{}/P", cell), page).with_text(format!("r{}c{}", row, col)));
            }
        }
    }

    elements
}

/// Benchmark assembly at various sizes, parallel and sequential.
fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for page_count in [1u32, 10, 50].iter() {
        let elements = create_test_elements(*page_count);

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            let assembler = PageAssembler::new();
            b.iter(|| {
                assembler
                    .assemble(black_box(&elements), Metadata::new("bench.pdf", *page_count))
                    .unwrap()
            });
        });

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            let assembler = PageAssembler::with_options(AssembleOptions::new().sequential());
            b.iter(|| {
                assembler
                    .assemble(black_box(&elements), Metadata::new("bench.pdf", *page_count))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark the full verification pass.
fn bench_verify(c: &mut Criterion) {
    let elements = create_test_elements(10);
    let doc = PageAssembler::new()
        .assemble(&elements, Metadata::new("bench.pdf", 10))
        .unwrap();

    c.bench_function("verify_10_pages", |b| {
        b.iter(|| Verifier::verify(black_box(&doc), Some(elements.as_slice())).unwrap());
    });
}

criterion_group!(benches, bench_assemble, bench_verify);
criterion_main!(benches);
