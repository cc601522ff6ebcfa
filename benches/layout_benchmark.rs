//! Layout and render-selection benchmarks.
//!
//! A zoom step re-parses the whole document, so parse time bounds how
//! responsive zooming feels on long documents.
//!
//! Run with: cargo bench --bench layout_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mdcanvas::image::{ImageCache, ImageHandle, ImageResolver};
use mdcanvas::layout::{ApproxMeasurer, LayoutTheme};
use mdcanvas::model::DocumentLayout;
use mdcanvas::parser::{parse, ParseContext};
use mdcanvas::view_state::visible;

struct NoImages;

impl ImageResolver for NoImages {
    fn request(&mut self, _url: &str) -> ImageHandle {
        ImageHandle::new(0)
    }
}

/// Synthetic document with `sections` repetitions of every block kind.
fn synthetic_document(sections: usize) -> String {
    let mut doc = String::new();
    for n in 0..sections {
        doc.push_str(&format!("## Section {n}\n\n"));
        doc.push_str(
            "Some **bold** prose that runs long enough to wrap across several \
             lines of the text column, with a `code span` and *emphasis*.\n\n",
        );
        doc.push_str("- first item\n- second item\n\n");
        doc.push_str("```\nfn main() {\n    println!(\"hi\");\n}\n```\n\n");
        doc.push_str("![figure](figure.png)\n\n---\n\n");
    }
    doc
}

fn layout(document: &str, zoom: f64) -> DocumentLayout {
    let theme = LayoutTheme::default();
    let measurer = ApproxMeasurer::default();
    let mut images = ImageCache::new(Box::new(NoImages));
    let mut ctx = ParseContext {
        measurer: &measurer,
        images: &mut images,
        theme: &theme,
    };
    parse(document, zoom, 1280, &mut ctx)
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for sections in [10usize, 100, 1000] {
        let document = synthetic_document(sections);
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &document,
            |b, doc| b.iter(|| layout(black_box(doc), black_box(1.25))),
        );
    }

    group.finish();
}

fn benchmark_visible(c: &mut Criterion) {
    let document = synthetic_document(1000);
    let result = layout(&document, 1.0);
    let middle = f64::from(result.content_height) / 2.0;

    c.bench_function("visible_middle_of_long_document", |b| {
        b.iter(|| visible(black_box(&result.elements), black_box(middle), 800).count())
    });
}

criterion_group!(benches, benchmark_parse, benchmark_visible);
criterion_main!(benches);
