//! Benchmarks for mdblog conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test conversion and site build throughput at various
//! document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdblog::site::{MemoryFs, SiteBuilder};
use mdblog::{ConvertOptions, SiteConfig};

/// Creates a synthetic Markdown document with the given number of sections.
fn create_test_markdown(section_count: usize) -> String {
    let mut markdown = String::new();

    for i in 0..section_count {
        markdown.push_str(&format!("## Section {}\n", i));
        markdown.push_str(&format!(
            "Paragraph {} with a [link](page{}.html) and an ![image](img{}.png) inline.\n",
            i, i, i
        ));
        markdown.push('\n');
        markdown.push_str("- first item\n- second item\n- third item\n");
        markdown.push_str("```\nfn main() { println!(\"<hello> & 'world'\"); }\n```\n");
    }

    markdown
}

/// Benchmark Markdown to HTML conversion at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for section_count in [10, 100, 1000].iter() {
        let markdown = create_test_markdown(*section_count);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", section_count),
            &markdown,
            |b, markdown| {
                b.iter(|| mdblog::convert(black_box(markdown)));
            },
        );
    }

    group.finish();
}

/// Benchmark conversion with text escaping enabled.
fn bench_escaped_conversion(c: &mut Criterion) {
    let markdown = create_test_markdown(100);
    let options = ConvertOptions::new().with_escaped_text();

    c.bench_function("conversion_escaped_100", |b| {
        b.iter(|| mdblog::convert_with_options(black_box(&markdown), &options));
    });
}

/// Benchmark HTML escaping.
fn bench_escape(c: &mut Criterion) {
    let clean = "plain text without any special characters ".repeat(50);
    let dirty = "<tag attr=\"value\"> & 'quoted' ".repeat(50);

    c.bench_function("escape_clean", |b| {
        b.iter(|| mdblog::escape_html(black_box(&clean)));
    });

    c.bench_function("escape_dirty", |b| {
        b.iter(|| mdblog::escape_html(black_box(&dirty)));
    });
}

/// Benchmark a full site build against an in-memory filesystem.
fn bench_site_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("site_build");

    for page_count in [10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::new("pages", page_count),
            page_count,
            |b, &page_count| {
                b.iter(|| {
                    let fs = MemoryFs::new();
                    fs.insert_file("templates/post.html", "<BlogPost></BlogPost>");
                    fs.insert_file("templates/blog.html", "<BlogList></BlogList>");
                    fs.insert_file("templates/styles.css", "");
                    for i in 0..page_count {
                        fs.insert_file(format!("pages/post{}.md", i), create_test_markdown(10));
                    }

                    let builder = SiteBuilder::with_fs(SiteConfig::rooted_at(""), fs);
                    black_box(builder.build().unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_escape,
    bench_conversion,
    bench_escaped_conversion,
    bench_site_build,
);
criterion_main!(benches);
