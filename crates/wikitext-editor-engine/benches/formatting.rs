use criterion::{Criterion, criterion_group, criterion_main};
use wikitext_editor_engine::{FormatterRegistry, LinkClassifier, Span, StyledBuffer};
mod common;

fn bench_full_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.sample_size(20);

    let registry = FormatterRegistry::wikitext();
    for sections in [10, 100] {
        let text = common::generate_article(sections);
        group.bench_function(format!("full_pass_{sections}"), |b| {
            b.iter(|| {
                let mut buf = StyledBuffer::new(std::hint::black_box(&text));
                registry.format_all(&mut buf);
                std::hint::black_box(buf);
            });
        });
    }

    group.finish();
}

fn bench_keystroke(c: &mut Criterion) {
    let registry = FormatterRegistry::wikitext();
    let text = common::generate_article(100);
    let mut buf = StyledBuffer::new(&text);
    registry.format_all(&mut buf);
    let middle = text.len() / 2;

    c.bench_function("formatting/keystroke", |b| {
        b.iter(|| {
            let edit = buf.replace(Span::new(middle, middle), "x");
            registry.apply_formatting(&mut buf, edit.changed);
            let edit = buf.replace(edit.changed, "");
            registry.apply_formatting(&mut buf, edit.changed);
        });
    });
}

fn bench_link_predicates(c: &mut Criterion) {
    let buf = StyledBuffer::new("[[File:x.png|thumb|Caption [[Inner|text]] more]]");
    let all = Span::new(0, buf.len());
    c.bench_function("classify/nested_link", |b| {
        b.iter(|| {
            std::hint::black_box(LinkClassifier.is_link_with_nested_link(&buf, all));
            std::hint::black_box(LinkClassifier.is_simple_link(&buf, all));
        });
    });
}

criterion_group!(
    benches,
    bench_full_pass,
    bench_keystroke,
    bench_link_predicates
);
criterion_main!(benches);
