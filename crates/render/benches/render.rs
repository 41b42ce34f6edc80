use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom::Document;
use render::{render_into, Content, ElementDescriptor};

fn wide(count: usize) -> Vec<Content> {
    (0..count)
        .map(|i| {
            ElementDescriptor::new("li")
                .text(format!("item {}", i))
                .class("row")
                .style("padding_left", "4px")
                .ref_name(format!("item-{}", i))
                .into()
        })
        .collect()
}

fn deep(levels: usize) -> Vec<Content> {
    let mut content = ElementDescriptor::new("span").ref_name("leaf");
    for _ in 0..levels {
        content = ElementDescriptor::new("div").child(content);
    }
    vec![content.into()]
}

fn bench_render(c: &mut Criterion) {
    let wide = wide(1_000);
    c.bench_function("render_wide_1000", |b| {
        b.iter(|| {
            let mut doc = Document::new();
            let root = doc.root();
            render_into(&mut doc, black_box(&wide), root, true).unwrap()
        })
    });

    let deep = deep(200);
    c.bench_function("render_deep_200", |b| {
        b.iter(|| {
            let mut doc = Document::new();
            let root = doc.root();
            render_into(&mut doc, black_box(&deep), root, true).unwrap()
        })
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
