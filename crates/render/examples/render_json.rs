//! Render a JSON descriptor tree, wire up a listener, print the markup
//!
//! Run with `RUST_LOG` unset to see the missing-type diagnostic at error level.

use dom::{Document, HtmlSerializer, SerializerConfig};
use render::{render_into, render_json, Content, ElementDescriptor};
use std::cell::Cell;
use std::rc::Rc;

const PAGE: &str = r#"[
    {
        "type": "header",
        "className": "top",
        "children": [
            { "type": "h1", "textContent": "Inbox", "refName": "title" }
        ]
    },
    {
        "type": "main",
        "refName": "main",
        "style": { "max_width": "40em", "margin": "0 auto" },
        "children": [
            { "type": "p", "textContent": "Nothing here yet." },
            { "textContent": "this one has no type" }
        ]
    }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut doc = Document::new();
    let body = doc.create_element("body")?;
    let root = doc.root();
    doc.append_child(root, body)?;

    let refs = render_json(&mut doc, PAGE, body, true)?;
    println!("refs: {:?}", refs.names().collect::<Vec<_>>());

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let toolbar: Vec<Content> = vec![ElementDescriptor::new("button")
        .text("Refresh")
        .ref_name("refresh")
        .on("click", move |event| {
            counter.set(counter.get() + 1);
            println!("clicked node {}", event.target);
        })
        .into()];

    let toolbar_refs = render_into(&mut doc, &toolbar, refs["main"], false)?;
    doc.dispatch_event(toolbar_refs["refresh"], "click")?;
    println!("clicks: {}", clicks.get());

    let serializer = HtmlSerializer::with_config(SerializerConfig {
        pretty: true,
        ..SerializerConfig::default()
    });
    println!("{}", serializer.outer_html(doc.arena(), body)?);

    Ok(())
}
