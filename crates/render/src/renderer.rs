//! Tree builder
//!
//! Walks a descriptor list once, creating and appending nodes as it goes.
//! There is no rollback: if the document rejects an operation halfway
//! through, the nodes appended before the failure stay where they are.

use dom::utils::{is_truthy, stringify_value};
use dom::{ambient, NodeId};
use serde_json::Value;

use crate::context::DocumentContext;
use crate::descriptor::{Content, ElementDescriptor};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::Result;
use crate::refs::Refs;
use crate::style;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Remove the container's existing children before appending
    pub clear: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { clear: true }
    }
}

/// Builds descriptor trees into a document context
pub struct Renderer<'a, D: DocumentContext + ?Sized> {
    document: &'a mut D,
    config: RenderConfig,
    diagnostics: Box<dyn DiagnosticSink + 'a>,
}

impl<'a, D: DocumentContext + ?Sized> Renderer<'a, D> {
    /// Renderer with default config, reporting through `tracing`
    pub fn new(document: &'a mut D) -> Self {
        Self {
            document,
            config: RenderConfig::default(),
            diagnostics: Box::new(TracingSink),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + 'a) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `contents` into `parent` and return the collected references
    pub fn render(&mut self, contents: &[Content], parent: NodeId) -> Result<Refs> {
        let clear = self.config.clear;
        self.render_level(contents, parent, clear, 0)
    }

    fn render_level(
        &mut self,
        contents: &[Content],
        parent: NodeId,
        clear: bool,
        depth: usize,
    ) -> Result<Refs> {
        let _span =
            tracing::debug_span!("render", parent, depth, count = contents.len()).entered();

        if clear {
            self.clear(parent)?;
        }

        let mut refs = Refs::new();
        for (index, content) in contents.iter().enumerate() {
            match content {
                Content::Node(node) => self.document.append_child(parent, *node)?,
                Content::Element(descriptor) => match descriptor.tag.as_deref() {
                    Some(tag) if !tag.is_empty() => {
                        let node = self.build_element(tag, descriptor, depth, &mut refs)?;
                        self.document.append_child(parent, node)?;
                    }
                    _ => self
                        .diagnostics
                        .report(&Diagnostic::MissingType { depth, index }),
                },
            }
        }

        Ok(refs)
    }

    /// Remove every child of `parent`, first child first
    fn clear(&mut self, parent: NodeId) -> Result<()> {
        let mut removed = 0usize;
        while let Some(child) = self.document.first_child(parent)? {
            self.document.remove_child(parent, child)?;
            removed += 1;
        }
        if removed > 0 {
            tracing::debug!(parent, removed, "cleared container");
        }
        Ok(())
    }

    /// Create one element and apply every descriptor field to it
    ///
    /// Field order matters: `textContent` is written before `children` are
    /// rendered (which clears it again), and `contentEditable` is written
    /// last so it overrides anything `attributes` set.
    fn build_element(
        &mut self,
        tag: &str,
        descriptor: &ElementDescriptor,
        depth: usize,
        refs: &mut Refs,
    ) -> Result<NodeId> {
        let node = self.document.create_element(tag)?;
        tracing::trace!(node, tag, "created element");

        if let Some(text) = truthy_text(&descriptor.text_content) {
            self.document.set_text_content(node, &text)?;
        }

        if let Some(children) = &descriptor.children {
            // Nested levels always clear, whatever the top-level config says
            let nested = self.render_level(children, node, true, depth + 1)?;
            refs.merge(nested);
        }

        if let Some(style) = &descriptor.style {
            self.document
                .set_style_text(node, &style::style_text(style))?;
        }

        if let Some(id) = truthy_text(&descriptor.id) {
            self.document.set_id(node, &id)?;
        }

        if let Some(class_name) = truthy_text(&descriptor.class_name) {
            self.document.set_class_name(node, &class_name)?;
        }

        if let Some(listeners) = &descriptor.listeners {
            for (event_type, listener) in listeners {
                self.document
                    .add_event_listener(node, event_type, listener.clone())?;
            }
        }

        if let Some(name) = truthy_text(&descriptor.ref_name) {
            refs.insert(name, node);
        }

        if let Some(attributes) = &descriptor.attributes {
            for (name, value) in attributes {
                self.document.set_property(node, name, value.clone())?;
            }
        }

        let editable = descriptor
            .content_editable
            .as_ref()
            .is_some_and(is_truthy);
        self.document.set_content_editable(node, editable)?;

        Ok(node)
    }
}

/// String form of a field, or `None` when it is absent or falsy
fn truthy_text(field: &Option<Value>) -> Option<String> {
    field
        .as_ref()
        .filter(|value| is_truthy(value))
        .map(stringify_value)
}

/// Render into an explicit document with the default diagnostic sink
pub fn render_into<D: DocumentContext + ?Sized>(
    document: &mut D,
    contents: &[Content],
    parent: NodeId,
    clear: bool,
) -> Result<Refs> {
    Renderer::new(document)
        .with_config(RenderConfig { clear })
        .render(contents, parent)
}

/// Render into the current thread's ambient document
///
/// `parent` must be a node of [`ambient::with_document`]'s document.
/// Fails with `DomError::DocumentBusy` when called while that document is
/// already borrowed, e.g. from inside `with_document` or a listener it
/// dispatched.
pub fn render(contents: &[Content], parent: NodeId, clear: bool) -> Result<Refs> {
    ambient::with_document(|document| render_into(document, contents, parent, clear))?
}

/// Parse a JSON array of descriptors and render it
pub fn render_json<D: DocumentContext + ?Sized>(
    document: &mut D,
    json: &str,
    parent: NodeId,
    clear: bool,
) -> Result<Refs> {
    let contents: Vec<Content> = serde_json::from_str(json)?;
    render_into(document, &contents, parent, clear)
}

/// Same as [`render_json`] for an already-parsed JSON value
pub fn render_value<D: DocumentContext + ?Sized>(
    document: &mut D,
    value: Value,
    parent: NodeId,
    clear: bool,
) -> Result<Refs> {
    let contents: Vec<Content> = serde_json::from_value(value)?;
    render_into(document, &contents, parent, clear)
}
