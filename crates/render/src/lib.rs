//! Declarative Tree Rendering
//!
//! Turns plain descriptor data into document nodes in one pass:
//!
//! ```text
//! [Content] ──render──> nodes appended under a container
//!                    └─> Refs: refName → NodeId (flattened over all levels)
//! ```
//!
//! Stateless: nothing is diffed, cached or reused between calls. A
//! descriptor without a `type` is reported to the diagnostic sink and
//! skipped; any other failure is the document's own error, returned as-is.
//!
//! ```
//! use dom::Document;
//! use render::{render_into, ElementDescriptor};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let refs = render_into(
//!     &mut doc,
//!     &[ElementDescriptor::new("p").text("hello").ref_name("greeting").into()],
//!     root,
//!     true,
//! )
//! .unwrap();
//!
//! assert_eq!(doc.text_content(refs["greeting"]).unwrap(), "hello");
//! ```

pub mod context;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod refs;
pub mod renderer;
pub mod style;

pub use context::DocumentContext;
pub use descriptor::{Content, ElementDescriptor};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{RenderError, Result};
pub use refs::Refs;
pub use renderer::{render, render_into, render_json, render_value, RenderConfig, Renderer};
