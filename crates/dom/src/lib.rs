//! Arena-backed Document Library
//!
//! A small host document: nodes, child lists, reflected element
//! properties, inline style and bubbling events, all stored in one arena.
//!
//! ## Core Design
//!
//! ```text
//! Document ──owns──> DomArena: Vec<DomNode>
//!    │                   ↑
//!    │              NodeId (u32)
//!    └──owns──> listeners: NodeId → [(event type, Rc<dyn Fn(&Event)>)]
//! ```

pub mod ambient;
pub mod arena;
pub mod document;
pub mod error;
pub mod serializer;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use document::Document;
pub use error::{DomError, Result};
pub use serializer::{HtmlSerializer, SerializerConfig};
pub use types::*;
