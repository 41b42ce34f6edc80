//! Thread-local ambient document
//!
//! Callers that don't carry a document around get this one. Each thread
//! has its own; listeners hold `Rc`s so a document never crosses threads.

use std::cell::RefCell;

use crate::document::Document;
use crate::error::{DomError, Result};

thread_local! {
    static DOCUMENT: RefCell<Document> = RefCell::new(Document::new());
}

/// Run `f` with mutable access to the current thread's ambient document
///
/// Not reentrant: calling `with_document` again from inside `f` (or from a
/// listener dispatched inside `f`) returns [`DomError::DocumentBusy`].
pub fn with_document<R>(f: impl FnOnce(&mut Document) -> R) -> Result<R> {
    DOCUMENT.with(|document| {
        let mut document = document
            .try_borrow_mut()
            .map_err(|_| DomError::DocumentBusy)?;
        Ok(f(&mut document))
    })
}

/// Replace the ambient document with an empty one
pub fn reset() -> Result<()> {
    with_document(|document| *document = Document::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_document_persists_until_reset() {
        reset().unwrap();
        let div = with_document(|doc| {
            let div = doc.create_element("div").unwrap();
            doc.append_child(doc.root(), div).unwrap();
            div
        })
        .unwrap();

        let children = with_document(|doc| doc.child_ids(doc.root()).unwrap()).unwrap();
        assert_eq!(children, vec![div]);

        reset().unwrap();
        let children = with_document(|doc| doc.child_ids(doc.root()).unwrap()).unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_nested_access_is_an_error() {
        let inner = with_document(|_| with_document(|doc| doc.root())).unwrap();
        assert!(matches!(inner, Err(DomError::DocumentBusy)));

        let inner_reset = with_document(|_| reset()).unwrap();
        assert!(matches!(inner_reset, Err(DomError::DocumentBusy)));

        // The outer borrow is released afterwards
        assert!(with_document(|doc| doc.root()).is_ok());
    }
}
