//! Element lookup helpers.

use folio_core::FxError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::WebError;

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or_else(|| FxError::MissingElement("window".to_string()).into())
}

pub fn document() -> Result<Document, WebError> {
    window()?
        .document()
        .ok_or_else(|| FxError::MissingElement("document".to_string()).into())
}

/// Looks up `id` and casts it, failing with `MissingElement` if either step fails.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, WebError> {
    optional_element(document, id).ok_or_else(|| FxError::MissingElement(id.to_string()).into())
}

pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// All elements matching a CSS selector, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Sets one inline style property, logging instead of failing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        tracing::debug!(property, error = ?e, "Failed to set style");
    }
}
