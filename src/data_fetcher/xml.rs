//! Structural XML normalization.
//!
//! Every element becomes an [`XmlNode`] whose children are grouped by tag
//! name into ordered sequences. A tag that appears once and a tag that
//! appears many times are read the same way, so callers never branch on
//! cardinality.

use crate::error::AppError;
use std::collections::HashMap;

/// An element of a parsed XML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    name: String,
    attributes: HashMap<String, String>,
    children: HashMap<String, Vec<XmlNode>>,
    text: String,
}

impl XmlNode {
    /// Tag name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Child elements tagged `tag`, in document order. Empty when absent.
    pub fn children(&self, tag: &str) -> &[XmlNode] {
        self.children.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First child element tagged `tag`.
    pub fn first(&self, tag: &str) -> Option<&XmlNode> {
        self.children(tag).first()
    }

    /// Concatenated text content directly under this element.
    /// Whitespace-only content counts as absent.
    pub fn text(&self) -> Option<&str> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    fn from_element(element: roxmltree::Node<'_, '_>) -> Self {
        let attributes = element
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect();

        let mut children: HashMap<String, Vec<XmlNode>> = HashMap::new();
        let mut text = String::new();

        for child in element.children() {
            if child.is_element() {
                children
                    .entry(child.tag_name().name().to_string())
                    .or_default()
                    .push(XmlNode::from_element(child));
            } else if child.is_text()
                && let Some(t) = child.text()
            {
                text.push_str(t);
            }
        }

        XmlNode {
            name: element.tag_name().name().to_string(),
            attributes,
            children,
            text,
        }
    }
}

/// Parses an XML document and returns its root element.
///
/// # Errors
/// * `AppError::MalformedPayload` - the input is not well-formed XML
pub fn parse(xml: &str) -> Result<XmlNode, AppError> {
    let document =
        roxmltree::Document::parse(xml).map_err(|e| AppError::malformed_payload(e.to_string()))?;
    Ok(XmlNode::from_element(document.root_element()))
}
