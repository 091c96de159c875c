//! Opaque XML fragments.
//!
//! Content the parser does not interpret (`UseKey`, `RequestedSecurityToken`,
//! `OnBehalfOf`, ...) is captured as a generic element tree so downstream
//! consumers such as signature validation can reinterpret it losslessly.

use std::fmt;

use quick_xml::escape::escape;
use serde::Serialize;

use super::QName;

/// An attribute on a start tag or captured element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Qualified attribute name.
    pub name: QName,
    /// Unescaped attribute value.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute.
    #[must_use]
    pub fn new(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A captured element subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Qualified element name.
    pub name: QName,
    /// Attributes in document order, namespace declarations included.
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

/// A child of a captured element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Character data.
    Text(String),
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the local part of the element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.name.local_part
    }

    /// Returns the value of the attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, local_part: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local_part == local_part)
            .map(|a| a.value.as_str())
    }

    /// Returns the value of the attribute with the given qualified name.
    #[must_use]
    pub fn attribute_ns(&self, namespace: &str, local_part: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.is(namespace, local_part))
            .map(|a| a.value.as_str())
    }

    /// Iterates over the child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Returns the first child element with the given local name.
    #[must_use]
    pub fn child(&self, local_part: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.local_name() == local_part)
    }

    /// Concatenates the direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// Serializes the fragment back to XML.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.prefixed();
        write!(f, "<{name}")?;
        for attr in &self.attributes {
            write!(f, " {}=\"{}\"", attr.name.prefixed(), escape(attr.value.as_str()))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(e) => write!(f, "{e}")?,
                Node::Text(t) => f.write_str(&escape(t.as_str()))?,
            }
        }
        write!(f, "</{name}>")
    }
}
