// ABOUTME: Error types for DOM construction and mutation.
// ABOUTME: Provides the DomError enum with InvalidTagName, InvalidAttributeName and HierarchyRequest variants.

use thiserror::Error;

/// Errors the host document raises when asked to do something it cannot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The tag name is not a valid element name.
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// The attribute name cannot appear in markup.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    /// The requested insertion would break the tree (cycle, or moving the root).
    #[error("hierarchy request error: {0}")]
    HierarchyRequest(String),
}

impl DomError {
    /// Creates an InvalidTagName error for the given name.
    pub fn invalid_tag_name(name: impl Into<String>) -> Self {
        DomError::InvalidTagName(name.into())
    }

    /// Creates an InvalidAttributeName error for the given name.
    pub fn invalid_attribute_name(name: impl Into<String>) -> Self {
        DomError::InvalidAttributeName(name.into())
    }

    /// Creates a HierarchyRequest error with a custom message.
    pub fn hierarchy(msg: impl Into<String>) -> Self {
        DomError::HierarchyRequest(msg.into())
    }

    /// Returns true if this is an InvalidTagName error.
    pub fn is_invalid_tag_name(&self) -> bool {
        matches!(self, DomError::InvalidTagName(_))
    }

    /// Returns true if this is an InvalidAttributeName error.
    pub fn is_invalid_attribute_name(&self) -> bool {
        matches!(self, DomError::InvalidAttributeName(_))
    }

    /// Returns true if this is a HierarchyRequest error.
    pub fn is_hierarchy_request(&self) -> bool {
        matches!(self, DomError::HierarchyRequest(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DomError>;
