// ABOUTME: In-memory host document the element helpers build into.
// ABOUTME: Arena tree of elements, text and fragments with attributes, inline styles, listeners and layout rects.

//! Host document model.
//!
//! [`Document`] owns every node in an `ego_tree` arena and exposes the
//! primitives the builder relies on: element creation, attribute and inline
//! style access, child insertion and removal, event listeners, bounding boxes
//! and HTML serialization.
//!
//! Node ids are only meaningful for the document that created them. Passing an
//! id from another document panics, the same way indexing a slice out of
//! bounds does.

pub mod events;
pub mod geometry;
pub mod serialize;
pub mod style;

use std::collections::HashMap;
use std::fmt;

use ego_tree::Tree;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DomError, Result};
use crate::park::OriginPosition;

pub use ego_tree::NodeId;
pub use events::{listener, Event, Listener};
pub use geometry::{Point, Rect};
pub use style::InlineStyle;

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9._:-]*$").unwrap());
static ATTR_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[^\s"'>/=\x00]+$"#).unwrap());

/// Payload of a single tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// The document root. There is exactly one.
    Document,
    Element(ElementData),
    Text(String),
    /// A parentless group of nodes; appending it moves its children.
    Fragment,
}

/// Tag, attributes and inline style of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
    tag: String,
    // "style" is kept here with an empty value to remember its position;
    // the declarations live in `style`.
    attrs: Vec<(String, String)>,
    style: InlineStyle,
}

impl ElementData {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Attribute pairs in insertion order, with `style` rendered as CSS text.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.attrs.iter().map(|(name, value)| {
            if name == "style" {
                (name.as_str(), self.style.to_css_text())
            } else {
                (name.as_str(), value.clone())
            }
        })
    }

    fn attr(&self, name: &str) -> Option<String> {
        if name == "style" {
            return self.has_attr(name).then(|| self.style.to_css_text());
        }
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    fn set_attr(&mut self, name: String, value: &str) {
        let stored = if name == "style" {
            self.style = InlineStyle::parse(value);
            String::new()
        } else {
            value.to_string()
        };
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = stored,
            None => self.attrs.push((name, stored)),
        }
    }

    fn remove_attr(&mut self, name: &str) -> bool {
        if name == "style" {
            self.style.clear();
        }
        let before = self.attrs.len();
        self.attrs.retain(|(n, _)| n != name);
        before != self.attrs.len()
    }

    fn sync_style_marker(&mut self) {
        let marked = self.has_attr("style");
        if self.style.is_empty() && marked {
            self.attrs.retain(|(n, _)| n != "style");
        } else if !self.style.is_empty() && !marked {
            self.attrs.push(("style".to_string(), String::new()));
        }
    }
}

/// The host document: an arena of nodes plus per-node side tables.
///
/// The arena never frees nodes. Detached nodes (emptied children, the
/// staging fragment of every append) keep their slot, and their listeners,
/// rects and origin markers stay until [`Document::release`] drops them.
/// Documents that re-render often should release what they discard.
pub struct Document {
    tree: Tree<NodeData>,
    listeners: HashMap<NodeId, Vec<(String, Listener)>>,
    rects: HashMap<NodeId, Rect>,
    pub(crate) origins: HashMap<NodeId, OriginPosition>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("tree", &self.tree)
            .field("listeners", &self.listeners.len())
            .field("rects", &self.rects)
            .field("origins", &self.origins)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only the root node.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(NodeData::Document),
            listeners: HashMap::new(),
            rects: HashMap::new(),
            origins: HashMap::new(),
        }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    // ------------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------------

    /// Creates a detached element. Tag names are ASCII-lowercased.
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if !TAG_NAME_RE.is_match(tag) {
            return Err(DomError::invalid_tag_name(tag));
        }
        let data = ElementData {
            tag: tag.to_ascii_lowercase(),
            ..ElementData::default()
        };
        let id = self.tree.orphan(NodeData::Element(data)).id();
        tracing::trace!(?id, tag, "created element");
        Ok(id)
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.tree.orphan(NodeData::Text(text.into())).id()
    }

    /// Creates an empty fragment.
    pub fn create_fragment(&mut self) -> NodeId {
        self.tree.orphan(NodeData::Fragment).id()
    }

    // ------------------------------------------------------------------------
    // Node inspection
    // ------------------------------------------------------------------------

    fn node(&self, id: NodeId) -> ego_tree::NodeRef<'_, NodeData> {
        self.tree
            .get(id)
            .expect("node id does not belong to this document")
    }

    fn node_mut(&mut self, id: NodeId) -> ego_tree::NodeMut<'_, NodeData> {
        self.tree
            .get_mut(id)
            .expect("node id does not belong to this document")
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.node(id).value() {
            NodeData::Element(data) => Some(data),
            _ => None,
        }
    }

    fn with_element_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut ElementData) -> R,
    ) -> Option<R> {
        let mut node = self.node_mut(id);
        match node.value() {
            NodeData::Element(data) => Some(f(data)),
            _ => None,
        }
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        self.node(id).value()
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.data(id), NodeData::Element(_))
    }

    pub fn is_text(&self, id: NodeId) -> bool {
        matches!(self.data(id), NodeData::Text(_))
    }

    pub fn is_fragment(&self, id: NodeId) -> bool {
        matches!(self.data(id), NodeData::Fragment)
    }

    /// Lowercase tag name, or `None` for non-elements.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::tag)
    }

    /// The text of a text node, or `None` for other nodes.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.data(id) {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent().map(|p| p.id())
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).children().map(|c| c.id()).collect()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).first_child().map(|c| c.id())
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.node(id).has_children()
    }

    /// Concatenated text of every text node in the subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        self.node(id)
            .descendants()
            .filter_map(|n| match n.value() {
                NodeData::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Tree mutation
    // ------------------------------------------------------------------------

    /// Appends `child` as the last child of `parent`.
    ///
    /// A node that already has a parent is moved. Appending a fragment moves
    /// its children and leaves the fragment empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.is_text(parent) {
            return Err(DomError::hierarchy("text nodes cannot have children"));
        }
        if child == self.root() {
            return Err(DomError::hierarchy("the document root cannot be moved"));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::hierarchy("a node cannot be inserted into itself"));
        }

        if self.is_fragment(child) {
            for grandchild in self.children(child) {
                self.move_into(parent, grandchild);
            }
        } else {
            self.move_into(parent, child);
        }
        Ok(())
    }

    fn move_into(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).detach();
        self.node_mut(parent).append_id(child);
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.node(node).ancestors().any(|a| a.id() == ancestor)
    }

    /// Detaches `child` from `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::hierarchy("node is not a child of the given parent"));
        }
        self.node_mut(child).detach();
        Ok(())
    }

    /// Detaches every child of `id`.
    pub fn remove_children(&mut self, id: NodeId) {
        while let Some(child) = self.first_child(id) {
            self.node_mut(child).detach();
        }
    }

    /// Drops the listeners, layout rects and origin markers of the detached
    /// subtree rooted at `id`. The nodes themselves stay in the arena.
    ///
    /// Fails with a hierarchy error if `id` is still attached to a parent.
    pub fn release(&mut self, id: NodeId) -> Result<()> {
        if id == self.root() || self.parent(id).is_some() {
            return Err(DomError::hierarchy("only detached subtrees can be released"));
        }
        let subtree: Vec<NodeId> = self.node(id).descendants().map(|n| n.id()).collect();
        for node in &subtree {
            self.listeners.remove(node);
            self.rects.remove(node);
            self.origins.remove(node);
        }
        tracing::trace!(?id, nodes = subtree.len(), "released subtree");
        Ok(())
    }

    /// Deep-copies the subtree rooted at `id` into a new detached subtree.
    ///
    /// Tags, attributes, inline styles and text are copied. Listeners, layout
    /// rects and origin markers are not.
    pub fn clone_node(&mut self, id: NodeId) -> NodeId {
        let copy = match self.data(id) {
            NodeData::Document => NodeData::Fragment,
            other => other.clone(),
        };
        let new_root = self.tree.orphan(copy).id();

        let mut stack: Vec<(NodeId, NodeId)> = self
            .children(id)
            .into_iter()
            .rev()
            .map(|c| (c, new_root))
            .collect();
        while let Some((source, dest_parent)) = stack.pop() {
            let copy = self.data(source).clone();
            let new_id = self.node_mut(dest_parent).append(copy).id();
            for grandchild in self.children(source).into_iter().rev() {
                stack.push((grandchild, new_id));
            }
        }
        new_root
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    /// Value of an attribute, or `None` when absent or `id` is not an element.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.element(id)?.attr(&name.to_ascii_lowercase())
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.has_attr(&name.to_ascii_lowercase()))
    }

    /// Attribute pairs in insertion order.
    pub fn attributes(&self, id: NodeId) -> Vec<(String, String)> {
        self.element(id)
            .map(|el| el.attrs().map(|(n, v)| (n.to_string(), v)).collect())
            .unwrap_or_default()
    }

    /// Sets an attribute. Names are ASCII-lowercased. Setting `style` replaces
    /// the inline declarations. Non-elements are left untouched.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        if !ATTR_NAME_RE.is_match(name) {
            return Err(DomError::invalid_attribute_name(name));
        }
        self.with_element_mut(id, |el| el.set_attr(name.to_ascii_lowercase(), value));
        Ok(())
    }

    /// Removes an attribute. Returns true if it was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.with_element_mut(id, |el| el.remove_attr(&name))
            .unwrap_or(false)
    }

    /// The `id` attribute.
    pub fn element_id(&self, id: NodeId) -> Option<String> {
        self.attribute(id, "id")
    }

    /// The `class` attribute.
    pub fn class_name(&self, id: NodeId) -> Option<String> {
        self.attribute(id, "class")
    }

    // ------------------------------------------------------------------------
    // Inline style
    // ------------------------------------------------------------------------

    /// Value of an inline style property, empty when unset (like `el.style.x`).
    pub fn style_property(&self, id: NodeId, key: &str) -> String {
        self.element(id)
            .and_then(|el| el.style.get(key))
            .unwrap_or_default()
            .to_string()
    }

    /// Sets an inline style property; an empty value removes it.
    ///
    /// Returns false if the key names no CSS property or `id` is not an element.
    pub fn set_style_property(&mut self, id: NodeId, key: &str, value: &str) -> bool {
        self.with_element_mut(id, |el| {
            let applied = el.style.set(key, value);
            el.sync_style_marker();
            applied
        })
        .unwrap_or(false)
    }

    /// Removes an inline style property, returning its previous value.
    pub fn remove_style_property(&mut self, id: NodeId, key: &str) -> Option<String> {
        self.with_element_mut(id, |el| {
            let previous = el.style.remove(key);
            el.sync_style_marker();
            previous
        })
        .flatten()
    }

    /// The inline style declarations of an element.
    pub fn inline_style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.element(id).map(ElementData::style)
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    /// The box last reported for `id`; zero-sized at the origin if none was.
    pub fn bounding_client_rect(&self, id: NodeId) -> Rect {
        self.rects.get(&id).copied().unwrap_or_default()
    }

    /// Records the layout box of `id`. There is no layout engine here, so the
    /// embedder supplies boxes.
    pub fn set_bounding_client_rect(&mut self, id: NodeId, rect: Rect) {
        self.rects.insert(id, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_prunes_side_tables_of_detached_subtree() {
        let mut doc = Document::new();
        let list = doc.create_element("ul").unwrap();
        let item = doc.create_element("li").unwrap();
        let label = doc.create_element("span").unwrap();
        doc.append_child(list, item).unwrap();
        doc.append_child(item, label).unwrap();
        doc.add_event_listener(label, "click", listener(|_, _, _| {}));
        doc.set_bounding_client_rect(item, Rect::new(0.0, 0.0, 10.0, 10.0));

        assert!(doc.release(item).unwrap_err().is_hierarchy_request());
        assert!(doc.release(doc.root()).unwrap_err().is_hierarchy_request());

        doc.remove_children(list);
        doc.release(item).unwrap();

        assert_eq!(doc.listener_count(label, "click"), 0);
        assert_eq!(doc.bounding_client_rect(item), Rect::default());
        assert!(doc.listeners.is_empty());
        assert!(doc.rects.is_empty());
    }

    #[test]
    fn test_create_element_lowercases_and_validates() {
        let mut doc = Document::new();
        let div = doc.create_element("DIV").unwrap();
        assert_eq!(doc.tag_name(div), Some("div"));
        assert!(doc.is_element(div));

        assert!(doc.create_element("").unwrap_err().is_invalid_tag_name());
        assert!(doc.create_element("1h").unwrap_err().is_invalid_tag_name());
        assert!(doc.create_element("a b").unwrap_err().is_invalid_tag_name());
        assert!(doc.create_element("my-widget").is_ok());
    }

    #[test]
    fn test_append_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let child = doc.create_element("span").unwrap();

        doc.append_child(a, child).unwrap();
        doc.append_child(b, child).unwrap();

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_append_fragment_moves_children() {
        let mut doc = Document::new();
        let target = doc.create_element("p").unwrap();
        let frag = doc.create_fragment();
        let t1 = doc.create_text("one");
        let t2 = doc.create_text("two");
        doc.append_child(frag, t1).unwrap();
        doc.append_child(frag, t2).unwrap();

        doc.append_child(target, frag).unwrap();

        assert_eq!(doc.children(target), vec![t1, t2]);
        assert!(!doc.has_children(frag));
        assert_eq!(doc.text_content(target), "onetwo");
    }

    #[test]
    fn test_append_rejects_cycles() {
        let mut doc = Document::new();
        let outer = doc.create_element("div").unwrap();
        let inner = doc.create_element("div").unwrap();
        doc.append_child(outer, inner).unwrap();

        assert!(doc.append_child(inner, outer).unwrap_err().is_hierarchy_request());
        assert!(doc.append_child(outer, outer).unwrap_err().is_hierarchy_request());
        let root = doc.root();
        assert!(doc.append_child(outer, root).unwrap_err().is_hierarchy_request());
    }

    #[test]
    fn test_append_to_text_fails() {
        let mut doc = Document::new();
        let text = doc.create_text("x");
        let span = doc.create_element("span").unwrap();
        assert!(doc.append_child(text, span).is_err());
    }

    #[test]
    fn test_remove_child() {
        let mut doc = Document::new();
        let parent = doc.create_element("ul").unwrap();
        let li = doc.create_element("li").unwrap();
        let stranger = doc.create_element("li").unwrap();
        doc.append_child(parent, li).unwrap();

        assert!(doc.remove_child(parent, stranger).is_err());
        doc.remove_child(parent, li).unwrap();
        assert!(doc.children(parent).is_empty());
        assert_eq!(doc.parent(li), None);
    }

    #[test]
    fn test_attributes_roundtrip() {
        let mut doc = Document::new();
        let a = doc.create_element("a").unwrap();

        doc.set_attribute(a, "HREF", "/x").unwrap();
        doc.set_attribute(a, "title", "t").unwrap();
        doc.set_attribute(a, "href", "/y").unwrap();

        assert_eq!(doc.attribute(a, "href").as_deref(), Some("/y"));
        assert_eq!(
            doc.attributes(a),
            vec![
                ("href".to_string(), "/y".to_string()),
                ("title".to_string(), "t".to_string())
            ]
        );

        assert!(doc.remove_attribute(a, "href"));
        assert!(!doc.remove_attribute(a, "href"));
        assert!(!doc.has_attribute(a, "href"));
    }

    #[test]
    fn test_invalid_attribute_name() {
        let mut doc = Document::new();
        let a = doc.create_element("a").unwrap();
        let err = doc.set_attribute(a, "bad name", "x").unwrap_err();
        assert!(err.is_invalid_attribute_name());
    }

    #[test]
    fn test_style_attribute_is_backed_by_declarations() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        doc.set_attribute(div, "style", "color: red; left: 2px").unwrap();
        assert_eq!(doc.style_property(div, "left"), "2px");

        doc.set_style_property(div, "top", "3px");
        assert_eq!(
            doc.attribute(div, "style").as_deref(),
            Some("color: red; left: 2px; top: 3px;")
        );

        doc.remove_attribute(div, "style");
        assert_eq!(doc.style_property(div, "color"), "");
        assert!(!doc.has_attribute(div, "style"));
    }

    #[test]
    fn test_style_marker_follows_declarations() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();

        doc.set_style_property(div, "left", "1px");
        assert!(doc.has_attribute(div, "style"));

        assert_eq!(doc.remove_style_property(div, "left").as_deref(), Some("1px"));
        assert!(!doc.has_attribute(div, "style"));
    }

    #[test]
    fn test_clone_node_is_deep_and_detached() {
        let mut doc = Document::new();
        let ul = doc.create_element("ul").unwrap();
        doc.set_attribute(ul, "class", "list").unwrap();
        doc.set_style_property(ul, "margin", "0");
        let li = doc.create_element("li").unwrap();
        let text = doc.create_text("item");
        doc.append_child(li, text).unwrap();
        doc.append_child(ul, li).unwrap();

        let copy = doc.clone_node(ul);

        assert_ne!(copy, ul);
        assert_eq!(doc.parent(copy), None);
        assert_eq!(doc.class_name(copy).as_deref(), Some("list"));
        assert_eq!(doc.style_property(copy, "margin"), "0");
        let copied_li = doc.children(copy);
        assert_eq!(copied_li.len(), 1);
        assert_ne!(copied_li[0], li);
        assert_eq!(doc.text_content(copy), "item");

        // Mutating the copy leaves the source alone.
        doc.set_attribute(copy, "class", "other").unwrap();
        assert_eq!(doc.class_name(ul).as_deref(), Some("list"));
    }

    #[test]
    fn test_bounding_rect_defaults_to_zero() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        assert_eq!(doc.bounding_client_rect(div), Rect::default());

        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        doc.set_bounding_client_rect(div, rect);
        assert_eq!(doc.bounding_client_rect(div), rect);
    }
}
