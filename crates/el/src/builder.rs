// ABOUTME: The El helper: element construction from tag descriptors and children resolution.
// ABOUTME: Also provides fragment, clone, empty and the inline style setter.

use std::rc::Rc;

use crate::child::{AttrValue, Attributes, Child, StyleMap, StyleValue};
use crate::descriptor::TagDescriptor;
use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::fill::Piece;
use crate::options::{ElBuilder, Options};

/// DOM construction helpers bound to a set of [`Options`].
///
/// Every operation works on a caller-owned [`Document`]; `El` itself holds
/// only configuration.
#[derive(Debug, Clone, Default)]
pub struct El {
    opts: Options,
}

impl El {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> ElBuilder {
        ElBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Builds an element from a tag descriptor and children.
    ///
    /// The descriptor is parsed with [`TagDescriptor::parse`], `id` and `class`
    /// are set when present, then the children are resolved as in
    /// [`El::append`]. Fails if the document rejects the tag name or an
    /// attribute name.
    pub fn create<I>(&self, doc: &mut Document, descriptor: &str, children: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = Child>,
    {
        let desc = TagDescriptor::parse(descriptor);
        let element = doc.create_element(&desc.tag)?;
        if let Some(id) = &desc.id {
            doc.set_attribute(element, "id", id)?;
        }
        if let Some(class_name) = &desc.class_name {
            doc.set_attribute(element, "class", class_name)?;
        }

        self.append(doc, element, children)?;
        Ok(element)
    }

    /// Resolves children against `target`.
    ///
    /// Text is split on `\n` with a `<br>` between the pieces. Nodes are moved
    /// in as they are. Attribute maps take effect immediately, entry by entry;
    /// the collected nodes are appended to `target` in one step at the end.
    pub fn append<I>(&self, doc: &mut Document, target: NodeId, children: I) -> Result<()>
    where
        I: IntoIterator<Item = Child>,
    {
        let fragment = doc.create_fragment();
        for child in children {
            match child {
                Child::None => {}
                Child::Text(text) => append_lines(doc, fragment, &text)?,
                Child::Node(node) => doc.append_child(fragment, node)?,
                Child::Attributes(attrs) => self.apply_attributes(doc, target, &attrs)?,
            }
        }
        doc.append_child(target, fragment)
    }

    fn apply_attributes(&self, doc: &mut Document, target: NodeId, attrs: &Attributes) -> Result<()> {
        for (name, value) in attrs.iter() {
            match value {
                AttrValue::Remove => {
                    doc.remove_attribute(target, name);
                }
                AttrValue::Text(text) => doc.set_attribute(target, name, text)?,
                AttrValue::Listener(listener) => {
                    doc.add_event_listener(target, name, Rc::clone(listener));
                }
                AttrValue::Style(style) => self.style(doc, target, style),
            }
        }
        Ok(())
    }

    /// Builds a fragment from text and nodes. Text is kept verbatim.
    pub fn fragment<I>(&self, doc: &mut Document, pieces: I) -> Result<NodeId>
    where
        I: IntoIterator<Item = Piece>,
    {
        let fragment = doc.create_fragment();
        for piece in pieces {
            let node = match piece {
                Piece::Text(text) => doc.create_text(text),
                Piece::Node(node) => node,
            };
            doc.append_child(fragment, node)?;
        }
        Ok(fragment)
    }

    /// Deep copy of `target`. Listeners are not copied.
    pub fn clone_node(&self, doc: &mut Document, target: NodeId) -> NodeId {
        doc.clone_node(target)
    }

    /// Removes every child of each target.
    pub fn empty(&self, doc: &mut Document, targets: &[NodeId]) {
        for &target in targets {
            doc.remove_children(target);
        }
    }

    /// Applies a style map to `target`'s inline style.
    ///
    /// Numbers get a `px` suffix unless the key is unitless (`zIndex` and
    /// `opacity` by default). Keys that name no CSS property are skipped.
    pub fn style(&self, doc: &mut Document, target: NodeId, style: &StyleMap) {
        for (key, value) in style.iter() {
            let css = match value {
                StyleValue::Text(text) => text.clone(),
                StyleValue::Number(n) if self.opts.is_unitless(key) => format_number(*n),
                StyleValue::Number(n) => format!("{}px", format_number(*n)),
            };
            if !doc.set_style_property(target, key, &css) {
                tracing::debug!(key, value = %css, "ignored style property");
            }
        }
    }
}

fn append_lines(doc: &mut Document, parent: NodeId, text: &str) -> Result<()> {
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            let br = doc.create_element("br")?;
            doc.append_child(parent, br)?;
        }
        let node = doc.create_text(line);
        doc.append_child(parent, node)?;
    }
    Ok(())
}

/// Formats a number the way script engines print it: no trailing `.0`,
/// negative zero as `0`, and exponent form (`1e+21`, `1.5e-7`) outside
/// `[1e-6, 1e21)`.
fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }
    let sci = format!("{:e}", n);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => sci,
    }
}

/// Builds an element with default options.
///
/// ```
/// use el_dom::{children, el, Document};
///
/// let mut doc = Document::new();
/// let div = el(&mut doc, "div#main.a.b", children!["hi"]).unwrap();
/// assert_eq!(doc.outer_html(div), r#"<div id="main" class="a b">hi</div>"#);
/// ```
pub fn el<I>(doc: &mut Document, descriptor: &str, children: I) -> Result<NodeId>
where
    I: IntoIterator<Item = Child>,
{
    El::default().create(doc, descriptor, children)
}
