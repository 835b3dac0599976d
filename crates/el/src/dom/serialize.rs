// ABOUTME: HTML serialization of document subtrees.
// ABOUTME: Produces outer/inner HTML with text and attribute escaping and void-element handling.

use super::{Document, NodeData, NodeId};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Escapes text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

enum Step {
    Open(NodeId),
    Close(NodeId),
}

impl Document {
    /// Serializes a node and its subtree. Documents and fragments serialize
    /// as their children.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Serializes the children of a node.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_html(child, &mut out);
        }
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let mut stack = vec![Step::Open(id)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Open(node) => match self.data(node) {
                    NodeData::Text(text) => out.push_str(&escape_text(text)),
                    NodeData::Document | NodeData::Fragment => {
                        push_children(self, node, &mut stack);
                    }
                    NodeData::Element(el) => {
                        out.push('<');
                        out.push_str(el.tag());
                        for (name, value) in el.attrs() {
                            out.push(' ');
                            out.push_str(name);
                            out.push_str("=\"");
                            out.push_str(&escape_attr(&value));
                            out.push('"');
                        }
                        out.push('>');
                        if !VOID_ELEMENTS.contains(&el.tag()) {
                            stack.push(Step::Close(node));
                            push_children(self, node, &mut stack);
                        }
                    }
                },
                Step::Close(node) => {
                    if let Some(tag) = self.tag_name(node) {
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
        }
    }
}

fn push_children(doc: &Document, node: NodeId, stack: &mut Vec<Step>) {
    for child in doc.children(node).into_iter().rev() {
        stack.push(Step::Open(child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"say "hi" & <go>"#), "say &quot;hi&quot; &amp; <go>");
    }

    #[test]
    fn test_outer_html_nested() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.set_attribute(div, "id", "main").unwrap();
        let p = doc.create_element("p").unwrap();
        let text = doc.create_text("a & b");
        let br = doc.create_element("br").unwrap();
        doc.append_child(p, text).unwrap();
        doc.append_child(p, br).unwrap();
        doc.append_child(div, p).unwrap();

        assert_eq!(
            doc.outer_html(div),
            r#"<div id="main"><p>a &amp; b<br></p></div>"#
        );
        assert_eq!(doc.inner_html(div), "<p>a &amp; b<br></p>");
    }

    #[test]
    fn test_style_serialized_in_attribute_position() {
        let mut doc = Document::new();
        let div = doc.create_element("div").unwrap();
        doc.set_attribute(div, "class", "x").unwrap();
        doc.set_style_property(div, "width", "10px");
        doc.set_attribute(div, "title", "t").unwrap();

        assert_eq!(
            doc.outer_html(div),
            r#"<div class="x" style="width: 10px;" title="t"></div>"#
        );
    }

    #[test]
    fn test_fragment_serializes_children() {
        let mut doc = Document::new();
        let frag = doc.create_fragment();
        let one = doc.create_text("one");
        let hr = doc.create_element("hr").unwrap();
        doc.append_child(frag, one).unwrap();
        doc.append_child(frag, hr).unwrap();

        assert_eq!(doc.outer_html(frag), "one<hr>");
    }
}
