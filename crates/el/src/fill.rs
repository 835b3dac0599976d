// ABOUTME: Template fill: splices a replacement piece into every occurrence of a marker in text pieces.
// ABOUTME: Provides the Piece enum (text or node) and the iterative fill routine.

use serde::Serialize;

use crate::dom::NodeId;

/// A template piece: literal text or a node reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Node(NodeId),
}

impl Piece {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Piece::Text(text) => Some(text),
            Piece::Node(_) => None,
        }
    }
}

impl From<&str> for Piece {
    fn from(s: &str) -> Self {
        Piece::Text(s.to_string())
    }
}

impl From<String> for Piece {
    fn from(s: String) -> Self {
        Piece::Text(s)
    }
}

impl From<NodeId> for Piece {
    fn from(id: NodeId) -> Self {
        Piece::Node(id)
    }
}

impl Serialize for Piece {
    /// Text serializes as a string; nodes as `{"node": "<id>"}`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        match self {
            Piece::Text(text) => serializer.serialize_str(text),
            Piece::Node(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("node", &format!("{:?}", id))?;
                map.end()
            }
        }
    }
}

/// Replaces every occurrence of `target` in the text pieces with `replacement`.
///
/// Occurrences are found left to right without overlap. Text before a match
/// is kept only if non-empty; the text after the last match is always kept,
/// even when empty. Node pieces pass through. An empty `target` matches
/// nothing.
pub fn fill(templates: &[Piece], target: &str, replacement: &Piece) -> Vec<Piece> {
    let mut result = Vec::with_capacity(templates.len());
    for template in templates {
        let text = match template {
            Piece::Text(text) if !target.is_empty() => text.as_str(),
            other => {
                result.push(other.clone());
                continue;
            }
        };

        let mut rest = text;
        while let Some(index) = rest.find(target) {
            let before = &rest[..index];
            if !before.is_empty() {
                result.push(Piece::from(before));
            }
            result.push(replacement.clone());
            rest = &rest[index + target.len()..];
        }
        result.push(Piece::from(rest));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(pieces: &[Piece]) -> Vec<&str> {
        pieces.iter().map(|p| p.as_text().unwrap_or("<node>")).collect()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let out = fill(&[Piece::from("a-X-b-X-c")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["a-", "*", "-b-", "*", "-c"]);
    }

    #[test]
    fn test_leading_empty_segment_dropped() {
        let out = fill(&[Piece::from("X-")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["*", "-"]);

        let out = fill(&[Piece::from("-X-")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["-", "*", "-"]);
    }

    #[test]
    fn test_trailing_empty_segment_kept() {
        let out = fill(&[Piece::from("aX")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["a", "*", ""]);
    }

    #[test]
    fn test_adjacent_matches() {
        let out = fill(&[Piece::from("XX")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["*", "*", ""]);
    }

    #[test]
    fn test_multichar_target_does_not_overlap() {
        let out = fill(&[Piece::from("aaaa")], "aa", &Piece::from("b"));
        assert_eq!(texts(&out), vec!["b", "b", ""]);
    }

    #[test]
    fn test_no_match_passes_through() {
        let out = fill(&[Piece::from("plain"), Piece::from("")], "X", &Piece::from("*"));
        assert_eq!(texts(&out), vec!["plain", ""]);
    }

    #[test]
    fn test_empty_target_is_identity() {
        let input = vec![Piece::from("abc")];
        assert_eq!(fill(&input, "", &Piece::from("*")), input);
    }

    #[test]
    fn test_node_pieces_and_node_replacement() {
        let mut tree = ego_tree::Tree::new(());
        let a = tree.orphan(()).id();
        let b = tree.orphan(()).id();

        let out = fill(&[Piece::Node(a), Piece::from("hi {name}!")], "{name}", &Piece::Node(b));
        assert_eq!(
            out,
            vec![Piece::Node(a), Piece::from("hi "), Piece::Node(b), Piece::from("!")]
        );
    }

    #[test]
    fn test_inputs_untouched() {
        let input = vec![Piece::from("a-X")];
        let _ = fill(&input, "X", &Piece::from("*"));
        assert_eq!(input, vec![Piece::from("a-X")]);
    }

    #[test]
    fn test_serialize_text_pieces() {
        let out = fill(&[Piece::from("a-X")], "X", &Piece::from("*"));
        assert_eq!(serde_json::to_string(&out).unwrap(), r#"["a-","*",""]"#);
    }
}
