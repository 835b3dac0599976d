// ABOUTME: Parser for compact tag descriptors like `div#main.a.b`.
// ABOUTME: Splits a descriptor into tag name, optional id and optional space-separated class list.

use serde::Serialize;

/// Tag used when a descriptor names no tag.
pub const DEFAULT_TAG: &str = "div";

/// A parsed `tag#id.class.class` descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDescriptor {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl TagDescriptor {
    /// Parses a descriptor.
    ///
    /// The id runs from the first `#` to the next `.`; whatever follows that
    /// `.` is folded back onto the tag part, so `div#main.a.b` and
    /// `div.a.b#main` both yield id `main` and classes `a b`. Classes start at
    /// the first `.` of the tag part and every `.` becomes a space. An empty
    /// tag falls back to [`DEFAULT_TAG`].
    pub fn parse(descriptor: &str) -> Self {
        let mut tag = descriptor.to_string();
        let mut id = None;

        if let Some(hash) = descriptor.find('#') {
            let id_part = &descriptor[hash + 1..];
            tag.truncate(hash);
            match id_part.find('.') {
                Some(dot) => {
                    id = Some(id_part[..dot].to_string());
                    tag.push_str(&id_part[dot..]);
                }
                None => id = Some(id_part.to_string()),
            }
        }

        let mut class_name = None;
        if let Some(dot) = tag.find('.') {
            class_name = Some(tag[dot + 1..].replace('.', " "));
            tag.truncate(dot);
        }

        if tag.is_empty() {
            tag = DEFAULT_TAG.to_string();
        }

        Self { tag, id, class_name }
    }
}

impl From<&str> for TagDescriptor {
    fn from(s: &str) -> Self {
        TagDescriptor::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(d: &str) -> (String, Option<String>, Option<String>) {
        let t = TagDescriptor::parse(d);
        (t.tag, t.id, t.class_name)
    }

    #[test]
    fn test_tag_id_and_classes() {
        assert_eq!(
            parts("div#main.a.b"),
            ("div".into(), Some("main".into()), Some("a b".into()))
        );
    }

    #[test]
    fn test_empty_defaults_to_div() {
        assert_eq!(parts(""), ("div".into(), None, None));
        assert_eq!(parts("#only-id"), ("div".into(), Some("only-id".into()), None));
        assert_eq!(parts(".only.classes"), ("div".into(), None, Some("only classes".into())));
    }

    #[test]
    fn test_class_without_id() {
        assert_eq!(parts("span.x"), ("span".into(), None, Some("x".into())));
    }

    #[test]
    fn test_plain_tag() {
        assert_eq!(parts("section"), ("section".into(), None, None));
    }

    #[test]
    fn test_classes_before_id_are_kept() {
        // Classes on both sides of the id are joined in tag-part order.
        assert_eq!(
            parts("p.lead#intro.wide"),
            ("p".into(), Some("intro".into()), Some("lead wide".into()))
        );
    }

    #[test]
    fn test_empty_segments_survive() {
        assert_eq!(parts("a#.x"), ("a".into(), Some("".into()), Some("x".into())));
        assert_eq!(parts("b."), ("b".into(), None, Some("".into())));
    }

    #[test]
    fn test_serializes_without_missing_parts() {
        let json = serde_json::to_value(TagDescriptor::parse("span.x")).unwrap();
        assert_eq!(json, serde_json::json!({ "tag": "span", "class_name": "x" }));
    }
}
