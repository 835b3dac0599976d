// ABOUTME: Inline style declarations backing an element's `style` attribute.
// ABOUTME: Normalizes camelCase property names to CSS names and serializes to CSS text.

use once_cell::sync::Lazy;
use regex::Regex;

static PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(--[A-Za-z0-9_-]+|-?[a-z][a-z0-9-]*)$").unwrap());

/// Converts a property key to its CSS name.
///
/// Accepts both script-style keys (`zIndex`, `WebkitTransform`) and CSS names
/// (`z-index`). Returns `None` for keys that cannot name a CSS property.
pub fn normalize_property(key: &str) -> Option<String> {
    if key.starts_with("--") {
        return PROPERTY_RE.is_match(key).then(|| key.to_string());
    }
    if key == "cssFloat" {
        return Some("float".to_string());
    }

    let mut name = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }

    PROPERTY_RE.is_match(&name).then_some(name)
}

/// Ordered list of `property: value` declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSS declaration text such as `color: red; left: 4px`.
    /// Malformed declarations are dropped.
    pub fn parse(text: &str) -> Self {
        let mut style = Self::new();
        for decl in text.split(';') {
            if let Some((prop, value)) = decl.split_once(':') {
                style.set(prop.trim(), value.trim());
            }
        }
        style
    }

    /// Returns the value of a property, or `None` if it is not declared.
    pub fn get(&self, key: &str) -> Option<&str> {
        let name = normalize_property(key)?;
        self.decls
            .iter()
            .find(|(p, _)| *p == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets a property. An empty value removes the declaration.
    ///
    /// Returns false when the key does not name a CSS property; nothing is
    /// changed in that case.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        let Some(name) = normalize_property(key) else {
            return false;
        };
        if value.is_empty() {
            self.decls.retain(|(p, _)| *p != name);
            return true;
        }
        match self.decls.iter_mut().find(|(p, _)| *p == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.decls.push((name, value.to_string())),
        }
        true
    }

    /// Removes a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let name = normalize_property(key)?;
        let index = self.decls.iter().position(|(p, _)| *p == name)?;
        Some(self.decls.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.decls.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Serializes as `prop: value; prop: value;`.
    pub fn to_css_text(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
