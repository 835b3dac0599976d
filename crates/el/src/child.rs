// ABOUTME: Argument types accepted by the element builder: children, attribute maps and style maps.
// ABOUTME: Provides Child, Attributes, AttrValue, StyleMap, StyleValue and the children!/attrs!/style! macros.

use std::fmt;

use crate::dom::{Event, Document, Listener, NodeId};

/// One value in a style map.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Set verbatim.
    Text(String),
    /// Suffixed with `px` unless the property is unitless.
    Number(f64),
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

/// Ordered map of style property keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap(Vec<(String, StyleValue)>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends an entry. Duplicate keys are kept; the last one wins when applied.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// The value of one attribute-map entry.
#[derive(Clone)]
pub enum AttrValue {
    /// Removes the attribute.
    Remove,
    /// Sets the attribute.
    Text(String),
    /// Applied through the style setter; the entry's key is not used.
    Style(StyleMap),
    /// Registered as a listener for the event named by the key.
    Listener(Listener),
}

impl AttrValue {
    /// Wraps a closure as a listener value.
    pub fn listener<F>(f: F) -> Self
    where
        F: Fn(&Event, &mut Document, NodeId) + 'static,
    {
        AttrValue::Listener(crate::dom::listener(f))
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Remove => write!(f, "Remove"),
            AttrValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            AttrValue::Style(m) => f.debug_tuple("Style").field(m).finish(),
            AttrValue::Listener(_) => write!(f, "Listener(..)"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Remove, Into::into)
    }
}

impl From<StyleMap> for AttrValue {
    fn from(m: StyleMap) -> Self {
        AttrValue::Style(m)
    }
}

impl From<Listener> for AttrValue {
    fn from(l: Listener) -> Self {
        AttrValue::Listener(l)
    }
}

/// Ordered attribute map. Entries are applied in order, so later entries for
/// the same key overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.push((name.into(), value.into()));
    }

    /// Adds a `style` entry.
    pub fn style(self, style: StyleMap) -> Self {
        self.with("style", AttrValue::Style(style))
    }

    /// Adds an event listener entry.
    pub fn on<F>(self, event: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Event, &mut Document, NodeId) + 'static,
    {
        self.with(event, AttrValue::listener(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// One argument to the element builder.
#[derive(Debug, Clone)]
pub enum Child {
    /// Skipped.
    None,
    /// Text; each `\n` becomes a `<br>`.
    Text(String),
    /// An element or fragment, appended as-is.
    Node(NodeId),
    Attributes(Attributes),
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

impl From<&String> for Child {
    fn from(s: &String) -> Self {
        Child::Text(s.clone())
    }
}

impl From<NodeId> for Child {
    fn from(id: NodeId) -> Self {
        Child::Node(id)
    }
}

impl From<Attributes> for Child {
    fn from(a: Attributes) -> Self {
        Child::Attributes(a)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(v: Option<T>) -> Self {
        v.map_or(Child::None, Into::into)
    }
}

/// Builds a `Vec<Child>` from heterogeneous arguments.
///
/// ```
/// use el_dom::{attrs, children, Child};
///
/// let kids: Vec<Child> = children!["hello", attrs! { "title" => "greeting" }];
/// assert_eq!(kids.len(), 2);
/// ```
#[macro_export]
macro_rules! children {
    () => { ::std::vec::Vec::<$crate::Child>::new() };
    ($($child:expr),+ $(,)?) => {
        ::std::vec![$($crate::Child::from($child)),+]
    };
}

/// Builds an [`Attributes`] map from `name => value` pairs.
///
/// Values may be strings, `None::<&str>` (removal), a [`StyleMap`] or a
/// [`Listener`].
#[macro_export]
macro_rules! attrs {
    () => { $crate::Attributes::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut attrs = $crate::Attributes::new();
        $(attrs.insert($name, $value);)+
        attrs
    }};
}

/// Builds a [`StyleMap`] from `key => value` pairs.
#[macro_export]
macro_rules! style {
    () => { $crate::StyleMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut style = $crate::StyleMap::new();
        $(style.insert($key, $value);)+
        style
    }};
}
