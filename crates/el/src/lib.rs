// ABOUTME: Main library entry point for the el DOM construction helpers.
// ABOUTME: Re-exports El, ElBuilder, Document, the child/attribute/style types, fill and distance.

//! el - build DOM elements from compact tag descriptors.
//!
//! A descriptor like `div#main.note.wide` names the tag, id and classes of
//! an element. The children that follow may be text (newlines become
//! `<br>`), existing nodes, or attribute maps carrying plain attributes,
//! inline styles and event listeners.
//!
//! # Example
//!
//! ```
//! use el_dom::{attrs, children, style, Document, El};
//!
//! let mut doc = Document::new();
//! let el = El::default();
//! let link = el
//!     .create(&mut doc, "a.nav", children!["Home", attrs! { "href" => "/" }])
//!     .unwrap();
//! let card = el
//!     .create(
//!         &mut doc,
//!         "div#card",
//!         children![link, attrs! { "style" => style! { "width" => 120 } }],
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     doc.outer_html(card),
//!     r#"<div id="card" style="width: 120px;"><a class="nav" href="/">Home</a></div>"#
//! );
//! ```

pub mod builder;
pub mod child;
pub mod descriptor;
pub mod distance;
pub mod dom;
pub mod error;
pub mod fill;
pub mod image;
pub mod options;
pub mod park;

pub use crate::builder::{el, El};
pub use crate::child::{AttrValue, Attributes, Child, StyleMap, StyleValue};
pub use crate::descriptor::TagDescriptor;
pub use crate::distance::{distance_to_rect, Distance};
pub use crate::dom::{listener, Document, Event, Listener, NodeData, NodeId, Point, Rect};
pub use crate::error::{DomError, Result};
pub use crate::fill::{fill, Piece};
pub use crate::options::{ElBuilder, Options};
pub use crate::park::OriginPosition;
