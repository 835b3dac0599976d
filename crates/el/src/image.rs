// ABOUTME: Responsive image helpers deriving @2x/@3x sources from a base image path.
// ABOUTME: Builds new image elements or rewrites src/srcset on existing ones.

use std::iter;

use crate::builder::El;
use crate::child::{Attributes, Child};
use crate::dom::{Document, NodeId};
use crate::error::Result;

/// Inserts `@<scale>x` before the last occurrence of `ext` in `src`.
///
/// `src` is expected to contain `ext`. When it does not, the stem is taken
/// as empty and a warning is logged.
pub fn density_variant(src: &str, ext: &str, scale: u32) -> String {
    let stem = match src.rfind(ext) {
        Some(index) => &src[..index],
        None => {
            tracing::warn!(src, ext, "image path has no expected extension");
            ""
        }
    };
    format!("{}@{}x{}", stem, scale, ext)
}

/// Builds a `srcset` value such as `a@2x.png 2x, a@3x.png 3x`.
pub fn srcset(src: &str, ext: &str, scales: &[u32]) -> String {
    scales
        .iter()
        .map(|&scale| format!("{} {}x", density_variant(src, ext, scale), scale))
        .collect::<Vec<_>>()
        .join(", ")
}

impl El {
    fn image_attributes(&self, src: &str) -> Attributes {
        let opts = self.options();
        Attributes::new()
            .with("src", src)
            .with("srcset", srcset(src, &opts.image_extension, &opts.image_scales))
    }

    /// Builds an element with `src` and a high-density `srcset`.
    ///
    /// Children are resolved first; `src` and `srcset` are applied last.
    pub fn res_image<I>(
        &self,
        doc: &mut Document,
        descriptor: &str,
        src: &str,
        children: I,
    ) -> Result<NodeId>
    where
        I: IntoIterator<Item = Child>,
    {
        let attrs = Child::Attributes(self.image_attributes(src));
        self.create(doc, descriptor, children.into_iter().chain(iter::once(attrs)))
    }

    /// Points an existing image at a new base path.
    pub fn change_res_image(&self, doc: &mut Document, target: NodeId, src: &str) -> Result<()> {
        self.append(doc, target, iter::once(Child::Attributes(self.image_attributes(src))))
    }
}
