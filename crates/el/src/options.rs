// ABOUTME: Configuration options for the element helpers and the fluent ElBuilder.
// ABOUTME: Covers unitless style properties, the park offset, the image extension and density scales.

use std::collections::HashSet;

use crate::builder::El;
use crate::dom::style::normalize_property;

/// Style keys whose numeric values are written without a unit.
pub const DEFAULT_UNITLESS: &[&str] = &["zIndex", "opacity"];

/// Offset used to push parked elements off screen.
pub const DEFAULT_PARK_OFFSET: &str = "-999999px";

/// Configuration for [`El`].
#[derive(Debug, Clone)]
pub struct Options {
    /// Unitless properties, stored as CSS names (`z-index`).
    pub unitless: HashSet<String>,
    pub park_offset: String,
    /// Extension the responsive-image helpers insert density suffixes before.
    pub image_extension: String,
    /// Density factors for `srcset`, each rendered as `@<n>x`.
    pub image_scales: Vec<u32>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unitless: DEFAULT_UNITLESS
                .iter()
                .filter_map(|k| normalize_property(k))
                .collect(),
            park_offset: DEFAULT_PARK_OFFSET.to_string(),
            image_extension: ".png".to_string(),
            image_scales: vec![2, 3],
        }
    }
}

impl Options {
    /// True when numeric values for `key` stay unitless.
    pub fn is_unitless(&self, key: &str) -> bool {
        normalize_property(key).is_some_and(|name| self.unitless.contains(&name))
    }
}

/// Builder for [`El`] instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ElBuilder {
    opts: Options,
}

impl ElBuilder {
    /// Create a new ElBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Add a property whose numeric values get no `px` suffix.
    pub fn unitless(mut self, key: &str) -> Self {
        if let Some(name) = normalize_property(key) {
            self.opts.unitless.insert(name);
        }
        self
    }

    /// Set the offset used for `left`/`top` while parked.
    pub fn park_offset(mut self, offset: impl Into<String>) -> Self {
        self.opts.park_offset = offset.into();
        self
    }

    /// Set the image extension, including the dot.
    pub fn image_extension(mut self, ext: impl Into<String>) -> Self {
        self.opts.image_extension = ext.into();
        self
    }

    /// Set the density factors written to `srcset`.
    pub fn image_scales(mut self, scales: impl IntoIterator<Item = u32>) -> Self {
        self.opts.image_scales = scales.into_iter().collect();
        self
    }

    /// Build the El with the configured options.
    pub fn build(self) -> El {
        El::new(self.opts)
    }
}

impl Default for ElBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unitless_accepts_both_spellings() {
        let opts = Options::default();
        assert!(opts.is_unitless("zIndex"));
        assert!(opts.is_unitless("z-index"));
        assert!(opts.is_unitless("opacity"));
        assert!(!opts.is_unitless("width"));
    }

    #[test]
    fn test_builder_overrides() {
        let el = ElBuilder::new()
            .unitless("lineHeight")
            .park_offset("-5000px")
            .image_extension(".webp")
            .image_scales([2])
            .build();
        let opts = el.options();

        assert!(opts.is_unitless("line-height"));
        assert_eq!(opts.park_offset, "-5000px");
        assert_eq!(opts.image_extension, ".webp");
        assert_eq!(opts.image_scales, vec![2]);
    }
}
