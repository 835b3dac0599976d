// ABOUTME: Off-screen parking of elements and restoring them to their original position.
// ABOUTME: Snapshots position/left/top into the document's origin side table while parked.

use crate::builder::El;
use crate::dom::{Document, NodeId};

/// Inline `position`, `left` and `top` of an element before it was parked.
/// Empty strings mean the property was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginPosition {
    pub position: String,
    pub left: String,
    pub top: String,
}

impl Document {
    /// The origin snapshot of a parked element.
    pub fn origin_position(&self, id: NodeId) -> Option<&OriginPosition> {
        self.origins.get(&id)
    }

    pub fn is_parked(&self, id: NodeId) -> bool {
        self.origins.contains_key(&id)
    }
}

impl El {
    /// Moves each target far off screen with `position: fixed`.
    ///
    /// Already-parked targets are left alone, so the first snapshot survives.
    pub fn faraway(&self, doc: &mut Document, targets: &[NodeId]) {
        for &target in targets {
            if doc.is_parked(target) {
                continue;
            }
            let origin = OriginPosition {
                position: doc.style_property(target, "position"),
                left: doc.style_property(target, "left"),
                top: doc.style_property(target, "top"),
            };
            tracing::trace!(?target, ?origin, "parking element");
            doc.origins.insert(target, origin);

            let offset = &self.options().park_offset;
            doc.set_style_property(target, "position", "fixed");
            doc.set_style_property(target, "left", offset);
            doc.set_style_property(target, "top", offset);
        }
    }

    /// Restores each parked target's `position`, `left` and `top`.
    ///
    /// Targets that are not parked are left alone.
    pub fn bringback(&self, doc: &mut Document, targets: &[NodeId]) {
        for &target in targets {
            let Some(origin) = doc.origins.remove(&target) else {
                continue;
            };
            tracing::trace!(?target, ?origin, "restoring element");
            doc.set_style_property(target, "position", &origin.position);
            doc.set_style_property(target, "left", &origin.left);
            doc.set_style_property(target, "top", &origin.top);
        }
    }
}
