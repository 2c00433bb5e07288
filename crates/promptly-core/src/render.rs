//! Render-surface seam and the two composed view transforms.
//!
//! The core never touches a real layout engine. It drives an abstract
//! [`RenderSurface`] (one block per paragraph inside a clipping viewport) and
//! reads back two post-layout heights. Mirroring and scrolling are expressed
//! as a pair of transforms with a fixed application order: the container is
//! scaled first (flipping the whole view for mirror/glass rigs), then the
//! content is translated within the already-flipped frame. Applying them the
//! other way round would invert scroll direction under a vertical flip.

use crate::script::Paragraph;

pub mod mock;

/// Per-axis mirror flags. An absolute setting, not a toggle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flip {
    pub x: bool,
    pub y: bool,
}

impl Flip {
    /// Horizontal scale multiplier, `1` or `-1`.
    pub fn scale_x(self) -> f64 {
        if self.x { -1.0 } else { 1.0 }
    }

    /// Vertical scale multiplier, `1` or `-1`.
    pub fn scale_y(self) -> f64 {
        if self.y { -1.0 } else { 1.0 }
    }
}

/// Mirror transform on the outer viewport, anchored at center.
/// Carries only scale factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerTransform {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for ContainerTransform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Scroll transform on the inner content. Carries only a vertical
/// translation; content moves up as the position grows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentTransform {
    pub translate_y: f64,
}

/// Compute both transforms for the current flip state and scroll position.
///
/// Kept as a single function so callers cannot apply one without the other or
/// in the wrong order.
pub fn view_transforms(flip: Flip, position: f64) -> (ContainerTransform, ContentTransform) {
    (
        ContainerTransform {
            scale_x: flip.scale_x(),
            scale_y: flip.scale_y(),
        },
        ContentTransform {
            translate_y: -position,
        },
    )
}

/// Fixed fallback chain appended to every requested family.
pub fn font_stack(family: &str) -> String {
    format!("{family}, Verdana, Arial, sans-serif")
}

/// Host-side layout and paint target.
///
/// Implementations materialize the script into stacked blocks and answer the
/// two height reads the core needs. `content_height` is only meaningful after
/// the host has completed a layout pass for the most recent structural or
/// font change.
pub trait RenderSurface {
    /// Fully replace the rendered blocks: one block per paragraph, stacked in
    /// order, each at `font_size_px`. No stale blocks may survive.
    fn rebuild(&mut self, paragraphs: &[Paragraph], font_size_px: u32);

    /// Restyle the existing blocks at `font_size_px` without structural
    /// changes.
    fn apply_font_size(&mut self, font_size_px: u32);

    /// Apply a full font stack (family plus fallback chain).
    fn set_font_stack(&mut self, stack: &str);

    /// Toggle the uppercase text transform. Cosmetic; affects position math
    /// only through the actual rendered height.
    fn set_uppercase(&mut self, enabled: bool);

    /// Apply both view transforms, container scale first.
    fn apply_view(&mut self, container: ContainerTransform, content: ContentTransform);

    /// Total rendered height of all blocks, in px.
    fn content_height(&self) -> f64;

    /// Fixed visible height of the clipping viewport, in px.
    fn viewport_height(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_carries_only_scale_content_only_translate() {
        let (container, content) = view_transforms(Flip { x: false, y: true }, 100.0);
        assert_eq!(container.scale_x, 1.0);
        assert_eq!(container.scale_y, -1.0);
        assert_eq!(content.translate_y, -100.0);
    }

    #[test]
    fn font_stack_appends_fixed_fallbacks() {
        assert_eq!(
            font_stack("OpenDyslexic"),
            "OpenDyslexic, Verdana, Arial, sans-serif"
        );
    }
}
