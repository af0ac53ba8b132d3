//! Coordinate conversion between screen and image space.
//!
//! This module holds the one copy of the transform formulas:
//!
//! ```text
//! screen = image * scale - scroll_offset * scale + origin
//! image  = (screen - origin) / scale + scroll_offset
//! ```
//!
//! `origin` is the centring offset used when the rendered image is smaller
//! than the viewport on an axis.

use crate::geometry::{Point, Rect};
use crate::viewport::ViewportState;

/// Context needed for coordinate conversions
pub struct CoordinateContext<'a> {
    pub scroll_offset: Point,
    pub origin: Point,
    pub scale: f32,
    pub viewport: &'a ViewportState,
}

impl<'a> CoordinateContext<'a> {
    /// Snapshot the derived values of a viewport
    #[inline]
    pub fn new(viewport: &'a ViewportState) -> Self {
        Self {
            scroll_offset: viewport.scroll_offset(),
            origin: viewport.viewport_origin(),
            scale: viewport.scale(),
            viewport,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert image position to screen position
    #[inline]
    pub fn image_to_screen(image_pos: Point, ctx: &CoordinateContext<'_>) -> Point {
        image_pos.scale(ctx.scale) - ctx.scroll_offset.scale(ctx.scale) + ctx.origin
    }

    /// Convert screen position to image position.
    ///
    /// With `constrain` the result is clamped to the last valid pixel on each
    /// axis; without it the point may fall outside the image, which is what
    /// drag tracking wants when the pointer leaves the picture.
    pub fn screen_to_image(
        screen_pos: Point,
        ctx: &CoordinateContext<'_>,
        constrain: bool,
    ) -> Point {
        let image_pos = (screen_pos - ctx.origin).unscale(ctx.scale) + ctx.scroll_offset;
        if !constrain {
            return image_pos;
        }

        let size = ctx.viewport.image_size();
        let max_x = size.width.saturating_sub(1) as f32;
        let max_y = size.height.saturating_sub(1) as f32;
        Point::new(image_pos.x.clamp(0.0, max_x), image_pos.y.clamp(0.0, max_y))
    }

    /// Convert an image-space rectangle to its on-screen footprint
    pub fn image_rect_to_screen(rect: Rect, ctx: &CoordinateContext<'_>) -> Rect {
        let origin = Self::image_to_screen(rect.origin(), ctx);
        Rect::new(
            origin.x,
            origin.y,
            rect.width * ctx.scale,
            rect.height * ctx.scale,
        )
    }

    /// Convert a delta from screen to image (for pan operations)
    #[inline]
    pub fn delta_screen_to_image(delta: Point, scale: f32) -> Point {
        delta.unscale(scale)
    }

    /// Convert a delta from image to screen
    #[inline]
    pub fn delta_image_to_screen(delta: Point, scale: f32) -> Point {
        delta.scale(scale)
    }
}
