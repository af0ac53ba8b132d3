//! Viewport geometry - zoom, scroll offset, viewport and image sizes.
//!
//! `ViewportState` is the single source of truth the coordinate converter
//! reads from. Everything derived from it (virtual size, centring origin,
//! scroll limits) is recomputed on demand rather than cached, because the
//! host may resize the viewport or swap the image at any moment.
//!
//! The scroll offset is the image-space point aligned with the viewport's
//! top-left corner. It is kept within `[0, image - viewport / scale]` per
//! axis, which always leaves image pixels on screen.

use crate::constants::ACTUAL_SIZE_ZOOM;
use crate::error::{ViewError, ViewResult};
use crate::geometry::{PixelSize, Point, Rect};
use crate::input::coords::{CoordinateContext, CoordinateConverter};

/// Convert a zoom percentage into a scale factor, rejecting non-positive values.
pub fn zoom_scale(zoom: f32) -> ViewResult<f32> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom / 100.0)
    } else {
        Err(ViewError::InvalidZoom(zoom))
    }
}

/// Round half-up to whole device pixels.
#[inline]
fn round_half_up(value: f32) -> u32 {
    (value + 0.5).floor().max(0.0) as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    viewport_size: PixelSize,
    image_size: PixelSize,
    /// Zoom percentage, always strictly positive
    zoom: f32,
    scroll_offset: Point,
}

impl ViewportState {
    /// Unzoomed view of `image_size` scrolled to the top-left.
    pub fn new(viewport_size: PixelSize, image_size: PixelSize) -> Self {
        Self {
            viewport_size,
            image_size,
            zoom: ACTUAL_SIZE_ZOOM as f32,
            scroll_offset: Point::ZERO,
        }
    }

    pub fn viewport_size(&self) -> PixelSize {
        self.viewport_size
    }

    pub fn image_size(&self) -> PixelSize {
        self.image_size
    }

    /// Current zoom percentage.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current zoom as a scale factor (1.0 = actual size).
    #[inline]
    pub fn scale(&self) -> f32 {
        self.zoom / 100.0
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    /// Rendered image size at the current zoom.
    pub fn virtual_size(&self) -> PixelSize {
        self.virtual_size_for_scale(self.scale())
    }

    /// Rendered image size at an arbitrary zoom percentage.
    pub fn virtual_size_at(&self, zoom: f32) -> ViewResult<PixelSize> {
        Ok(self.virtual_size_for_scale(zoom_scale(zoom)?))
    }

    fn virtual_size_for_scale(&self, scale: f32) -> PixelSize {
        PixelSize::new(
            round_half_up(self.image_size.width as f32 * scale),
            round_half_up(self.image_size.height as f32 * scale),
        )
    }

    /// Screen position of the image's top-left corner before scrolling.
    ///
    /// Non-zero on an axis where the rendered image is narrower than the
    /// viewport, so the image sits centred instead of pinned top-left.
    pub fn viewport_origin(&self) -> Point {
        let virtual_size = self.virtual_size();
        let centre = |view: u32, rendered: u32| {
            if rendered < view {
                (view - rendered) as f32 / 2.0
            } else {
                0.0
            }
        };
        Point::new(
            centre(self.viewport_size.width, virtual_size.width),
            centre(self.viewport_size.height, virtual_size.height),
        )
    }

    /// Largest scroll offset that still fills the viewport with image.
    pub fn max_scroll_offset(&self) -> Point {
        let scale = self.scale();
        let limit = |image: u32, view: u32| (image as f32 - view as f32 / scale).max(0.0);
        Point::new(
            limit(self.image_size.width, self.viewport_size.width),
            limit(self.image_size.height, self.viewport_size.height),
        )
    }

    fn clamp_scroll_offset(&mut self) {
        let max = self.max_scroll_offset();
        self.scroll_offset = Point::new(
            self.scroll_offset.x.clamp(0.0, max.x),
            self.scroll_offset.y.clamp(0.0, max.y),
        );
    }

    /// Set the zoom percentage, then re-clamp the scroll offset.
    pub fn set_zoom(&mut self, zoom: f32) -> ViewResult<()> {
        zoom_scale(zoom)?;
        self.zoom = zoom;
        self.clamp_scroll_offset();
        Ok(())
    }

    /// Change zoom while keeping the image point under `anchor` (screen) fixed.
    pub fn zoom_at(&mut self, zoom: f32, anchor: Point) -> ViewResult<()> {
        zoom_scale(zoom)?;
        let pinned = self.screen_to_image(anchor, false);
        self.zoom = zoom;
        let origin = self.viewport_origin();
        self.scroll_offset = pinned - (anchor - origin).unscale(self.scale());
        self.clamp_scroll_offset();
        Ok(())
    }

    /// Largest zoom at which the whole image fits inside the viewport.
    pub fn fit_zoom(&self) -> ViewResult<f32> {
        if self.image_size.is_empty() {
            return Err(ViewError::InvalidArgument("image has no pixels"));
        }
        if self.viewport_size.is_empty() {
            return Err(ViewError::InvalidArgument("viewport has no area"));
        }
        let horizontal = self.viewport_size.width as f32 / self.image_size.width as f32;
        let vertical = self.viewport_size.height as f32 / self.image_size.height as f32;
        Ok(horizontal.min(vertical) * 100.0)
    }

    /// Zoom so the whole image is visible. Returns the applied zoom.
    pub fn zoom_to_fit(&mut self) -> ViewResult<f32> {
        let zoom = self.fit_zoom()?;
        self.set_zoom(zoom)?;
        Ok(zoom)
    }

    /// Scroll so `offset` (image space) is at the viewport's top-left, clamped.
    pub fn scroll_to(&mut self, offset: Point) {
        self.scroll_offset = offset;
        self.clamp_scroll_offset();
    }

    /// Scroll by a screen-space delta, as a pan gesture does. Dragging the
    /// content right moves the offset left.
    pub fn scroll_by(&mut self, screen_delta: Point) {
        let image_delta = CoordinateConverter::delta_screen_to_image(screen_delta, self.scale());
        self.scroll_to(self.scroll_offset - image_delta);
    }

    /// Scroll so `image_point` lands in the middle of the viewport.
    pub fn center_at(&mut self, image_point: Point) {
        let half_view = Point::new(
            self.viewport_size.width as f32 / 2.0,
            self.viewport_size.height as f32 / 2.0,
        )
        .unscale(self.scale());
        self.scroll_to(image_point - half_view);
    }

    pub fn set_viewport_size(&mut self, size: PixelSize) {
        self.viewport_size = size;
        self.clamp_scroll_offset();
    }

    pub fn set_image_size(&mut self, size: PixelSize) {
        self.image_size = size;
        self.clamp_scroll_offset();
    }

    /// Image-space rectangle currently on screen.
    pub fn visible_image_region(&self) -> Rect {
        let view = Point::new(
            self.viewport_size.width as f32,
            self.viewport_size.height as f32,
        )
        .unscale(self.scale());
        let region = Rect::new(self.scroll_offset.x, self.scroll_offset.y, view.x, view.y);
        region.intersect(&Rect::from(self.image_size))
    }

    pub fn image_to_screen(&self, image_point: Point) -> Point {
        CoordinateConverter::image_to_screen(image_point, &CoordinateContext::new(self))
    }

    pub fn screen_to_image(&self, screen_point: Point, constrain: bool) -> Point {
        CoordinateConverter::screen_to_image(screen_point, &CoordinateContext::new(self), constrain)
    }

    pub fn image_rect_to_screen(&self, rect: Rect) -> Rect {
        CoordinateConverter::image_rect_to_screen(rect, &CoordinateContext::new(self))
    }
}
