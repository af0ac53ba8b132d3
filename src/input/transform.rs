//! Zoom requests and wheel handling.
//!
//! Stepped zoom always goes through the ledger: the current zoom snaps to
//! the nearest level first, then moves one level. Arbitrary zooms (direct
//! assignment, fit) bypass the ledger.

use crate::error::{ViewError, ViewResult};
use crate::events::{ImageBoxEvent, Modifiers};
use crate::geometry::Point;
use crate::image_box::ImageBox;
use tracing::{debug, trace};

/// Zoom changes smaller than this are treated as no change
const ZOOM_EPSILON: f32 = 1.0e-4;

impl ImageBox {
    /// Step to the next larger ledger level, keeping the viewport centre fixed.
    /// Returns whether the zoom changed.
    pub fn zoom_in(&mut self) -> ViewResult<bool> {
        self.step_zoom(true, None)
    }

    /// Step to the next smaller ledger level, keeping the viewport centre fixed.
    pub fn zoom_out(&mut self) -> ViewResult<bool> {
        self.step_zoom(false, None)
    }

    /// Step one level in or out, keeping the image point under `anchor` fixed.
    pub fn zoom_step_at(&mut self, zoom_in: bool, anchor: Point) -> ViewResult<bool> {
        self.step_zoom(zoom_in, Some(anchor))
    }

    /// Direct assignment of an arbitrary positive zoom percentage.
    pub fn set_zoom(&mut self, zoom: f32) -> ViewResult<bool> {
        self.apply_zoom(zoom, None)
    }

    /// Zoom so the whole image fits the viewport.
    pub fn zoom_to_fit(&mut self) -> ViewResult<bool> {
        let zoom = self.viewport.fit_zoom()?;
        self.apply_zoom(zoom, None)
    }

    fn step_zoom(&mut self, zoom_in: bool, anchor: Option<Point>) -> ViewResult<bool> {
        let current = self.viewport.zoom().round().max(1.0) as u32;
        let levels = &self.settings.zoom_levels;
        let target = if zoom_in {
            levels.next_zoom(current)
        } else {
            levels.previous_zoom(current)
        };
        let Some(target) = target else {
            return Err(ViewError::InvalidArgument("zoom level ledger is empty"));
        };
        self.apply_zoom(target as f32, anchor)
    }

    fn apply_zoom(&mut self, zoom: f32, anchor: Option<Point>) -> ViewResult<bool> {
        if (zoom - self.viewport.zoom()).abs() < ZOOM_EPSILON {
            return Ok(false);
        }

        let anchor = anchor.unwrap_or_else(|| {
            let view = self.viewport.viewport_size();
            Point::new(view.width as f32 / 2.0, view.height as f32 / 2.0)
        });
        self.viewport.zoom_at(zoom, anchor)?;

        debug!(zoom, "Zoom changed");
        self.notify(ImageBoxEvent::ZoomChanged(zoom));
        self.request_repaint();
        Ok(true)
    }

    /// Wheel: zoom around the pointer when zooming is allowed and the
    /// configured modifier (if any) is held; otherwise scroll vertically.
    pub fn handle_wheel(&mut self, position: Point, delta: f32, modifiers: Modifiers) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }

        let zoom_gesture = self.settings.allow_zoom
            && self
                .settings
                .wheel_zoom_modifier
                .is_none_or(|key| modifiers.contains(key));

        if zoom_gesture {
            if let Err(e) = self.zoom_step_at(delta > 0.0, position) {
                trace!("Wheel zoom ignored: {}", e);
            }
            return;
        }

        let before = self.viewport.scroll_offset();
        let step = self.settings.wheel_scroll_step as f32;
        self.viewport.scroll_by(Point::new(0.0, delta * step));
        if self.viewport.scroll_offset() != before {
            self.request_repaint();
        }
    }
}
