//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestImageBoxBuilder` - Builder pattern for image boxes in a known state
//! - Gesture shortcuts (`press`, `move_to`, `release`, `drag_gesture`)
//! - Assertion helpers for rectangles and events

#![allow(dead_code)]

use zoombox::{
    ImageBox, ImageBoxEvent, ImageBoxSettings, Modifiers, MouseButton, PixelSize, Point, Rect,
};

// ============================================================================
// TestImageBoxBuilder - Builder pattern for creating test image boxes
// ============================================================================

/// Builder for image boxes in a known state.
///
/// Defaults: 400x300 viewport, 800x600 image, 100% zoom, no scroll. With
/// these, screen and image coordinates coincide.
///
/// # Example
/// ```ignore
/// let ib = TestImageBoxBuilder::new()
///     .with_selection(Rect::new(10.0, 10.0, 20.0, 20.0))
///     .with_zoom(200.0)
///     .build();
/// ```
pub struct TestImageBoxBuilder {
    viewport: PixelSize,
    image: PixelSize,
    settings: ImageBoxSettings,
    zoom: Option<f32>,
    scroll: Option<Point>,
    selection: Option<Rect>,
}

impl Default for TestImageBoxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestImageBoxBuilder {
    pub fn new() -> Self {
        Self {
            viewport: PixelSize::new(400, 300),
            image: PixelSize::new(800, 600),
            settings: ImageBoxSettings::default(),
            zoom: None,
            scroll: None,
            selection: None,
        }
    }

    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = PixelSize::new(width, height);
        self
    }

    pub fn with_image(mut self, width: u32, height: u32) -> Self {
        self.image = PixelSize::new(width, height);
        self
    }

    pub fn with_settings(mut self, settings: ImageBoxSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Scroll offset in image space, applied after zoom.
    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll = Some(Point::new(x, y));
        self
    }

    /// Commit a selection by drawing it with the left button.
    pub fn with_selection(mut self, rect: Rect) -> Self {
        self.selection = Some(rect);
        self
    }

    pub fn build(self) -> ImageBox {
        let mut ib = ImageBox::with_settings(self.settings, self.viewport, self.image)
            .expect("test settings are valid");

        // Draw the selection at 100% with no scroll so screen == image space
        if let Some(rect) = self.selection {
            let start = ib.image_to_screen(rect.origin());
            let end = ib.image_to_screen(Point::new(rect.right(), rect.bottom()));
            drag_gesture(&mut ib, start, end);
            assert_eq!(ib.selection(), rect, "builder failed to commit selection");
        }
        if let Some(zoom) = self.zoom {
            ib.set_zoom(zoom).expect("test zoom is valid");
        }
        if let Some(scroll) = self.scroll {
            // Pan by the screen delta that reaches the requested offset
            let delta = (ib.viewport().scroll_offset() - scroll).scale(ib.viewport().scale());
            pan_by(&mut ib, delta);
        }

        ib.drain_events();
        ib
    }
}

// ============================================================================
// Gesture shortcuts (screen coordinates)
// ============================================================================

pub fn pos(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

pub fn press(ib: &mut ImageBox, at: Point) {
    ib.handle_mouse_down(at, MouseButton::Left, Modifiers::NONE);
}

pub fn press_with(ib: &mut ImageBox, at: Point, button: MouseButton, modifiers: Modifiers) {
    ib.handle_mouse_down(at, button, modifiers);
}

pub fn move_to(ib: &mut ImageBox, at: Point) {
    ib.handle_mouse_move(at);
}

pub fn release(ib: &mut ImageBox, at: Point) {
    ib.handle_mouse_up(at, MouseButton::Left);
}

pub fn release_with(ib: &mut ImageBox, at: Point, button: MouseButton) {
    ib.handle_mouse_up(at, button);
}

/// Left press at `from`, one move to `to`, release at `to`.
pub fn drag_gesture(ib: &mut ImageBox, from: Point, to: Point) {
    press(ib, from);
    move_to(ib, to);
    release(ib, to);
}

/// Middle-button pan moving the content by `delta` screen pixels.
pub fn pan_by(ib: &mut ImageBox, delta: Point) {
    let start = pos(100.0, 100.0);
    press_with(ib, start, MouseButton::Middle, Modifiers::NONE);
    move_to(ib, start + delta);
    release_with(ib, start + delta, MouseButton::Middle);
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_point_near(actual: Point, expected: Point, tolerance: f32) {
    assert!(
        actual.distance(&expected) <= tolerance,
        "Expected {:?} within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}

/// Selection-changed payloads in the order they were queued.
pub fn selection_changes(events: &[ImageBoxEvent]) -> Vec<Rect> {
    events
        .iter()
        .filter_map(|event| match event {
            ImageBoxEvent::SelectionChanged(rect) => Some(*rect),
            _ => None,
        })
        .collect()
}

pub fn count_repaints(events: &[ImageBoxEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, ImageBoxEvent::RepaintRequested))
        .count()
}
