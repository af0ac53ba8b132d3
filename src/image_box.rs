//! The interaction controller.
//!
//! `ImageBox` owns one viewport, one zoom ledger, one committed selection
//! and the gesture in progress. Pointer handling is split across the
//! `input` modules; this file holds construction, host-facing accessors,
//! and the notification queue.

use crate::config::ImageBoxSettings;
use crate::error::ViewResult;
use crate::events::{Cursor, ImageBoxEvent, PointerEvent, PointerEventSource};
use crate::geometry::{PixelSize, Point, Rect};
use crate::input::{DragSession, InputState, InteractionMode};
use crate::policy::{DefaultSelectionPolicy, SelectionPolicy};
use crate::viewport::ViewportState;
use crate::zoom_levels::ZoomLevels;
use tracing::debug;

pub struct ImageBox {
    pub(crate) viewport: ViewportState,
    pub(crate) settings: ImageBoxSettings,
    pub(crate) input_state: InputState,
    /// Committed selection in image space, [`Rect::EMPTY`] when none
    pub(crate) selection: Rect,
    pub(crate) cursor: Cursor,
    pub(crate) policy: Box<dyn SelectionPolicy>,
    pending_events: Vec<ImageBoxEvent>,
}

impl ImageBox {
    /// Image box with default settings at actual size.
    pub fn new(viewport_size: PixelSize, image_size: PixelSize) -> Self {
        let settings = ImageBoxSettings::default();
        Self {
            viewport: ViewportState::new(viewport_size, image_size),
            policy: Box::new(DefaultSelectionPolicy::from(&settings)),
            settings,
            input_state: InputState::default(),
            selection: Rect::EMPTY,
            cursor: Cursor::Default,
            pending_events: Vec::new(),
        }
    }

    /// Image box configured from `settings`; the pan policy is derived from them.
    pub fn with_settings(
        settings: ImageBoxSettings,
        viewport_size: PixelSize,
        image_size: PixelSize,
    ) -> ViewResult<Self> {
        settings.validate()?;
        let mut viewport = ViewportState::new(viewport_size, image_size);
        viewport.set_zoom(settings.initial_zoom as f32)?;
        Ok(Self {
            viewport,
            policy: Box::new(DefaultSelectionPolicy::from(&settings)),
            settings,
            input_state: InputState::default(),
            selection: Rect::EMPTY,
            cursor: Cursor::Default,
            pending_events: Vec::new(),
        })
    }

    /// Replace the pan/selection policy.
    pub fn with_policy(mut self, policy: impl SelectionPolicy + 'static) -> Self {
        self.set_policy(policy);
        self
    }

    pub fn set_policy(&mut self, policy: impl SelectionPolicy + 'static) {
        self.policy = Box::new(policy);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn settings(&self) -> &ImageBoxSettings {
        &self.settings
    }

    pub fn zoom_levels(&self) -> &ZoomLevels {
        &self.settings.zoom_levels
    }

    pub fn zoom_levels_mut(&mut self) -> &mut ZoomLevels {
        &mut self.settings.zoom_levels
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    /// The committed selection; [`Rect::EMPTY`] when nothing is selected.
    pub fn selection(&self) -> Rect {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// The rectangle being drawn, while a selection gesture is active.
    pub fn nascent_selection(&self) -> Option<Rect> {
        self.input_state.nascent_rect()
    }

    pub fn mode(&self) -> InteractionMode {
        self.input_state.mode()
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.input_state.drag_session()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn image_to_screen(&self, image_point: Point) -> Point {
        self.viewport.image_to_screen(image_point)
    }

    pub fn screen_to_image(&self, screen_point: Point, constrain: bool) -> Point {
        self.viewport.screen_to_image(screen_point, constrain)
    }

    /// Where to draw the selection overlay, if there is one.
    pub fn selection_on_screen(&self) -> Option<Rect> {
        self.has_selection()
            .then(|| self.viewport.image_rect_to_screen(self.selection))
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    pub(crate) fn notify(&mut self, event: ImageBoxEvent) {
        self.pending_events.push(event);
    }

    pub(crate) fn request_repaint(&mut self) {
        self.notify(ImageBoxEvent::RepaintRequested);
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.notify(ImageBoxEvent::CursorChanged(cursor));
        }
    }

    /// Hand every queued notification to the host, oldest first.
    pub fn drain_events(&mut self) -> Vec<ImageBoxEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Replace the committed selection, notifying only on an actual change.
    pub(crate) fn replace_selection(&mut self, rect: Rect) {
        if self.selection == rect {
            return;
        }
        self.selection = rect;
        self.notify(ImageBoxEvent::SelectionChanged(rect));
        self.request_repaint();
    }

    pub fn clear_selection(&mut self) {
        self.replace_selection(Rect::EMPTY);
    }

    /// Select the whole image.
    pub fn select_all(&mut self) {
        let image = Rect::from(self.viewport.image_size());
        if !image.is_empty() {
            self.replace_selection(image);
        }
    }

    // ------------------------------------------------------------------------
    // Geometry changes from the host
    // ------------------------------------------------------------------------

    pub fn set_viewport_size(&mut self, size: PixelSize) {
        self.viewport.set_viewport_size(size);
        self.request_repaint();
    }

    /// A different image was loaded: the old selection no longer means
    /// anything, so it is cleared along with any gesture in progress.
    pub fn set_image_size(&mut self, size: PixelSize) {
        self.cancel_gesture();
        self.viewport.set_image_size(size);
        self.clear_selection();
        self.set_cursor(Cursor::Default);
        self.request_repaint();
        debug!(width = size.width, height = size.height, "Image size changed");
    }

    // ------------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------------

    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button,
                modifiers,
            } => self.handle_mouse_down(position, button, modifiers),
            PointerEvent::Move { position, .. } => self.handle_mouse_move(position),
            PointerEvent::Up {
                position, button, ..
            } => self.handle_mouse_up(position, button),
            PointerEvent::Wheel {
                position,
                delta,
                modifiers,
            } => self.handle_wheel(position, delta, modifiers),
            PointerEvent::CaptureLost => self.handle_capture_lost(),
        }
    }

    /// Dispatch every event the source yields. Returns how many were handled.
    pub fn pump(&mut self, source: &mut impl PointerEventSource) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }
}
