//! Move handling - drag the selection, grow a new one, pan, or update the
//! hover cursor.
//!
//! ## Performance Notes
//!
//! Moves arrive at display rate during a gesture. Each branch touches only
//! the state its gesture owns and converts the pointer position once.

use crate::events::{Cursor, ImageBoxEvent};
use crate::geometry::{Point, Rect};
use crate::image_box::ImageBox;
use crate::input::InteractionMode;
use crate::profile_scope;
use tracing::trace;

impl ImageBox {
    pub fn handle_mouse_move(&mut self, position: Point) {
        profile_scope!("handle_mouse_move");

        match self.input_state.mode() {
            InteractionMode::Idle => self.update_hover_cursor(position),
            InteractionMode::Dragging => self.drag_selection(position),
            InteractionMode::Selecting => self.grow_selection(position),
            InteractionMode::Panning => self.pan(position),
        }
    }

    /// Show the move affordance while hovering over the committed selection.
    ///
    /// Uses the same unconstrained point as a press, so `Move` is shown
    /// exactly where pressing picks the selection up.
    pub(crate) fn update_hover_cursor(&mut self, position: Point) {
        let image_point = self.viewport.screen_to_image(position, false);
        let cursor = if self.selection.contains(image_point) {
            Cursor::Move
        } else {
            Cursor::Default
        };
        self.set_cursor(cursor);
    }

    fn drag_selection(&mut self, position: Point) {
        let Some(session) = self.input_state.drag_session() else {
            return;
        };

        let image_point = self.viewport.screen_to_image(position, true);
        let mut origin = session.origin_for(image_point);

        if self.settings.clamp_drag_to_image {
            let image = self.viewport.image_size();
            origin.x = origin.x.min((image.width as f32 - self.selection.width).max(0.0));
            origin.y = origin.y.min((image.height as f32 - self.selection.height).max(0.0));
        }

        let moved = self.selection.with_origin(origin);
        if moved != self.selection {
            trace!(x = origin.x, y = origin.y, "Selection dragged");
            self.selection = moved;
            self.notify(ImageBoxEvent::SelectionChanged(moved));
        }
        self.request_repaint();
    }

    fn grow_selection(&mut self, position: Point) {
        let Some(anchor) = self.input_state.selection_anchor() else {
            return;
        };
        let rect = self.nascent_between(anchor, position);
        self.input_state.set_nascent_rect(rect);
        self.request_repaint();
    }

    /// Two-corner rectangle from the anchor to the pointer, clipped to the
    /// image when so configured.
    pub(crate) fn nascent_between(&self, anchor: Point, position: Point) -> Rect {
        let current = self.viewport.screen_to_image(position, false);
        let rect = Rect::from_corners(anchor, current);
        if self.settings.limit_selection_to_image {
            rect.intersect(&Rect::from(self.viewport.image_size()))
        } else {
            rect
        }
    }

    fn pan(&mut self, position: Point) {
        let Some(last_pos) = self.input_state.last_mouse_pos() else {
            return;
        };
        let before = self.viewport.scroll_offset();
        self.viewport.scroll_by(position - last_pos);
        self.input_state.update_last_mouse_pos(position);
        if self.viewport.scroll_offset() != before {
            self.request_repaint();
        }
    }
}
