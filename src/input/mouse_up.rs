//! Release handling - finish the gesture and commit a drawn selection.

use crate::events::{Cursor, ImageBoxEvent, MouseButton};
use crate::geometry::Point;
use crate::image_box::ImageBox;
use crate::input::InputState;
use crate::profile_scope;
use tracing::{debug, trace};

impl ImageBox {
    /// Finish the gesture started by `button`. Releasing any other button,
    /// or releasing while idle, changes nothing.
    pub fn handle_mouse_up(&mut self, position: Point, button: MouseButton) {
        profile_scope!("handle_mouse_up");

        if self.input_state.button() != Some(button) {
            trace!(?button, mode = ?self.input_state.mode(), "Release ignored");
            return;
        }

        match std::mem::take(&mut self.input_state) {
            InputState::Idle => return,
            InputState::Panning { .. } => {
                debug!("Pan ended");
                self.notify(ImageBoxEvent::PanEnded);
            }
            InputState::Selecting { anchor, .. } => {
                let rect = self.nascent_between(anchor, position);
                if rect.is_empty() {
                    // Nothing drawn: the previous selection stays as it was
                    debug!("Empty selection discarded");
                } else {
                    debug!(?rect, "Selection committed");
                    self.replace_selection(rect);
                }
                // Erase the rubber band
                self.request_repaint();
            }
            InputState::Dragging(_) => {
                debug!(selection = ?self.selection, "Selection dropped");
            }
        }

        self.update_hover_cursor(position);
    }

    /// Abort the gesture in progress without committing anything new.
    ///
    /// A drawn-but-uncommitted rectangle is discarded; a dragged selection
    /// stays where it was last moved to, still under the pointer, so the
    /// move cursor is kept until the next pointer move re-evaluates it.
    pub fn cancel_gesture(&mut self) {
        match std::mem::take(&mut self.input_state) {
            InputState::Idle => return,
            InputState::Panning { .. } => {
                self.notify(ImageBoxEvent::PanEnded);
                self.set_cursor(Cursor::Default);
            }
            InputState::Selecting { .. } => {
                self.request_repaint();
                self.set_cursor(Cursor::Default);
            }
            InputState::Dragging(_) => {}
        }
        debug!("Gesture cancelled");
    }

    pub fn handle_capture_lost(&mut self) {
        self.cancel_gesture();
    }
}
