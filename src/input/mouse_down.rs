//! Press handling - decide which gesture a press starts.
//!
//! Priority order:
//! 1. Left press inside the committed selection picks it up (drag).
//! 2. Press accepted by the pan policy starts a pan.
//! 3. Otherwise a left press starts a selection, unless vetoed.

use crate::events::{Cursor, ImageBoxEvent, Modifiers, MouseButton};
use crate::geometry::Point;
use crate::image_box::ImageBox;
use crate::input::DragSession;
use crate::policy::SelectionRequest;
use crate::profile_scope;
use tracing::{debug, trace};

impl ImageBox {
    pub fn handle_mouse_down(&mut self, position: Point, button: MouseButton, modifiers: Modifiers) {
        profile_scope!("handle_mouse_down");

        // A second button pressed mid-gesture does not start another one
        if !self.input_state.is_idle() {
            trace!(?button, mode = ?self.input_state.mode(), "Press ignored during gesture");
            return;
        }

        let image_point = self.viewport.screen_to_image(position, false);

        if button == MouseButton::Left && self.selection.contains(image_point) {
            let session = DragSession::grab(&self.selection, image_point);
            debug!(offset = ?session.offset, "Selection picked up");
            self.input_state.start_dragging(session);
            self.set_cursor(Cursor::Move);
            return;
        }

        if self.policy.is_pan_gesture(button, modifiers) {
            debug!(?button, "Pan started");
            self.input_state.start_panning(position, button);
            self.set_cursor(Cursor::Panning);
            self.notify(ImageBoxEvent::PanStarted);
            return;
        }

        let request = SelectionRequest {
            image_point,
            button,
            modifiers,
            committed: self.selection,
        };
        if self.may_start_selection(&request) {
            debug!(anchor = ?image_point, "Selection started");
            self.input_state.start_selecting(image_point);
        }
    }

    /// Selection veto. A press inside the committed selection is never
    /// allowed to start a nested selection; the host policy gets the last word.
    fn may_start_selection(&self, request: &SelectionRequest) -> bool {
        if !self.settings.allow_selection || request.button != MouseButton::Left {
            return false;
        }
        // Not reached from handle_mouse_down, which turns inside presses into
        // a drag first
        if request.committed.contains(request.image_point) {
            trace!("Selection start cancelled: press inside committed selection");
            return false;
        }
        let allowed = self.policy.allow_selection_start(request);
        if !allowed {
            debug!(point = ?request.image_point, "Selection start vetoed by policy");
        }
        allowed
    }
}
