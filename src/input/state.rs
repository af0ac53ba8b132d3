//! Input state machine - one value describes the gesture in progress.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (left press inside the committed selection)
//! Idle -> Panning     (press accepted by the pan policy)
//! Idle -> Selecting   (any other left press, unless vetoed)
//!
//! Any  -> Idle        (release of the gesture's button, or capture lost)
//! ```

use crate::events::MouseButton;
use crate::geometry::{Point, Rect};

/// Pointer offset inside the selection at the moment it was picked up.
///
/// Moving the selection by pointer delta (rather than snapping its origin to
/// the pointer) means origin = pointer - offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Image-space offset from the selection origin to the grab point
    pub offset: Point,
}

impl DragSession {
    pub fn grab(rect: &Rect, image_point: Point) -> Self {
        Self {
            offset: image_point - rect.origin(),
        }
    }

    /// Selection origin that keeps the grab point under `image_point`,
    /// floored at zero on both axes.
    pub fn origin_for(&self, image_point: Point) -> Point {
        (image_point - self.offset).max_zero()
    }
}

/// The gesture the controller is currently tracking.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No button held
    #[default]
    Idle,

    /// Scrolling the view
    Panning {
        /// Last pointer position (screen) for delta calculation
        last_pos: Point,
        /// Button holding the pan; either left or middle
        button: MouseButton,
    },

    /// Drawing a new selection
    Selecting {
        /// Image-space press location
        anchor: Point,
        /// Nascent rectangle, not yet committed
        nascent: Rect,
    },

    /// Moving the committed selection
    Dragging(DragSession),
}

/// Public, data-free view of [`InputState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Panning,
    Selecting,
    Dragging,
}

impl InputState {
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Panning { .. } => InteractionMode::Panning,
            Self::Selecting { .. } => InteractionMode::Selecting,
            Self::Dragging(_) => InteractionMode::Dragging,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pos: Point, button: MouseButton) {
        *self = Self::Panning {
            last_pos: pos,
            button,
        };
    }

    pub fn start_selecting(&mut self, anchor: Point) {
        *self = Self::Selecting {
            anchor,
            nascent: Rect::new(anchor.x, anchor.y, 0.0, 0.0),
        };
    }

    pub fn start_dragging(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    /// Button whose release ends the gesture. Selections and drags only
    /// start from the left button.
    pub fn button(&self) -> Option<MouseButton> {
        match self {
            Self::Idle => None,
            Self::Panning { button, .. } => Some(*button),
            Self::Selecting { .. } | Self::Dragging(_) => Some(MouseButton::Left),
        }
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        match self {
            Self::Dragging(session) => Some(*session),
            _ => None,
        }
    }

    pub fn last_mouse_pos(&self) -> Option<Point> {
        match self {
            Self::Panning { last_pos, .. } => Some(*last_pos),
            _ => None,
        }
    }

    pub fn update_last_mouse_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos, .. } = self {
            *last_pos = pos;
        }
    }

    pub fn selection_anchor(&self) -> Option<Point> {
        match self {
            Self::Selecting { anchor, .. } => Some(*anchor),
            _ => None,
        }
    }

    /// The rectangle being drawn, if selecting
    pub fn nascent_rect(&self) -> Option<Rect> {
        match self {
            Self::Selecting { nascent, .. } => Some(*nascent),
            _ => None,
        }
    }

    pub fn set_nascent_rect(&mut self, rect: Rect) {
        if let Self::Selecting { nascent, .. } = self {
            *nascent = rect;
        }
    }
}
