//! Host policy hooks for gesture disambiguation.
//!
//! The controller decides drag-versus-select on its own (a press inside the
//! committed selection always drags). Everything else - which presses pan and
//! whether a selection may start at all - is asked of a [`SelectionPolicy`].

use crate::config::{ImageBoxSettings, PanMode};
use crate::events::{ModifierKey, Modifiers, MouseButton};
use crate::geometry::{Point, Rect};

/// A selection gesture about to start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRequest {
    /// Press location in image space (not constrained to the image)
    pub image_point: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    /// The committed selection at the time of the press
    pub committed: Rect,
}

pub trait SelectionPolicy {
    /// Whether a press with this button and these modifiers starts a pan.
    fn is_pan_gesture(&self, button: MouseButton, modifiers: Modifiers) -> bool;

    /// Veto hook consulted before a selection gesture starts. Returning
    /// `false` cancels the selection and leaves the controller idle.
    fn allow_selection_start(&self, _request: &SelectionRequest) -> bool {
        true
    }
}

/// Policy driven by [`ImageBoxSettings`]: pans on the configured button(s)
/// or on a left press with the configured modifier held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultSelectionPolicy {
    pub pan_mode: PanMode,
    pub pan_modifier: Option<ModifierKey>,
}

impl Default for DefaultSelectionPolicy {
    fn default() -> Self {
        Self::from(&ImageBoxSettings::default())
    }
}

impl From<&ImageBoxSettings> for DefaultSelectionPolicy {
    fn from(settings: &ImageBoxSettings) -> Self {
        Self {
            pan_mode: settings.pan_mode,
            pan_modifier: settings.pan_modifier,
        }
    }
}

impl SelectionPolicy for DefaultSelectionPolicy {
    fn is_pan_gesture(&self, button: MouseButton, modifiers: Modifiers) -> bool {
        let by_button = match self.pan_mode {
            PanMode::None => false,
            PanMode::Left => button == MouseButton::Left,
            PanMode::Middle => button == MouseButton::Middle,
            PanMode::Both => matches!(button, MouseButton::Left | MouseButton::Middle),
        };
        let by_modifier = button == MouseButton::Left
            && self.pan_modifier.is_some_and(|key| modifiers.contains(key));
        by_button || by_modifier
    }
}
