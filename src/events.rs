//! Events flowing into and out of the controller.
//!
//! Inbound: [`PointerEvent`]s in screen coordinates, delivered one at a time
//! through [`ImageBox::dispatch`](crate::ImageBox::dispatch) or in bulk from a
//! [`PointerEventSource`].
//!
//! Outbound: [`ImageBoxEvent`] notifications queued for the host. They are
//! fire-and-forget; the core never waits on the host.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Mouse buttons the controller distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A single modifier key, used in settings to name a required modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKey {
    Shift,
    Control,
    Alt,
}

/// Modifier keys held while a pointer event happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
    };

    pub fn only(key: ModifierKey) -> Self {
        let mut modifiers = Self::NONE;
        match key {
            ModifierKey::Shift => modifiers.shift = true,
            ModifierKey::Control => modifiers.control = true,
            ModifierKey::Alt => modifiers.alt = true,
        }
        modifiers
    }

    pub fn contains(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Shift => self.shift,
            ModifierKey::Control => self.control,
            ModifierKey::Alt => self.alt,
        }
    }
}

/// Pointer input in screen (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    Move {
        position: Point,
        modifiers: Modifiers,
    },
    Up {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Wheel rotation in lines; positive rolls away from the user.
    Wheel {
        position: Point,
        delta: f32,
        modifiers: Modifiers,
    },
    /// The host lost pointer capture (focus change, window hidden, ...).
    CaptureLost,
}

/// Anything that can hand the controller a stream of pointer events.
pub trait PointerEventSource {
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl<I> PointerEventSource for I
where
    I: Iterator<Item = PointerEvent>,
{
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.next()
    }
}

/// Pointer affordance the host should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cursor {
    #[default]
    Default,
    /// Over the committed selection, which can be picked up and moved
    Move,
    /// A pan gesture is in progress
    Panning,
}

/// Notifications queued for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageBoxEvent {
    /// The committed selection changed; [`Rect::EMPTY`] means cleared
    SelectionChanged(Rect),
    /// Something visible changed
    RepaintRequested,
    CursorChanged(Cursor),
    PanStarted,
    PanEnded,
    /// Zoom percentage after a zoom request was applied
    ZoomChanged(f32),
}
