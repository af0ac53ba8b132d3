//! Pointer input handling for the image box.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the gesture in progress. A press picks exactly one gesture (drag, pan or
//! select) and a release always returns to idle, so the three can never
//! overlap.
//!
//! ## Modules
//!
//! - `coords` - Screen/image coordinate conversion
//! - `state` - Input state machine enum and drag session
//! - `mouse_down` - Press handling (gesture selection, selection veto)
//! - `drag` - Move handling (drag, grow selection, pan, hover cursor)
//! - `mouse_up` - Release handling (commit selection, end gestures)
//! - `transform` - Wheel and zoom requests

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use state::{DragSession, InputState, InteractionMode};
