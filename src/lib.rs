//! Headless zoom, pan and selection core for image viewing widgets.
//!
//! The crate is built from three layers:
//!
//! - [`ZoomLevels`] - the ordered ledger of selectable zoom percentages
//! - [`ViewportState`] and [`input::coords`] - the screen/image transform
//! - [`ImageBox`] - the pointer state machine that pans, draws a selection
//!   or drags the committed one
//!
//! Hosts feed [`PointerEvent`]s in, read the selection and transform back,
//! and drain [`ImageBoxEvent`] notifications to know when to repaint.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod geometry;
pub mod image_box;
pub mod input;
pub mod logging;
pub mod perf;
pub mod policy;
pub mod viewport;
pub mod zoom_levels;

pub use config::{ImageBoxSettings, PanMode};
pub use error::{SettingsError, ViewError, ViewResult};
pub use events::{
    Cursor, ImageBoxEvent, ModifierKey, Modifiers, MouseButton, PointerEvent, PointerEventSource,
};
pub use geometry::{PixelSize, Point, Rect};
pub use image_box::ImageBox;
pub use input::{DragSession, InteractionMode};
pub use policy::{DefaultSelectionPolicy, SelectionPolicy, SelectionRequest};
pub use viewport::ViewportState;
pub use zoom_levels::ZoomLevels;
