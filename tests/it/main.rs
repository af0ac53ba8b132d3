//! Single test binary entry point.
//!
//! Structure:
//! - helpers: builders and gesture shortcuts shared by the tests
//! - integration: multi-event gesture scenarios driven through `ImageBox`
//! - unit: single-component tests against the public API

mod helpers;
mod unit;
