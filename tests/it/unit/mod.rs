//! Unit tests for zoombox.

mod perf_tests;
