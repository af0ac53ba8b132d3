//! Timing instrumentation for pointer handlers.
//!
//! Pointer moves arrive at display rate while a gesture is active, so the
//! handlers are timed when the `profiling` feature is on:
//!
//! ```toml
//! [dependencies]
//! zoombox = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_mouse_move(&mut self, position: Point) {
//!     profile_scope!("handle_mouse_move");
//!     // ... event handling code ...
//! }
//! ```

use crate::constants::POINTER_HANDLER_BUDGET_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_pointer_handler($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer: measures from construction to drop and warns when the scope
/// ran longer than its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the pointer handler budget as threshold.
    pub fn for_pointer_handler(name: &'static str) -> Self {
        Self::new(name, POINTER_HANDLER_BUDGET_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn is_over_budget(&self) -> bool {
        self.elapsed_ms() > self.threshold_ms
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                "Slow operation: {} took {:.2}ms (threshold: {:.2}ms)",
                self.name, elapsed, self.threshold_ms
            );
        } else {
            trace!("{}: {:.3}ms", self.name, elapsed);
        }
    }
}
