//! Unit tests for perf module.

use zoombox::perf::ScopedTimer;

#[test]
fn test_scoped_timer_creation() {
    // Dropping under a generous threshold must not panic
    let _timer = ScopedTimer::new("test_op", 1000.0);
}

#[test]
fn test_scoped_timer_elapsed_is_monotonic() {
    let timer = ScopedTimer::for_pointer_handler("handle_mouse_move");

    let first = timer.elapsed_ms();
    let second = timer.elapsed_ms();

    assert!(first >= 0.0);
    assert!(second >= first);
}

#[test]
fn test_zero_threshold_is_over_budget() {
    let timer = ScopedTimer::new("slow_op", 0.0);
    std::thread::sleep(std::time::Duration::from_millis(2));

    assert!(timer.is_over_budget());
}

#[test]
fn test_profile_scope_macro_compiles_in_any_configuration() {
    fn handler() -> u32 {
        zoombox::profile_scope!("handler");
        zoombox::profile_scope!("handler_with_threshold", 5.0);
        7
    }

    assert_eq!(handler(), 7);
}
