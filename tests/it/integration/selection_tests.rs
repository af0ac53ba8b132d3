//! Drawing, committing and vetoing selections.

use crate::helpers::*;
use zoombox::{
    ImageBoxEvent, ImageBoxSettings, InteractionMode, Modifiers, MouseButton, Rect,
    SelectionPolicy, SelectionRequest,
};

/// Policy that never pans and refuses selections starting left of `min_x`.
struct LeftMarginVeto {
    min_x: f32,
}

impl SelectionPolicy for LeftMarginVeto {
    fn is_pan_gesture(&self, _button: MouseButton, _modifiers: Modifiers) -> bool {
        false
    }

    fn allow_selection_start(&self, request: &SelectionRequest) -> bool {
        request.image_point.x >= self.min_x
    }
}

#[test]
fn test_draw_and_commit_selection() {
    let mut ib = TestImageBoxBuilder::new().build();

    press(&mut ib, pos(50.0, 40.0));
    assert_eq!(ib.mode(), InteractionMode::Selecting);
    move_to(&mut ib, pos(150.0, 90.0));
    assert_eq!(ib.nascent_selection(), Some(Rect::new(50.0, 40.0, 100.0, 50.0)));
    assert!(!ib.has_selection(), "nothing is committed before release");

    release(&mut ib, pos(150.0, 90.0));

    assert_eq!(ib.mode(), InteractionMode::Idle);
    assert_eq!(ib.nascent_selection(), None);
    assert_eq!(ib.selection(), Rect::new(50.0, 40.0, 100.0, 50.0));
    let events = ib.drain_events();
    assert_eq!(
        selection_changes(&events),
        vec![Rect::new(50.0, 40.0, 100.0, 50.0)]
    );
}

#[test]
fn test_reverse_drag_normalizes() {
    let mut ib = TestImageBoxBuilder::new().build();

    drag_gesture(&mut ib, pos(150.0, 90.0), pos(50.0, 40.0));

    assert_eq!(ib.selection(), Rect::new(50.0, 40.0, 100.0, 50.0));
}

#[test]
fn test_zero_height_gesture_commits_nothing() {
    let mut ib = TestImageBoxBuilder::new()
        .with_selection(Rect::new(10.0, 10.0, 20.0, 20.0))
        .build();

    press(&mut ib, pos(100.0, 100.0));
    move_to(&mut ib, pos(200.0, 100.0));
    release(&mut ib, pos(200.0, 100.0));

    assert_eq!(ib.mode(), InteractionMode::Idle);
    assert_eq!(ib.selection(), Rect::new(10.0, 10.0, 20.0, 20.0));
    assert!(selection_changes(&ib.drain_events()).is_empty());
}

#[test]
fn test_click_without_move_commits_nothing() {
    let mut ib = TestImageBoxBuilder::new().build();

    press(&mut ib, pos(100.0, 100.0));
    release(&mut ib, pos(100.0, 100.0));

    assert!(!ib.has_selection());
}

#[test]
fn test_new_selection_replaces_old() {
    let mut ib = TestImageBoxBuilder::new()
        .with_selection(Rect::new(10.0, 10.0, 20.0, 20.0))
        .build();

    drag_gesture(&mut ib, pos(100.0, 100.0), pos(140.0, 130.0));

    assert_eq!(ib.selection(), Rect::new(100.0, 100.0, 40.0, 30.0));
    assert_eq!(
        selection_changes(&ib.drain_events()),
        vec![Rect::new(100.0, 100.0, 40.0, 30.0)]
    );
}

#[test]
fn test_press_inside_selection_never_selects() {
    let mut ib = TestImageBoxBuilder::new()
        .with_selection(Rect::new(10.0, 10.0, 20.0, 20.0))
        .build();

    for p in [
        pos(10.0, 10.0),
        pos(11.5, 28.0),
        pos(20.0, 20.0),
        pos(29.9, 29.9),
    ] {
        press(&mut ib, p);
        assert_eq!(ib.mode(), InteractionMode::Dragging, "press at {:?}", p);
        release(&mut ib, p);
    }
}

#[test]
fn test_policy_veto_keeps_idle() {
    let mut ib = TestImageBoxBuilder::new()
        .build()
        .with_policy(LeftMarginVeto { min_x: 100.0 });

    press(&mut ib, pos(50.0, 50.0));
    assert_eq!(ib.mode(), InteractionMode::Idle);
    move_to(&mut ib, pos(150.0, 150.0));
    release(&mut ib, pos(150.0, 150.0));
    assert!(!ib.has_selection());

    drag_gesture(&mut ib, pos(120.0, 50.0), pos(150.0, 80.0));
    assert_eq!(ib.selection(), Rect::new(120.0, 50.0, 30.0, 30.0));
}

#[test]
fn test_policy_sees_committed_selection() {
    struct RecordCommitted;
    impl SelectionPolicy for RecordCommitted {
        fn is_pan_gesture(&self, _button: MouseButton, _modifiers: Modifiers) -> bool {
            false
        }
        fn allow_selection_start(&self, request: &SelectionRequest) -> bool {
            // Only allow when nothing is selected yet
            request.committed.is_empty()
        }
    }

    let mut ib = TestImageBoxBuilder::new().build().with_policy(RecordCommitted);
    drag_gesture(&mut ib, pos(10.0, 10.0), pos(30.0, 30.0));
    assert!(ib.has_selection());

    drag_gesture(&mut ib, pos(100.0, 100.0), pos(130.0, 130.0));
    assert_eq!(ib.selection(), Rect::new(10.0, 10.0, 20.0, 20.0));
}

#[test]
fn test_selection_disabled() {
    let settings = ImageBoxSettings {
        allow_selection: false,
        ..Default::default()
    };
    let mut ib = TestImageBoxBuilder::new().with_settings(settings).build();

    press(&mut ib, pos(50.0, 50.0));
    assert_eq!(ib.mode(), InteractionMode::Idle);
}

#[test]
fn test_selection_limited_to_image() {
    // 200x100 image centred at (100, 100) in the 400x300 viewport
    let mut ib = TestImageBoxBuilder::new().with_image(200, 100).build();

    drag_gesture(&mut ib, pos(150.0, 150.0), pos(350.0, 250.0));

    assert_eq!(ib.selection(), Rect::new(50.0, 50.0, 150.0, 50.0));
}

#[test]
fn test_selection_unlimited_when_disabled() {
    let settings = ImageBoxSettings {
        limit_selection_to_image: false,
        ..Default::default()
    };
    let mut ib = TestImageBoxBuilder::new()
        .with_settings(settings)
        .with_image(200, 100)
        .build();

    drag_gesture(&mut ib, pos(150.0, 150.0), pos(350.0, 250.0));

    assert_eq!(ib.selection(), Rect::new(50.0, 50.0, 200.0, 100.0));
}

#[test]
fn test_selection_drawn_while_zoomed_is_in_image_space() {
    let mut ib = TestImageBoxBuilder::new()
        .with_zoom(200.0)
        .with_scroll(0.0, 0.0)
        .build();

    drag_gesture(&mut ib, pos(20.0, 20.0), pos(60.0, 60.0));
    assert_eq!(ib.selection(), Rect::new(10.0, 10.0, 20.0, 20.0));

    ib.set_zoom(100.0).unwrap();
    assert_eq!(ib.selection(), Rect::new(10.0, 10.0, 20.0, 20.0));
}

#[test]
fn test_selection_overlay_on_screen() {
    let mut ib = TestImageBoxBuilder::new()
        .with_selection(Rect::new(10.0, 10.0, 20.0, 20.0))
        .with_zoom(200.0)
        .with_scroll(5.0, 5.0)
        .build();

    assert_eq!(
        ib.selection_on_screen(),
        Some(Rect::new(10.0, 10.0, 40.0, 40.0))
    );
    ib.clear_selection();
    assert_eq!(ib.selection_on_screen(), None);
    assert_eq!(
        ib.drain_events().first(),
        Some(&ImageBoxEvent::SelectionChanged(Rect::EMPTY))
    );
}

#[test]
fn test_other_button_release_does_not_end_selection() {
    let mut ib = TestImageBoxBuilder::new().build();

    press(&mut ib, pos(50.0, 50.0));
    move_to(&mut ib, pos(60.0, 60.0));
    press_with(&mut ib, pos(60.0, 60.0), MouseButton::Right, Modifiers::NONE);
    release_with(&mut ib, pos(60.0, 60.0), MouseButton::Right);

    assert_eq!(ib.mode(), InteractionMode::Selecting);
    assert!(!ib.has_selection());

    move_to(&mut ib, pos(150.0, 150.0));
    release(&mut ib, pos(150.0, 150.0));

    assert_eq!(ib.mode(), InteractionMode::Idle);
    assert_eq!(ib.selection(), Rect::new(50.0, 50.0, 100.0, 100.0));
    assert_eq!(
        selection_changes(&ib.drain_events()),
        vec![Rect::new(50.0, 50.0, 100.0, 100.0)]
    );
}

#[test]
fn test_second_press_during_selection_is_ignored() {
    let mut ib = TestImageBoxBuilder::new().build();

    press(&mut ib, pos(50.0, 50.0));
    press_with(&mut ib, pos(60.0, 60.0), MouseButton::Middle, Modifiers::NONE);
    assert_eq!(ib.mode(), InteractionMode::Selecting);
    release(&mut ib, pos(90.0, 70.0));

    assert_eq!(ib.selection(), Rect::new(50.0, 50.0, 40.0, 20.0));
}
