use super::*;

// =============================================================
// ArrowKey
// =============================================================

#[test]
fn arrow_key_from_browser_names() {
    assert_eq!(ArrowKey::from_key("ArrowUp"), Some(ArrowKey::Up));
    assert_eq!(ArrowKey::from_key("ArrowDown"), Some(ArrowKey::Down));
    assert_eq!(ArrowKey::from_key("ArrowLeft"), Some(ArrowKey::Left));
    assert_eq!(ArrowKey::from_key("ArrowRight"), Some(ArrowKey::Right));
}

#[test]
fn non_arrow_keys_are_ignored() {
    assert_eq!(ArrowKey::from_key("a"), None);
    assert_eq!(ArrowKey::from_key("Up"), None);
    assert_eq!(ArrowKey::from_key(""), None);
}

#[test]
fn arrow_push_directions_move_content_opposite_to_view() {
    assert_eq!(ArrowKey::Up.push(), Point::new(0.0, 1.0));
    assert_eq!(ArrowKey::Down.push(), Point::new(0.0, -1.0));
    assert_eq!(ArrowKey::Left.push(), Point::new(1.0, 0.0));
    assert_eq!(ArrowKey::Right.push(), Point::new(-1.0, 0.0));
}

// =============================================================
// HeldKeys
// =============================================================

#[test]
fn held_keys_default_empty() {
    let keys = HeldKeys::default();
    assert!(!keys.any());
    assert_eq!(keys.push(), Point::ZERO);
}

#[test]
fn held_keys_axis_queries() {
    let mut keys = HeldKeys::default();
    keys.set(ArrowKey::Left, true);
    assert!(keys.horizontal());
    assert!(!keys.vertical());
    keys.set(ArrowKey::Down, true);
    assert!(keys.vertical());
    keys.set(ArrowKey::Left, false);
    assert!(!keys.horizontal());
    assert!(keys.any());
}

#[test]
fn opposite_keys_cancel_push() {
    let mut keys = HeldKeys::default();
    keys.set(ArrowKey::Left, true);
    keys.set(ArrowKey::Right, true);
    assert_eq!(keys.push(), Point::ZERO);
    assert!(keys.horizontal());
}

#[test]
fn diagonal_push() {
    let mut keys = HeldKeys::default();
    keys.set(ArrowKey::Up, true);
    keys.set(ArrowKey::Right, true);
    assert_eq!(keys.push(), Point::new(-1.0, 1.0));
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert_eq!(state, InputState::Idle);
    assert!(!state.is_active());
    assert!(!matches!(state, InputState::Dragging { .. }));
    assert_eq!(state.grab(), None);
}

#[test]
fn press_records_grab_relative_to_offset() {
    let state = InputState::press(Point::new(100.0, 50.0), Point::new(-20.0, 10.0));
    assert_eq!(state.grab(), Some(Point::new(120.0, 40.0)));
    assert!(state.is_active());
    assert!(!matches!(state, InputState::Dragging { .. }));
}

#[test]
fn small_move_stays_pressed() {
    let state = InputState::press(Point::new(0.0, 0.0), Point::ZERO);
    let (next, promoted) = state.moved(Point::new(5.0, 5.0));
    assert!(!promoted);
    assert!(!matches!(next, InputState::Dragging { .. }));
}

#[test]
fn threshold_distance_promotes_to_drag() {
    let state = InputState::press(Point::new(0.0, 0.0), Point::ZERO);
    let (next, promoted) = state.moved(Point::new(8.0, 0.0));
    assert!(promoted);
    assert!(matches!(next, InputState::Dragging { .. }));
    assert_eq!(next.grab(), Some(Point::ZERO));
}

#[test]
fn promotion_is_reported_once() {
    let state = InputState::press(Point::new(0.0, 0.0), Point::ZERO);
    let (dragging, first) = state.moved(Point::new(20.0, 0.0));
    let (still, second) = dragging.moved(Point::new(0.0, 0.0));
    assert!(first);
    assert!(!second);
    assert!(matches!(still, InputState::Dragging { .. }));
}

#[test]
fn threshold_measured_from_start_not_last_move() {
    let mut state = InputState::press(Point::new(0.0, 0.0), Point::ZERO);
    for x in 1..=7 {
        let (next, promoted) = state.moved(Point::new(f64::from(x), 0.0));
        assert!(!promoted);
        state = next;
    }
    let (next, promoted) = state.moved(Point::new(8.5, 0.0));
    assert!(promoted);
    assert!(matches!(next, InputState::Dragging { .. }));
}

#[test]
fn idle_ignores_moves() {
    let (next, promoted) = InputState::Idle.moved(Point::new(100.0, 100.0));
    assert_eq!(next, InputState::Idle);
    assert!(!promoted);
}
