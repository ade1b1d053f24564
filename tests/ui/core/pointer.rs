use clinids::ui::core::PointerWatch;
use ratatui::layout::Rect;

#[test]
fn test_guard_drop_releases_listener() {
    let pointer = PointerWatch::new();
    let guard = pointer.subscribe();
    let other = pointer.subscribe();
    assert_ne!(guard.id(), other.id());
    assert_eq!(pointer.listener_count(), 2);

    drop(guard);
    assert_eq!(pointer.listener_count(), 1);
    drop(other);
    assert_eq!(pointer.listener_count(), 0);
}

#[test]
fn test_only_outside_presses_trigger() {
    let pointer = PointerWatch::new();
    let guard = pointer.subscribe();
    guard.set_bounds(&[Rect::new(0, 0, 10, 3), Rect::new(0, 3, 10, 5)]);

    assert_eq!(pointer.dispatch(5, 6), 0);
    assert!(!guard.take_triggered());

    assert_eq!(pointer.dispatch(20, 1), 1);
    assert!(guard.take_triggered());
    // The flag is consumed
    assert!(!guard.take_triggered());
}

#[test]
fn test_listener_without_bounds_is_skipped() {
    let pointer = PointerWatch::new();
    let guard = pointer.subscribe();
    assert_eq!(pointer.dispatch(0, 0), 0);
    assert!(!guard.take_triggered());
}

#[test]
fn test_guard_outliving_watch_is_harmless() {
    let pointer = PointerWatch::new();
    let guard = pointer.subscribe();
    drop(pointer);
    guard.set_bounds(&[Rect::new(0, 0, 1, 1)]);
    assert!(!guard.take_triggered());
}
