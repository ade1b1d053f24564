use clinids::ui::core::{EventHandler, EventType};
use tokio::time::Duration;

#[tokio::test]
async fn test_event_handling() {
    // Test that the event handler can be created
    let event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[tokio::test]
async fn test_mark_rendered_resets_timer() {
    let mut event_handler = EventHandler::with_tick_rate(Duration::from_millis(5));
    tokio::time::sleep(Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}

#[test]
fn test_event_type_is_cloneable() {
    let event = EventType::Resize(80, 24);
    assert!(matches!(event.clone(), EventType::Resize(80, 24)));
}
