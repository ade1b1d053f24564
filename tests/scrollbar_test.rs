use ratatui::layout::Rect;
use clinids::ui::components::scrollbar_helper::ScrollbarHelper;

#[test]
fn test_scrollbar_detection() {
    // Test case: 10 items in a bordered rect with 3 content rows
    let rect = Rect::new(0, 0, 50, 5);
    let total_items = 10;

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);

    // Should detect that scrollbar is needed
    assert!(
        scrollbar_area.is_some(),
        "Scrollbar should be needed for 10 items in height 5"
    );

    if let Some(scrollbar_rect) = scrollbar_area {
        assert_eq!(scrollbar_rect.width, 1, "Scrollbar should be 1 column wide");
        assert_eq!(scrollbar_rect.height, 3, "Scrollbar should span the area inside the borders");
        assert_eq!(scrollbar_rect.y, 1);
    }

    // List area should be reduced by 1 column for scrollbar
    assert_eq!(list_area.width, 49, "List area should be reduced for scrollbar");
}

#[test]
fn test_no_scrollbar_needed() {
    // Test case: 3 items in a rect with height 5 (should not need scrollbar)
    let rect = Rect::new(0, 0, 50, 5);
    let total_items = 3;

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);

    // Should not need scrollbar
    assert!(
        scrollbar_area.is_none(),
        "Scrollbar should not be needed for 3 items in height 5"
    );

    // List area should be the full rect
    assert_eq!(list_area, rect, "List area should be full rect when no scrollbar");
}

#[test]
fn test_border_edge_case() {
    // Height 10 leaves 8 content rows inside the borders
    let rect = Rect::new(0, 0, 50, 10);

    let (_list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 8);
    assert!(scrollbar_area.is_none(), "8 items fit in 8 content rows");

    let (_list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, 9);
    assert!(scrollbar_area.is_some(), "9 items overflow 8 content rows");
}

#[test]
fn test_borderless_areas_use_full_height() {
    let rect = Rect::new(0, 0, 20, 6);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_borderless_areas(rect, 6);
    assert!(scrollbar_area.is_none());
    assert_eq!(list_area, rect);

    let (list_area, scrollbar_area) = ScrollbarHelper::calculate_borderless_areas(rect, 7);
    assert_eq!(list_area.width, 19);
    assert_eq!(scrollbar_area.map(|area| area.height), Some(6));
}
