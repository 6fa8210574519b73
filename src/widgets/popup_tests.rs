//! Tests for widgets/popup

use super::*;

#[test]
fn test_centered_fits_inside() {
    let area = Rect::new(0, 0, 100, 40);
    assert_eq!(centered(area, 60, 20), Rect::new(20, 10, 60, 20));
}

#[test]
fn test_centered_clamps_to_area() {
    let area = Rect::new(0, 0, 30, 10);
    assert_eq!(centered(area, 60, 20), area);
}

#[test]
fn test_centered_respects_offset() {
    let area = Rect::new(10, 5, 20, 10);
    assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
}
