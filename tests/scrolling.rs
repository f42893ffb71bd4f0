//! Horizontal scrolling tests - the viewport follows the caret

mod common;

use common::{press, press_mods, test_entry_with_width, type_str, ADVANCE};
use entrybox::{KeyCode, Modifiers};

// Boxes below are 5 characters wide (50px at 10px per char)
const WIDTH: f32 = 5.0 * ADVANCE;

#[test]
fn test_no_scroll_while_text_fits() {
    let mut entry = test_entry_with_width("", WIDTH);
    type_str(&mut entry, "abcde");
    assert_eq!(entry.x_offset(), 0.0);
}

#[test]
fn test_typing_past_right_edge_scrolls() {
    let mut entry = test_entry_with_width("", WIDTH);
    type_str(&mut entry, "abcdefgh"); // caret at 80px
    assert_eq!(entry.x_offset(), 80.0 - WIDTH);
}

#[test]
fn test_caret_stays_inside_after_every_keystroke() {
    let mut entry = test_entry_with_width("", WIDTH);
    type_str(&mut entry, "abcdefghij");
    for _ in 0..12 {
        press(&mut entry, KeyCode::Left);
        let caret = entry.render_state().cursor_px;
        assert!((0.0..=WIDTH).contains(&caret), "caret at {caret}px");
    }
}

#[test]
fn test_moving_left_past_window_scrolls_back() {
    let mut entry = test_entry_with_width("abcdefghij", WIDTH);
    press(&mut entry, KeyCode::Home);
    assert_eq!(entry.x_offset(), 0.0);
}

#[test]
fn test_word_jump_scrolls_in_one_step() {
    let mut entry = test_entry_with_width("hello world again", WIDTH);
    press(&mut entry, KeyCode::Home);
    assert_eq!(entry.x_offset(), 0.0);
    press(&mut entry, KeyCode::End); // caret at 170px
    assert_eq!(entry.x_offset(), 170.0 - WIDTH);
}

#[test]
fn test_offset_relaxes_to_zero_when_text_fits_again() {
    let mut entry = test_entry_with_width("", WIDTH);
    type_str(&mut entry, "abcdefgh");
    assert!(entry.x_offset() > 0.0);
    for _ in 0..4 {
        press(&mut entry, KeyCode::Backspace);
    }
    // 4 chars left (40px) fit in 50px
    assert_eq!(entry.x_offset(), 0.0);
}

#[test]
fn test_offset_clamped_after_deletion_at_end() {
    let mut entry = test_entry_with_width("", WIDTH);
    type_str(&mut entry, "abcdefghij"); // 100px, offset 50
    press_mods(&mut entry, KeyCode::Backspace, Modifiers::CTRL);
    // Buffer emptied: nothing left to scroll past
    assert_eq!(entry.x_offset(), 0.0);
    assert_eq!(entry.text(), "");
}

#[test]
fn test_offset_never_exceeds_overflow() {
    let mut entry = test_entry_with_width("abcdefghij", WIDTH); // 100px total
    press(&mut entry, KeyCode::End);
    assert!(entry.x_offset() <= 100.0 - WIDTH);
}

#[test]
fn test_resize_keeps_caret_visible() {
    let mut entry = test_entry_with_width("abcdefghij", WIDTH);
    entry.set_width(30.0); // caret at 100px
    assert_eq!(entry.x_offset(), 70.0);
    let caret = entry.render_state().cursor_px;
    assert!((0.0..=30.0).contains(&caret));
}

#[test]
fn test_render_state_selection_pixels() {
    let mut entry = test_entry_with_width("hello", 2000.0);
    press(&mut entry, KeyCode::Home);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    let rs = entry.render_state();
    assert_eq!(rs.visible_offset, 0.0);
    assert_eq!(rs.cursor_px, 2.0 * ADVANCE);
    assert_eq!(rs.selection_px, Some((0.0, 2.0 * ADVANCE)));
}
