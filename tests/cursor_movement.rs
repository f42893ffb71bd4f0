//! Cursor movement tests - basic movement, home/end, word navigation

mod common;

use common::{caret_to, press, press_mods, test_entry};
use entrybox::{KeyCode, Modifiers};

// ========================================================================
// Basic arrows
// ========================================================================

#[test]
fn test_caret_starts_at_end_of_initial_text() {
    let entry = test_entry("hello");
    assert_eq!(entry.state().cursor(), 5);
}

#[test]
fn test_left_moves_one_char() {
    let mut entry = test_entry("hello");
    press(&mut entry, KeyCode::Left);
    assert_eq!(entry.state().cursor(), 4);
}

#[test]
fn test_left_clamps_at_start() {
    let mut entry = test_entry("ab");
    for _ in 0..5 {
        press(&mut entry, KeyCode::Left);
    }
    assert_eq!(entry.state().cursor(), 0);
}

#[test]
fn test_right_clamps_at_end() {
    let mut entry = test_entry("ab");
    press(&mut entry, KeyCode::Right);
    press(&mut entry, KeyCode::Right);
    assert_eq!(entry.state().cursor(), 2);
}

#[test]
fn test_arrows_on_empty_buffer_are_noops() {
    let mut entry = test_entry("");
    press(&mut entry, KeyCode::Left);
    assert_eq!(entry.state().cursor(), 0);
    press(&mut entry, KeyCode::Right);
    assert_eq!(entry.state().cursor(), 0);
}

// ========================================================================
// Home / End
// ========================================================================

#[test]
fn test_home_jumps_to_start() {
    let mut entry = test_entry("hello world");
    press(&mut entry, KeyCode::Home);
    assert_eq!(entry.state().cursor(), 0);
}

#[test]
fn test_end_jumps_to_end() {
    let mut entry = test_entry("hello world");
    caret_to(&mut entry, 3);
    press(&mut entry, KeyCode::End);
    assert_eq!(entry.state().cursor(), 11);
}

// ========================================================================
// Word navigation (separators are whitespace)
// ========================================================================

#[test]
fn test_ctrl_left_jumps_to_word_start() {
    let mut entry = test_entry("hello world");
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 6);
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 0);
}

#[test]
fn test_ctrl_left_at_start_is_noop() {
    let mut entry = test_entry("hello");
    press(&mut entry, KeyCode::Home);
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 0);
}

#[test]
fn test_ctrl_right_jumps_to_word_end() {
    let mut entry = test_entry("hello world");
    press(&mut entry, KeyCode::Home);
    press_mods(&mut entry, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 5);
    press_mods(&mut entry, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 11);
}

#[test]
fn test_word_jump_skips_separator_runs() {
    let mut entry = test_entry("a   bb   c");
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 9); // before "c"
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 4); // before "bb"
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 0);
}

#[test]
fn test_word_jump_mid_word() {
    let mut entry = test_entry("hello world");
    caret_to(&mut entry, 8); // "hello wo|rld"
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 6);
    caret_to(&mut entry, 2); // "he|llo"
    press_mods(&mut entry, KeyCode::Right, Modifiers::CTRL);
    assert_eq!(entry.state().cursor(), 5);
}

// ========================================================================
// Movement vs. active selection
// ========================================================================

#[test]
fn test_plain_left_collapses_selection_to_left_edge() {
    let mut entry = test_entry("hello");
    press(&mut entry, KeyCode::Home);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    press(&mut entry, KeyCode::Left);
    assert_eq!(entry.state().cursor(), 0);
    assert!(entry.selected_text().is_empty());
}

#[test]
fn test_plain_right_collapses_selection_to_right_edge() {
    let mut entry = test_entry("hello");
    press(&mut entry, KeyCode::Home);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    press_mods(&mut entry, KeyCode::Right, Modifiers::SHIFT);
    press(&mut entry, KeyCode::Right);
    assert_eq!(entry.state().cursor(), 2);
    assert!(entry.selected_text().is_empty());
}

#[test]
fn test_word_jump_without_shift_collapses_selection() {
    let mut entry = test_entry("hello world");
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL | Modifiers::SHIFT);
    assert!(!entry.selected_text().is_empty());
    press_mods(&mut entry, KeyCode::Left, Modifiers::CTRL);
    assert!(entry.selected_text().is_empty());
    assert_eq!(entry.state().cursor(), 6);
}
