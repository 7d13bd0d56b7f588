//! Monkey tests - randomized operation sequences and stress inputs
//!
//! Sequences come from a seeded generator so failures reproduce.

mod common;

use common::{assert_layout_covers, narrow_editor, send, test_editor, Lcg, LINE_HEIGHT};
use reqline::editable::{MoveTarget, TextEditMsg};
use reqline::layout::offset_to_visual;
use reqline::measure::Monospace;
use reqline::syntax::tokenize;

const SNIPPETS: &[&str] = &[
    "curl",
    " ",
    "-X",
    "POST",
    "'",
    "\"",
    "\\",
    "\n",
    "\r\n",
    "{",
    "}",
    "é",
    "€",
    "🦀",
    "https://api.example.com/v1",
    "\t",
];

const MOVES: &[MoveTarget] = &[
    MoveTarget::Left,
    MoveTarget::Right,
    MoveTarget::Up,
    MoveTarget::Down,
    MoveTarget::LineStart,
    MoveTarget::LineEnd,
    MoveTarget::WordLeft,
    MoveTarget::WordRight,
    MoveTarget::DocumentStart,
    MoveTarget::DocumentEnd,
];

fn random_msg(rng: &mut Lcg) -> TextEditMsg {
    match rng.below(12) {
        0..=3 => TextEditMsg::Insert(rng.pick(SNIPPETS).to_string()),
        4 => TextEditMsg::Backspace,
        5 => TextEditMsg::Delete,
        6 => TextEditMsg::Move(*rng.pick(MOVES)),
        7 => TextEditMsg::MoveWithSelection(*rng.pick(MOVES)),
        8 => TextEditMsg::Click {
            x: rng.below(40) as f32 - 5.0,
            y: rng.below(200) as f32 - 20.0,
            extend: rng.below(2) == 0,
        },
        9 => TextEditMsg::Undo,
        10 => TextEditMsg::Redo,
        _ => TextEditMsg::SelectAll,
    }
}

fn assert_buffer_invariants(text: &str, cursor: usize, anchor: Option<usize>) {
    assert!(cursor <= text.len());
    assert!(text.is_char_boundary(cursor), "cursor {} in {:?}", cursor, text);
    if let Some(anchor) = anchor {
        assert!(anchor <= text.len());
        assert!(text.is_char_boundary(anchor), "anchor {} in {:?}", anchor, text);
    }
}

// ========================================================================
// Random sequences
// ========================================================================

#[test]
fn test_random_sequences_keep_invariants() {
    for seed in 0..40 {
        let mut rng = Lcg::new(seed);
        let mut editor = narrow_editor("curl ", 12.0);
        let mono = Monospace::default();

        for _ in 0..300 {
            let msg = random_msg(&mut rng);
            send(&mut editor, msg);

            let text = editor.text();
            assert_buffer_invariants(
                text,
                editor.buffer.cursor(),
                editor.buffer.selection_anchor(),
            );

            let lines = editor.layout(&mono);
            assert_layout_covers(&lines, text);
            let caret = offset_to_visual(&lines, text, editor.buffer.cursor(), LINE_HEIGHT, &mono);
            assert!(caret.line < lines.len());
        }
    }
}

#[test]
fn test_undo_everything_restores_start() {
    for seed in 100..130 {
        let mut rng = Lcg::new(seed);
        let mut editor = test_editor("", 0);
        send(&mut editor, TextEditMsg::SetText("curl https://x".into()));
        let start_text = editor.text().to_string();
        let start_cursor = editor.buffer.cursor();

        for _ in 0..60 {
            let msg = match rng.below(4) {
                0 | 1 => TextEditMsg::Insert(rng.pick(SNIPPETS).to_string()),
                2 => TextEditMsg::Backspace,
                _ => TextEditMsg::Delete,
            };
            send(&mut editor, msg);
        }

        while send(&mut editor, TextEditMsg::Undo) {}
        assert_eq!(editor.text(), start_text, "seed {}", seed);
        assert_eq!(editor.buffer.cursor(), start_cursor, "seed {}", seed);
    }
}

#[test]
fn test_undo_then_redo_replays_everything() {
    for seed in 200..220 {
        let mut rng = Lcg::new(seed);
        let mut editor = test_editor("", 0);

        for _ in 0..50 {
            let msg = match rng.below(5) {
                0..=2 => TextEditMsg::Insert(rng.pick(SNIPPETS).to_string()),
                3 => TextEditMsg::Delete,
                _ => TextEditMsg::MoveWithSelection(*rng.pick(MOVES)),
            };
            send(&mut editor, msg);
        }
        let final_text = editor.text().to_string();

        while send(&mut editor, TextEditMsg::Undo) {}
        while send(&mut editor, TextEditMsg::Redo) {}
        assert_eq!(editor.text(), final_text, "seed {}", seed);
    }
}

#[test]
fn test_redo_cancels_single_undo() {
    for seed in 300..330 {
        let mut rng = Lcg::new(seed);
        let mut editor = test_editor("curl -v https://x", 8);
        let msg = match rng.below(3) {
            0 => TextEditMsg::Insert(rng.pick(SNIPPETS).to_string()),
            1 => TextEditMsg::Backspace,
            _ => TextEditMsg::Delete,
        };
        send(&mut editor, msg);
        let text = editor.text().to_string();
        let cursor = editor.buffer.cursor();

        send(&mut editor, TextEditMsg::Undo);
        send(&mut editor, TextEditMsg::Redo);
        assert_eq!(editor.text(), text);
        assert_eq!(editor.buffer.cursor(), cursor);
    }
}

#[test]
fn test_random_text_tokenizes_with_full_coverage() {
    for seed in 0..200 {
        let mut rng = Lcg::new(seed);
        let len = rng.below(30);
        let text: String = (0..len).map(|_| *rng.pick(SNIPPETS)).collect();

        let tokens = tokenize(&text);
        let rebuilt: String = tokens.iter().map(|t| t.text(&text)).collect();
        assert_eq!(rebuilt, text);
    }
}

// ========================================================================
// Stress inputs
// ========================================================================

#[test]
fn test_very_narrow_width_still_progresses() {
    let text = "curl -d '{\"a\": [1, 2, 3]}' https://example.com";
    for width in [0.0, 0.5, 1.0] {
        let editor = narrow_editor(text, width);
        let lines = editor.layout(&Monospace::default());
        assert_layout_covers(&lines, text);
        assert!(lines.len() <= text.chars().count() + 1);
    }
}

#[test]
fn test_long_command_layout() {
    let text = "curl -H 'X: y' ".repeat(500);
    let editor = narrow_editor(&text, 80.0);
    let lines = editor.layout(&Monospace::default());
    assert_layout_covers(&lines, &text);
    assert!(lines.iter().all(|l| l.width() <= 80.0));
}

#[test]
fn test_click_with_extreme_coordinates() {
    let mut editor = narrow_editor("curl https://example.com/a/b", 12.0);
    for (x, y) in [
        (f32::MAX, f32::MAX),
        (f32::MIN, f32::MIN),
        (f32::NAN, f32::NAN),
        (0.0, f32::INFINITY),
        (f32::NEG_INFINITY, 30.0),
    ] {
        send(
            &mut editor,
            TextEditMsg::Click {
                x,
                y,
                extend: false,
            },
        );
        assert!(editor.buffer.cursor() <= editor.text().len());
    }
}
