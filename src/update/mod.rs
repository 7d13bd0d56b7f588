//! Update function for the Elm-style architecture
//!
//! All editor state transformations flow through [`update`].

use crate::editable::{MoveTarget, TextEditMsg};
use crate::layout::{move_vertical, visual_to_offset, VerticalDirection, VisualLine};
use crate::measure::TextMeasure;
use crate::model::CommandEditor;

#[cfg(debug_assertions)]
use crate::tracing::BufferSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Apply one intent to the editor.
///
/// Returns true if state changed (needs redraw). In debug builds the
/// dispatch is wrapped with tracing instrumentation.
#[inline]
pub fn update<M: TextMeasure + ?Sized>(
    editor: &mut CommandEditor,
    msg: TextEditMsg,
    measure: &M,
) -> bool {
    #[cfg(debug_assertions)]
    {
        update_traced(editor, msg, measure)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(editor, &msg, measure)
    }
}

fn update_inner<M: TextMeasure + ?Sized>(
    editor: &mut CommandEditor,
    msg: &TextEditMsg,
    measure: &M,
) -> bool {
    // Vertical moves and clicks resolve against the wrapped lines
    let lines = if msg.needs_layout() {
        editor.layout(measure)
    } else {
        Vec::new()
    };

    match msg {
        // === Focus ===
        TextEditMsg::Focus => editor.set_focused(true),
        TextEditMsg::Blur => editor.set_focused(false),

        // === Movement ===
        TextEditMsg::Move(target) => apply_move(editor, &lines, *target, false, measure),
        TextEditMsg::MoveWithSelection(target) => {
            apply_move(editor, &lines, *target, true, measure)
        }
        TextEditMsg::Click { x, y, extend } => {
            let offset = visual_to_offset(
                &lines,
                editor.text(),
                *x,
                *y,
                editor.line_height(),
                measure,
            );
            let focus_changed = editor.set_focused(true);
            let before = (editor.buffer.cursor(), editor.buffer.selection_anchor());
            editor.buffer.set_cursor(offset, *extend);
            focus_changed || before != (editor.buffer.cursor(), editor.buffer.selection_anchor())
        }

        // === Editing ===
        TextEditMsg::Insert(text) => editor.buffer.insert(text),
        TextEditMsg::Backspace => editor.buffer.backspace(),
        TextEditMsg::Delete => editor.buffer.delete(),
        TextEditMsg::DeleteSelection => editor.buffer.delete_selection(),
        TextEditMsg::SetText(text) => {
            editor.buffer.set_text(text);
            true
        }

        // === Selection ===
        TextEditMsg::SelectAll => {
            editor.buffer.select_all();
            true
        }

        // === Undo/Redo ===
        TextEditMsg::Undo => editor.buffer.undo(),
        TextEditMsg::Redo => editor.buffer.redo(),
    }
}

/// Apply movement to the editor's buffer.
fn apply_move<M: TextMeasure + ?Sized>(
    editor: &mut CommandEditor,
    lines: &[VisualLine],
    target: MoveTarget,
    extend_selection: bool,
    measure: &M,
) -> bool {
    let before = (editor.buffer.cursor(), editor.buffer.selection_anchor());
    let buffer = &mut editor.buffer;

    match target {
        MoveTarget::Left => buffer.move_left(extend_selection, false),
        MoveTarget::Right => buffer.move_right(extend_selection, false),
        MoveTarget::WordLeft => buffer.move_left(extend_selection, true),
        MoveTarget::WordRight => buffer.move_right(extend_selection, true),
        MoveTarget::LineStart => buffer.move_line_start(extend_selection),
        MoveTarget::LineEnd => buffer.move_line_end(extend_selection),
        MoveTarget::DocumentStart => buffer.move_doc_start(extend_selection),
        MoveTarget::DocumentEnd => buffer.move_doc_end(extend_selection),
        MoveTarget::Up | MoveTarget::Down => {
            let direction = if target == MoveTarget::Up {
                VerticalDirection::Up
            } else {
                VerticalDirection::Down
            };
            let line_height = editor.line_height();
            move_vertical(
                &mut editor.buffer,
                lines,
                direction,
                extend_selection,
                line_height,
                measure,
            );
        }
    }

    before != (editor.buffer.cursor(), editor.buffer.selection_anchor())
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after buffer state and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced<M: TextMeasure + ?Sized>(
    editor: &mut CommandEditor,
    msg: TextEditMsg,
    measure: &M,
) -> bool {
    let msg_name = format!("{:?}", msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = BufferSnapshot::from_buffer(&editor.buffer);
    debug!(target: "message", msg = %msg_name, editing = msg.is_editing(), "processing");

    let changed = update_inner(editor, &msg, measure);

    let after = BufferSnapshot::from_buffer(&editor.buffer);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "buffer", %diff, changed, "state changed");
    }

    changed
}
