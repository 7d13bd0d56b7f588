//! Benchmarks for buffer edits and full update dispatch
//!
//! Run with: cargo bench --bench editing

use reqline::editable::{MoveTarget, TextBuffer, TextEditMsg};
use reqline::measure::Monospace;
use reqline::{update, CommandEditor, EditorConfig};

fn main() {
    divan::main();
}

#[divan::bench(args = [100, 1000, 10000])]
fn type_characters(n: usize) {
    let mut buffer = TextBuffer::new();
    for _ in 0..n {
        buffer.insert("x");
    }
    divan::black_box(buffer.len());
}

#[divan::bench(args = [100, 1000])]
fn undo_redo_all(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| {
            let mut buffer = TextBuffer::new();
            for _ in 0..n {
                buffer.insert("ab");
            }
            buffer
        })
        .bench_local_values(|mut buffer| {
            while buffer.undo() {}
            while buffer.redo() {}
            buffer
        });
}

#[divan::bench]
fn vertical_moves_through_update(bencher: divan::Bencher) {
    let text = "curl -X POST \\\n  -H 'Accept: */*' \\\n  https://api.example.com/v1/items\n"
        .repeat(20);
    let mono = Monospace::default();
    bencher
        .with_inputs(|| CommandEditor::with_text(&text, EditorConfig::default(), 60.0))
        .bench_local_values(|mut editor| {
            for _ in 0..20 {
                update(&mut editor, TextEditMsg::Move(MoveTarget::Up), &mono);
            }
            editor
        });
}
