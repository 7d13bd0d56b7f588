//! Layout module
//!
//! Turns a token stream into soft-wrapped visual lines and maps between
//! buffer offsets and pixel positions on those lines. Everything here is a
//! pure function of its inputs; results are recomputed after each edit.

mod position;
mod wrap;

pub use position::{
    move_vertical, offset_to_visual, visual_to_offset, VerticalDirection, VisualPosition,
};
pub use wrap::{wrap, VisualLine, VisualToken, WrapOptions};
