use std::fmt::Write as _;

use crate::domain::{Cell, Generation};

/// Glyph for a live cell
pub const ALIVE: char = 'O';
/// Glyph for a dead cell
pub const DEAD: char = ' ';

/// Draw the tight bounding box of the live cells, one line per row.
/// An empty generation draws nothing.
pub fn render_board(generation: &Generation) -> String {
    if generation.is_empty() {
        return String::new();
    }

    let bb = generation.bounding_box();
    let mut out = String::with_capacity(((bb.width() + 1) * bb.height()) as usize);
    for y in bb.min_y..=bb.max_y {
        out.extend((bb.min_x..=bb.max_x).map(|x| {
            if generation.contains(Cell::new(x, y)) { ALIVE } else { DEAD }
        }));
        out.push('\n');
    }
    out
}

/// Board followed by the generation counter
pub fn render_frame(generation: &Generation, number: u64) -> String {
    let mut frame = render_board(generation);
    let _ = writeln!(frame, "Generation: {number}");
    frame
}
