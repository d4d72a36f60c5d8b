//! Plain-text dumps of a [`CubeState`] for logs and regression fixtures.

use std::fmt;

use super::cube::{CubeState, FaceStickers};
use super::face::FaceName;

const NET_INDENT: &str = "    ";
const NET_BAND: [FaceName; 4] = [
    FaceName::Left,
    FaceName::Front,
    FaceName::Right,
    FaceName::Back,
];
const DUMP_ORDER: [FaceName; 6] = [
    FaceName::Up,
    FaceName::Front,
    FaceName::Right,
    FaceName::Back,
    FaceName::Left,
    FaceName::Down,
];

fn push_row(out: &mut String, stickers: &FaceStickers, row: usize) {
    for color in &stickers[row * 3..row * 3 + 3] {
        out.push(color.initial());
    }
}

/// Renders the state as an unfolded cube net of color initials.
///
/// U sits above the `L F R B` band and D below it, both indented four
/// spaces. Lines are joined with `\n` and there is no trailing newline.
#[must_use]
pub fn render_cube_net(state: &CubeState) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(9);

    for row in 0..3 {
        let mut line = String::from(NET_INDENT);
        push_row(&mut line, state.face(FaceName::Up), row);
        lines.push(line);
    }

    for row in 0..3 {
        let mut line = String::with_capacity(15);
        for (i, face) in NET_BAND.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            push_row(&mut line, state.face(*face), row);
        }
        lines.push(line);
    }

    for row in 0..3 {
        let mut line = String::from(NET_INDENT);
        push_row(&mut line, state.face(FaceName::Down), row);
        lines.push(line);
    }

    lines.join("\n")
}

/// Dumps each face as a labelled 3x3 block in `U F R B L D` order.
///
/// Blocks look like `"U:\nWWW\nWWW\nWWW"` and are separated by a blank line.
#[must_use]
pub fn state_to_string(state: &CubeState) -> String {
    let mut out = String::with_capacity(DUMP_ORDER.len() * 16);
    for (i, face) in DUMP_ORDER.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push(face.symbol());
        out.push(':');
        for row in 0..3 {
            out.push('\n');
            push_row(&mut out, state.face(*face), row);
        }
    }
    out
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_cube_net(self))
    }
}
