//! Cube state model: colors, faces, the six-face value type and text dumps.

mod cube;
mod face;
/// Text renderings of a state.
pub mod render;

pub use cube::{CubeState, FaceStickers};
pub use face::{Color, FaceName, CENTER_INDEX, FACE_COUNT, STICKERS_PER_FACE, STICKER_COUNT};
pub use render::{render_cube_net, state_to_string};

use crate::api::ColorScheme;

/// Returns a solved cube in the standard color scheme.
#[must_use]
pub const fn create_solved_state() -> CubeState {
    CubeState::solved(&ColorScheme::STANDARD)
}

/// Returns an independent copy of `state`.
#[must_use]
pub const fn clone_state(state: &CubeState) -> CubeState {
    *state
}

/// Returns whether every face of `state` is a single color.
#[must_use]
pub fn is_state_solved(state: &CubeState) -> bool {
    state.is_solved()
}

/// Returns whether two states carry the same color on every sticker.
#[must_use]
pub fn states_equal(a: &CubeState, b: &CubeState) -> bool {
    a == b
}
