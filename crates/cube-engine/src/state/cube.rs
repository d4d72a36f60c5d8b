//! Six-face sticker state value type.

use crate::api::{ColorScheme, EngineConfig, Orientation};
use crate::execute::apply_z2_rotation;

use super::face::{Color, FaceName, STICKERS_PER_FACE, STICKER_COUNT};

/// Stickers of one face in row-major order; index 4 is the center.
pub type FaceStickers = [Color; STICKERS_PER_FACE];

/// Full sticker state of a 3x3x3 cube.
///
/// `CubeState` is a `Copy` value: every transformation hands back a new state
/// and leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CubeState {
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    up: FaceStickers,
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    down: FaceStickers,
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    front: FaceStickers,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    back: FaceStickers,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    left: FaceStickers,
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    right: FaceStickers,
}

impl CubeState {
    /// Builds a solved state painted with `scheme`.
    #[must_use]
    pub const fn solved(scheme: &ColorScheme) -> Self {
        Self {
            up: [scheme.color(FaceName::Up); STICKERS_PER_FACE],
            down: [scheme.color(FaceName::Down); STICKERS_PER_FACE],
            front: [scheme.color(FaceName::Front); STICKERS_PER_FACE],
            back: [scheme.color(FaceName::Back); STICKERS_PER_FACE],
            left: [scheme.color(FaceName::Left); STICKERS_PER_FACE],
            right: [scheme.color(FaceName::Right); STICKERS_PER_FACE],
        }
    }

    /// Builds the solved reference state described by `config`.
    #[must_use]
    pub fn with_config(config: &EngineConfig) -> Self {
        let solved = Self::solved(&config.scheme);
        match config.orientation {
            Orientation::Standard => solved,
            Orientation::LastLayerUp => apply_z2_rotation(&solved),
        }
    }

    /// Builds a state from faces listed in [`FaceName::ALL`] order.
    #[must_use]
    pub const fn from_faces(faces: [FaceStickers; 6]) -> Self {
        let [up, down, front, back, left, right] = faces;
        Self {
            up,
            down,
            front,
            back,
            left,
            right,
        }
    }

    /// Returns the stickers of one face.
    #[must_use]
    pub const fn face(&self, face: FaceName) -> &FaceStickers {
        match face {
            FaceName::Up => &self.up,
            FaceName::Down => &self.down,
            FaceName::Front => &self.front,
            FaceName::Back => &self.back,
            FaceName::Left => &self.left,
            FaceName::Right => &self.right,
        }
    }

    pub(crate) fn face_mut(&mut self, face: FaceName) -> &mut FaceStickers {
        match face {
            FaceName::Up => &mut self.up,
            FaceName::Down => &mut self.down,
            FaceName::Front => &mut self.front,
            FaceName::Back => &mut self.back,
            FaceName::Left => &mut self.left,
            FaceName::Right => &mut self.right,
        }
    }

    /// Returns one sticker, or `None` when `index` is outside `0..9`.
    #[must_use]
    pub fn sticker(&self, face: FaceName, index: usize) -> Option<Color> {
        self.face(face).get(index).copied()
    }

    /// Overwrites one sticker and returns the previous color.
    ///
    /// Returns `None` and leaves the state unchanged when `index` is outside
    /// `0..9`.
    pub fn set_sticker(&mut self, face: FaceName, index: usize, color: Color) -> Option<Color> {
        let slot = self.face_mut(face).get_mut(index)?;
        Some(std::mem::replace(slot, color))
    }

    /// Returns a copy with one sticker repainted.
    #[must_use]
    pub fn with_sticker(mut self, face: FaceName, index: usize, color: Color) -> Self {
        self.set_sticker(face, index, color);
        self
    }

    /// Iterates faces in [`FaceName::ALL`] order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceName, &FaceStickers)> + '_ {
        FaceName::ALL.into_iter().map(move |face| (face, self.face(face)))
    }

    /// Returns whether every face shows a single color.
    ///
    /// Each face is compared against its own first sticker, so any uniform
    /// repaint also counts as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces()
            .all(|(_, stickers)| stickers.iter().all(|&color| color == stickers[0]))
    }

    /// Counts stickers of `color` across all faces.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.faces()
            .flat_map(|(_, stickers)| stickers.iter())
            .filter(|&&sticker| sticker == color)
            .count()
    }

    /// Total number of stickers held by the state.
    #[must_use]
    pub const fn sticker_count(&self) -> usize {
        STICKER_COUNT
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved(&ColorScheme::STANDARD)
    }
}
