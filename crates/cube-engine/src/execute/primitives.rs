//! Sticker permutation tables for the nine clockwise primitives.

use crate::notation::{BaseMove, RotationAxis, SliceLayer};
use crate::state::{CubeState, FaceName, FaceStickers, STICKERS_PER_FACE};

/// Clockwise quarter turn of a single layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Outer face turn: rotates the face and cycles its ring.
    Face(FaceName),
    /// Inner slice turn: cycles the ring only.
    Slice(SliceLayer),
}

/// Three sticker positions on one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    /// Face holding the stickers.
    pub face: FaceName,
    /// Sticker indices, paired positionally with the neighbouring strips.
    pub indices: [usize; 3],
}

/// Four strips cycled by one primitive.
///
/// Each strip receives the stickers of the strip after it; the last strip
/// receives the original stickers of the first.
pub type StickerCycle = [Strip; 4];

const fn strip(face: FaceName, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

/// Destination index to source index for a clockwise face rotation.
pub const FACE_ROTATION_MAP: [usize; STICKERS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

const R_CYCLE: StickerCycle = [
    strip(FaceName::Front, [2, 5, 8]),
    strip(FaceName::Down, [2, 5, 8]),
    strip(FaceName::Back, [6, 3, 0]),
    strip(FaceName::Up, [2, 5, 8]),
];
const L_CYCLE: StickerCycle = [
    strip(FaceName::Front, [0, 3, 6]),
    strip(FaceName::Up, [0, 3, 6]),
    strip(FaceName::Back, [8, 5, 2]),
    strip(FaceName::Down, [0, 3, 6]),
];
const U_CYCLE: StickerCycle = [
    strip(FaceName::Front, [0, 1, 2]),
    strip(FaceName::Right, [0, 1, 2]),
    strip(FaceName::Back, [0, 1, 2]),
    strip(FaceName::Left, [0, 1, 2]),
];
const D_CYCLE: StickerCycle = [
    strip(FaceName::Front, [6, 7, 8]),
    strip(FaceName::Left, [6, 7, 8]),
    strip(FaceName::Back, [6, 7, 8]),
    strip(FaceName::Right, [6, 7, 8]),
];
const F_CYCLE: StickerCycle = [
    strip(FaceName::Up, [6, 7, 8]),
    strip(FaceName::Left, [8, 5, 2]),
    strip(FaceName::Down, [2, 1, 0]),
    strip(FaceName::Right, [0, 3, 6]),
];
const B_CYCLE: StickerCycle = [
    strip(FaceName::Up, [2, 1, 0]),
    strip(FaceName::Right, [8, 5, 2]),
    strip(FaceName::Down, [6, 7, 8]),
    strip(FaceName::Left, [0, 3, 6]),
];
const M_CYCLE: StickerCycle = [
    strip(FaceName::Front, [1, 4, 7]),
    strip(FaceName::Up, [1, 4, 7]),
    strip(FaceName::Back, [7, 4, 1]),
    strip(FaceName::Down, [1, 4, 7]),
];
const E_CYCLE: StickerCycle = [
    strip(FaceName::Front, [3, 4, 5]),
    strip(FaceName::Left, [3, 4, 5]),
    strip(FaceName::Back, [3, 4, 5]),
    strip(FaceName::Right, [3, 4, 5]),
];
const S_CYCLE: StickerCycle = [
    strip(FaceName::Up, [3, 4, 5]),
    strip(FaceName::Left, [7, 4, 1]),
    strip(FaceName::Down, [5, 4, 3]),
    strip(FaceName::Right, [1, 4, 7]),
];

impl Primitive {
    /// All nine primitives.
    pub const ALL: [Self; 9] = [
        Self::Face(FaceName::Up),
        Self::Face(FaceName::Down),
        Self::Face(FaceName::Front),
        Self::Face(FaceName::Back),
        Self::Face(FaceName::Left),
        Self::Face(FaceName::Right),
        Self::Slice(SliceLayer::Middle),
        Self::Slice(SliceLayer::Equator),
        Self::Slice(SliceLayer::Standing),
    ];

    /// Ring of stickers this primitive moves between faces.
    #[must_use]
    pub const fn cycle(self) -> &'static StickerCycle {
        match self {
            Self::Face(FaceName::Up) => &U_CYCLE,
            Self::Face(FaceName::Down) => &D_CYCLE,
            Self::Face(FaceName::Front) => &F_CYCLE,
            Self::Face(FaceName::Back) => &B_CYCLE,
            Self::Face(FaceName::Left) => &L_CYCLE,
            Self::Face(FaceName::Right) => &R_CYCLE,
            Self::Slice(SliceLayer::Middle) => &M_CYCLE,
            Self::Slice(SliceLayer::Equator) => &E_CYCLE,
            Self::Slice(SliceLayer::Standing) => &S_CYCLE,
        }
    }

    /// Applies one clockwise quarter turn in place.
    pub fn apply(self, state: &mut CubeState) {
        if let Self::Face(face) = self {
            rotate_face_clockwise(state.face_mut(face));
        }
        cycle_strips(state, self.cycle());
    }
}

/// Rotates a face's own stickers a quarter turn clockwise.
pub fn rotate_face_clockwise(stickers: &mut FaceStickers) {
    let original = *stickers;
    for (slot, source) in stickers.iter_mut().zip(FACE_ROTATION_MAP) {
        *slot = original[source];
    }
}

fn cycle_strips(state: &mut CubeState, cycle: &StickerCycle) {
    let read = |state: &CubeState, strip: &Strip| {
        let face = state.face(strip.face);
        strip.indices.map(|index| face[index])
    };

    let saved = read(state, &cycle[0]);
    for pair in cycle.windows(2) {
        let incoming = read(state, &pair[1]);
        let target = state.face_mut(pair[0].face);
        for (index, color) in pair[0].indices.iter().zip(incoming) {
            target[*index] = color;
        }
    }

    let last = &cycle[cycle.len() - 1];
    let target = state.face_mut(last.face);
    for (index, color) in last.indices.iter().zip(saved) {
        target[*index] = color;
    }
}

/// Primitive sequence for one clockwise application of `base`, as
/// `(primitive, quarter turns)` pairs applied in order.
#[must_use]
pub const fn expand(base: BaseMove) -> &'static [(Primitive, u8)] {
    use FaceName::{Back, Down, Front, Left, Right, Up};
    use Primitive as P;
    use SliceLayer::{Equator, Middle, Standing};

    match base {
        BaseMove::Face(Up) => &[(P::Face(Up), 1)],
        BaseMove::Face(Down) => &[(P::Face(Down), 1)],
        BaseMove::Face(Front) => &[(P::Face(Front), 1)],
        BaseMove::Face(Back) => &[(P::Face(Back), 1)],
        BaseMove::Face(Left) => &[(P::Face(Left), 1)],
        BaseMove::Face(Right) => &[(P::Face(Right), 1)],
        BaseMove::Slice(Middle) => &[(P::Slice(Middle), 1)],
        BaseMove::Slice(Equator) => &[(P::Slice(Equator), 1)],
        BaseMove::Slice(Standing) => &[(P::Slice(Standing), 1)],
        BaseMove::Wide(Right, _) => &[(P::Face(Right), 1), (P::Slice(Middle), 3)],
        BaseMove::Wide(Left, _) => &[(P::Face(Left), 1), (P::Slice(Middle), 1)],
        BaseMove::Wide(Up, _) => &[(P::Face(Up), 1), (P::Slice(Equator), 3)],
        BaseMove::Wide(Down, _) => &[(P::Face(Down), 1), (P::Slice(Equator), 1)],
        BaseMove::Wide(Front, _) => &[(P::Face(Front), 1), (P::Slice(Standing), 1)],
        BaseMove::Wide(Back, _) => &[(P::Face(Back), 1), (P::Slice(Standing), 3)],
        BaseMove::Rotation(RotationAxis::X) => {
            &[(P::Face(Right), 1), (P::Slice(Middle), 3), (P::Face(Left), 3)]
        }
        BaseMove::Rotation(RotationAxis::Y) => {
            &[(P::Face(Up), 1), (P::Slice(Equator), 3), (P::Face(Down), 3)]
        }
        BaseMove::Rotation(RotationAxis::Z) => {
            &[(P::Face(Front), 1), (P::Slice(Standing), 1), (P::Face(Back), 3)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{expand, rotate_face_clockwise, Primitive, FACE_ROTATION_MAP};
    use crate::notation::BaseMove;
    use crate::state::{Color, CubeState, FaceName, CENTER_INDEX};

    #[test]
    fn rotation_map_is_a_permutation_fixing_the_center() {
        let mut seen = [false; 9];
        for source in FACE_ROTATION_MAP {
            assert!(!seen[source]);
            seen[source] = true;
        }
        assert_eq!(FACE_ROTATION_MAP[CENTER_INDEX], CENTER_INDEX);
    }

    #[test]
    fn four_face_rotations_are_identity() {
        let mut stickers = [
            Color::White,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Orange,
            Color::Red,
            Color::White,
            Color::Yellow,
            Color::Green,
        ];
        let original = stickers;
        rotate_face_clockwise(&mut stickers);
        assert_eq!(stickers[0], original[6]);
        assert_eq!(stickers[2], original[0]);
        for _ in 0..3 {
            rotate_face_clockwise(&mut stickers);
        }
        assert_eq!(stickers, original);
    }

    #[test]
    fn every_cycle_touches_twelve_distinct_stickers() {
        for primitive in Primitive::ALL {
            let mut positions: Vec<(FaceName, usize)> = primitive
                .cycle()
                .iter()
                .flat_map(|strip| strip.indices.map(|i| (strip.face, i)))
                .collect();
            positions.sort_unstable();
            positions.dedup();
            assert_eq!(positions.len(), 12, "{primitive:?}");
        }
    }

    #[test]
    fn face_cycles_never_touch_the_turned_face() {
        for face in FaceName::ALL {
            let cycle = Primitive::Face(face).cycle();
            assert!(cycle.iter().all(|strip| strip.face != face));
            assert!(cycle.iter().all(|strip| strip.face != face.opposite()));
        }
    }

    #[test]
    fn every_primitive_has_order_four() {
        for primitive in Primitive::ALL {
            let start = CubeState::default().with_sticker(FaceName::Front, 1, Color::Red);
            let mut state = start;
            primitive.apply(&mut state);
            assert_ne!(state, start, "{primitive:?} moved nothing");
            for _ in 0..3 {
                primitive.apply(&mut state);
            }
            assert_eq!(state, start, "{primitive:?}");
        }
    }

    #[test]
    fn wide_spellings_share_an_expansion() {
        for (suffix, lower) in [("Rw", "r"), ("Lw", "l"), ("Uw", "u"), ("Dw", "d"), ("Fw", "f"), ("Bw", "b")] {
            let a = BaseMove::from_symbol(suffix).unwrap();
            let b = BaseMove::from_symbol(lower).unwrap();
            assert_eq!(expand(a), expand(b));
        }
    }
}
