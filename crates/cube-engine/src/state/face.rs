use std::fmt;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Number of stickers on one face (3x3, row-major).
pub const STICKERS_PER_FACE: usize = 9;
/// Total sticker count of a state.
pub const STICKER_COUNT: usize = FACE_COUNT * STICKERS_PER_FACE;
/// Index of the center sticker within a face.
pub const CENTER_INDEX: usize = 4;

/// One of the six sticker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Color {
    White = 0,
    Yellow = 1,
    Green = 2,
    Blue = 3,
    Orange = 4,
    Red = 5,
}

impl Color {
    /// All colors in declaration order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::White,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Orange,
        Self::Red,
    ];

    /// Returns the lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// Returns the upper-case initial used by the text renderers.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::White => 'W',
            Self::Yellow => 'Y',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Orange => 'O',
            Self::Red => 'R',
        }
    }

    /// Decodes an upper-case initial back into a color.
    #[must_use]
    pub const fn from_initial(initial: char) -> Option<Self> {
        match initial {
            'W' => Some(Self::White),
            'Y' => Some(Self::Yellow),
            'G' => Some(Self::Green),
            'B' => Some(Self::Blue),
            'O' => Some(Self::Orange),
            'R' => Some(Self::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum FaceName {
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    Up = 0,
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    Down = 1,
    #[cfg_attr(feature = "serde", serde(rename = "F"))]
    Front = 2,
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    Back = 3,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    Left = 4,
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Right = 5,
}

impl FaceName {
    /// All faces in storage order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::Up,
        Self::Down,
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
    ];

    /// Returns the storage index for this face (`0..=5`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the notation letter for this face.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    /// Decodes a notation letter into a face.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'F' => Some(Self::Front),
            'B' => Some(Self::Back),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, FaceName, FACE_COUNT, STICKER_COUNT};

    #[test]
    fn sticker_count_matches_six_faces_of_nine() {
        assert_eq!(STICKER_COUNT, 54);
    }

    #[test]
    fn face_index_and_symbol_roundtrip() {
        for (index, face) in FaceName::ALL.iter().copied().enumerate() {
            assert_eq!(face.index(), index);
            assert_eq!(FaceName::from_symbol(face.symbol()), Some(face));
        }
        assert!(FaceName::from_symbol('X').is_none());
    }

    #[test]
    fn opposite_is_an_involution_without_fixed_points() {
        for face in FaceName::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn color_initials_are_distinct_and_decode() {
        let mut initials: Vec<char> = Color::ALL.iter().map(|c| c.initial()).collect();
        initials.sort_unstable();
        initials.dedup();
        assert_eq!(initials.len(), FACE_COUNT);

        for color in Color::ALL {
            assert_eq!(Color::from_initial(color.initial()), Some(color));
        }
        assert!(Color::from_initial('w').is_none());
    }
}
