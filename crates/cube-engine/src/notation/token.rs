use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::state::FaceName;

/// Inner slice layer turned by `M`, `E` and `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceLayer {
    /// `M`, between L and R, turning like L.
    Middle,
    /// `E`, between U and D, turning like D.
    Equator,
    /// `S`, between F and B, turning like F.
    Standing,
}

/// Whole-cube rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// `x`, turning like R.
    X,
    /// `y`, turning like U.
    Y,
    /// `z`, turning like F.
    Z,
}

/// Spelling of a wide (two-layer) move. Both spellings turn the same layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideStyle {
    /// `Rw`, `Uw`, ...
    Suffix,
    /// `r`, `u`, ...
    Lowercase,
}

/// Base move identifier without its modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum BaseMove {
    /// Outer face turn.
    Face(FaceName),
    /// Inner slice turn.
    Slice(SliceLayer),
    /// Whole-cube rotation.
    Rotation(RotationAxis),
    /// Outer face plus the adjacent inner slice.
    Wide(FaceName, WideStyle),
}

/// Every recognized base identifier and the move it names.
pub const BASE_MOVE_TABLE: [(&str, BaseMove); 24] = [
    ("U", BaseMove::Face(FaceName::Up)),
    ("D", BaseMove::Face(FaceName::Down)),
    ("F", BaseMove::Face(FaceName::Front)),
    ("B", BaseMove::Face(FaceName::Back)),
    ("L", BaseMove::Face(FaceName::Left)),
    ("R", BaseMove::Face(FaceName::Right)),
    ("M", BaseMove::Slice(SliceLayer::Middle)),
    ("E", BaseMove::Slice(SliceLayer::Equator)),
    ("S", BaseMove::Slice(SliceLayer::Standing)),
    ("x", BaseMove::Rotation(RotationAxis::X)),
    ("y", BaseMove::Rotation(RotationAxis::Y)),
    ("z", BaseMove::Rotation(RotationAxis::Z)),
    ("Uw", BaseMove::Wide(FaceName::Up, WideStyle::Suffix)),
    ("Dw", BaseMove::Wide(FaceName::Down, WideStyle::Suffix)),
    ("Fw", BaseMove::Wide(FaceName::Front, WideStyle::Suffix)),
    ("Bw", BaseMove::Wide(FaceName::Back, WideStyle::Suffix)),
    ("Lw", BaseMove::Wide(FaceName::Left, WideStyle::Suffix)),
    ("Rw", BaseMove::Wide(FaceName::Right, WideStyle::Suffix)),
    ("u", BaseMove::Wide(FaceName::Up, WideStyle::Lowercase)),
    ("d", BaseMove::Wide(FaceName::Down, WideStyle::Lowercase)),
    ("f", BaseMove::Wide(FaceName::Front, WideStyle::Lowercase)),
    ("b", BaseMove::Wide(FaceName::Back, WideStyle::Lowercase)),
    ("l", BaseMove::Wide(FaceName::Left, WideStyle::Lowercase)),
    ("r", BaseMove::Wide(FaceName::Right, WideStyle::Lowercase)),
];

impl BaseMove {
    /// All base moves in table order.
    pub const ALL: [Self; 24] = {
        let mut all = [Self::Face(FaceName::Up); 24];
        let mut i = 0;
        while i < BASE_MOVE_TABLE.len() {
            all[i] = BASE_MOVE_TABLE[i].1;
            i += 1;
        }
        all
    };

    /// Looks up a base identifier, case-sensitively.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BASE_MOVE_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, base)| *base)
    }

    /// Returns the notation identifier of this base.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Face(face) => match face {
                FaceName::Up => "U",
                FaceName::Down => "D",
                FaceName::Front => "F",
                FaceName::Back => "B",
                FaceName::Left => "L",
                FaceName::Right => "R",
            },
            Self::Slice(SliceLayer::Middle) => "M",
            Self::Slice(SliceLayer::Equator) => "E",
            Self::Slice(SliceLayer::Standing) => "S",
            Self::Rotation(RotationAxis::X) => "x",
            Self::Rotation(RotationAxis::Y) => "y",
            Self::Rotation(RotationAxis::Z) => "z",
            Self::Wide(face, WideStyle::Suffix) => match face {
                FaceName::Up => "Uw",
                FaceName::Down => "Dw",
                FaceName::Front => "Fw",
                FaceName::Back => "Bw",
                FaceName::Left => "Lw",
                FaceName::Right => "Rw",
            },
            Self::Wide(face, WideStyle::Lowercase) => match face {
                FaceName::Up => "u",
                FaceName::Down => "d",
                FaceName::Front => "f",
                FaceName::Back => "b",
                FaceName::Left => "l",
                FaceName::Right => "r",
            },
        }
    }
}

impl fmt::Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<String> for BaseMove {
    type Error = ParseError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&symbol).ok_or_else(|| ParseError::UnknownBase {
            token: symbol.clone(),
            base: symbol,
        })
    }
}

impl From<BaseMove> for String {
    fn from(base: BaseMove) -> Self {
        base.symbol().to_owned()
    }
}

/// Turn amount suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Modifier {
    /// No suffix: a quarter turn clockwise.
    #[default]
    Clockwise,
    /// `'`: a quarter turn counter-clockwise.
    Prime,
    /// `2`: a half turn.
    Double,
}

impl Modifier {
    /// All modifiers.
    pub const ALL: [Self; 3] = [Self::Clockwise, Self::Prime, Self::Double];

    /// Returns the notation suffix.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Clockwise => "",
            Self::Prime => "'",
            Self::Double => "2",
        }
    }

    /// Decodes a notation suffix.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "" => Some(Self::Clockwise),
            "'" => Some(Self::Prime),
            "2" => Some(Self::Double),
            _ => None,
        }
    }

    /// Number of clockwise quarter turns this modifier stands for.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::Prime => 3,
            Self::Double => 2,
        }
    }

    /// Returns the modifier that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::Prime,
            Self::Prime => Self::Clockwise,
            Self::Double => Self::Double,
        }
    }
}

impl TryFrom<String> for Modifier {
    type Error = ParseError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        Self::from_symbol(&symbol).ok_or_else(|| ParseError::InvalidModifier {
            token: symbol.clone(),
            modifier: symbol,
        })
    }
}

impl From<Modifier> for String {
    fn from(modifier: Modifier) -> Self {
        modifier.symbol().to_owned()
    }
}

/// One parsed move.
///
/// `notation` keeps the exact trimmed text the move was parsed from, so an
/// algorithm can be written back out the way its author spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MoveToken {
    base: BaseMove,
    modifier: Modifier,
    notation: String,
}

impl MoveToken {
    /// Builds a token with canonical notation `<base><modifier>`.
    #[must_use]
    pub fn new(base: BaseMove, modifier: Modifier) -> Self {
        Self {
            base,
            modifier,
            notation: format!("{}{}", base.symbol(), modifier.symbol()),
        }
    }

    pub(crate) const fn from_parts(base: BaseMove, modifier: Modifier, notation: String) -> Self {
        Self {
            base,
            modifier,
            notation,
        }
    }

    /// Base move identifier.
    #[must_use]
    pub const fn base(&self) -> BaseMove {
        self.base
    }

    /// Turn amount.
    #[must_use]
    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Source text of this move.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

impl FromStr for MoveToken {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_move(s)
    }
}
