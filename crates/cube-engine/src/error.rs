use thiserror::Error;

use crate::state::{Color, FaceName};

/// Coarse classification of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ParseErrorClass {
    /// Nothing left after trimming.
    Empty,
    /// Base move identifier not in the notation table.
    Base,
    /// Trailing modifier not one of `""`, `'`, `2`.
    Modifier,
}

/// Notation parse failure.
///
/// Every variant names the offending substring. Algorithm-level failures wrap
/// the per-token error together with the full algorithm string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ParseError {
    /// Move string was empty or whitespace only.
    #[error("move string cannot be empty")]
    EmptyMove,
    /// Base identifier is not a face, slice, rotation or wide move.
    #[error("invalid move '{base}' in '{token}'")]
    UnknownBase {
        /// The unrecognized base substring.
        base: String,
        /// The trimmed move token it was found in.
        token: String,
    },
    /// Trailing modifier is not clockwise, prime or double.
    #[error("invalid modifier '{modifier}' in move '{token}'")]
    InvalidModifier {
        /// The unrecognized modifier substring.
        modifier: String,
        /// The trimmed move token it was found in.
        token: String,
    },
    /// A single token failed inside a whitespace-separated algorithm.
    #[error("failed to parse move '{token}' in algorithm '{algorithm}': {source}")]
    InAlgorithm {
        /// The token that failed.
        token: String,
        /// The original algorithm string.
        algorithm: String,
        /// The token-level failure.
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the innermost token-level error, unwrapping algorithm context.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::InAlgorithm { source, .. } => source.root(),
            Self::EmptyMove | Self::UnknownBase { .. } | Self::InvalidModifier { .. } => self,
        }
    }

    /// Returns the failure class of the innermost error.
    #[must_use]
    pub fn class(&self) -> ParseErrorClass {
        match self.root() {
            Self::UnknownBase { .. } => ParseErrorClass::Base,
            Self::InvalidModifier { .. } => ParseErrorClass::Modifier,
            Self::EmptyMove | Self::InAlgorithm { .. } => ParseErrorClass::Empty,
        }
    }

    /// Returns the substring that caused the failure (empty for [`Self::EmptyMove`]).
    #[must_use]
    pub fn offending(&self) -> &str {
        match self.root() {
            Self::UnknownBase { base, .. } => base,
            Self::InvalidModifier { modifier, .. } => modifier,
            Self::EmptyMove | Self::InAlgorithm { .. } => "",
        }
    }
}

/// Rejected custom color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SchemeError {
    /// Two faces were assigned the same color.
    #[error("color {color} assigned to both {first} and {second}")]
    DuplicateColor {
        /// The repeated color.
        color: Color,
        /// First face carrying it.
        first: FaceName,
        /// Second face carrying it.
        second: FaceName,
    },
}

#[cfg(test)]
mod tests {
    use super::{ParseError, ParseErrorClass, SchemeError};
    use crate::state::{Color, FaceName};

    fn nested() -> ParseError {
        ParseError::InAlgorithm {
            token: "R3".into(),
            algorithm: "R U R3".into(),
            source: Box::new(ParseError::InvalidModifier {
                modifier: "3".into(),
                token: "R3".into(),
            }),
        }
    }

    #[test]
    fn algorithm_context_wraps_token_message() {
        let message = nested().to_string();
        assert_eq!(
            message,
            "failed to parse move 'R3' in algorithm 'R U R3': invalid modifier '3' in move 'R3'"
        );
    }

    #[test]
    fn root_and_class_see_through_algorithm_context() {
        let error = nested();
        assert_eq!(error.class(), ParseErrorClass::Modifier);
        assert_eq!(error.offending(), "3");
        assert!(matches!(error.root(), ParseError::InvalidModifier { .. }));
    }

    #[test]
    fn empty_move_has_no_offending_substring() {
        assert_eq!(ParseError::EmptyMove.class(), ParseErrorClass::Empty);
        assert_eq!(ParseError::EmptyMove.offending(), "");
        assert_eq!(ParseError::EmptyMove.to_string(), "move string cannot be empty");
    }

    #[test]
    fn unknown_base_names_the_base_and_token() {
        let error = ParseError::UnknownBase {
            base: "X".into(),
            token: "X2".into(),
        };
        assert_eq!(error.to_string(), "invalid move 'X' in 'X2'");
        assert_eq!(error.class(), ParseErrorClass::Base);
    }

    #[test]
    fn scheme_error_names_both_faces() {
        let error = SchemeError::DuplicateColor {
            color: Color::Red,
            first: FaceName::Left,
            second: FaceName::Right,
        };
        assert_eq!(error.to_string(), "color red assigned to both L and R");
    }
}
