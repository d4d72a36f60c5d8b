//! Parsed algorithms and the stored record shape that data files carry.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::notation::{invert_algorithm, moves_to_notation, parse_algorithm, MoveToken};

/// A notation string together with the moves parsed from it.
///
/// Only [`Algorithm::parse`] (and the conversions built on it) produce values,
/// so `moves` always matches `notation`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Algorithm {
    id: Option<String>,
    notation: String,
    moves: Vec<MoveToken>,
}

impl Algorithm {
    /// Parses `notation` into an anonymous algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ParseError`] from [`parse_algorithm`].
    pub fn parse(notation: &str) -> Result<Self, ParseError> {
        Ok(Self {
            id: None,
            moves: parse_algorithm(notation)?,
            notation: notation.to_owned(),
        })
    }

    /// Attaches an identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Notation as written.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Parsed moves in order.
    #[must_use]
    pub fn moves(&self) -> &[MoveToken] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the algorithm has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the algorithm that undoes this one.
    ///
    /// The inverse keeps the identifier and carries canonical notation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let moves = invert_algorithm(&self.moves);
        Self {
            id: self.id.clone(),
            notation: moves_to_notation(&moves),
            moves,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<AlgorithmRecord> for Algorithm {
    type Error = ParseError;

    /// Re-parses the record's notation; the stored move list is ignored.
    fn try_from(record: AlgorithmRecord) -> Result<Self, Self::Error> {
        let mut algorithm = Self::parse(&record.notation)?;
        algorithm.id = record.id;
        Ok(algorithm)
    }
}

/// One entry of a stored move list.
///
/// Only `notation` takes part in validation, so entries that carry nothing
/// else still decode. `base` and `modifier` are kept verbatim when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct StoredMove {
    /// Notation of the stored move.
    pub notation: String,
    /// Stored base symbol, unchecked.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub base: Option<String>,
    /// Stored modifier symbol, unchecked.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub modifier: Option<String>,
}

impl StoredMove {
    /// Builds a stored move list from parsed tokens.
    #[must_use]
    pub fn list(moves: &[MoveToken]) -> Vec<Self> {
        moves.iter().map(Self::from).collect()
    }
}

impl From<&MoveToken> for StoredMove {
    fn from(token: &MoveToken) -> Self {
        Self {
            notation: token.notation().to_owned(),
            base: Some(token.base().symbol().to_owned()),
            modifier: Some(token.modifier().symbol().to_owned()),
        }
    }
}

impl From<&str> for StoredMove {
    fn from(notation: &str) -> Self {
        Self {
            notation: notation.to_owned(),
            ..Self::default()
        }
    }
}

/// Algorithm as stored in a data file, possibly inconsistent.
///
/// This is the input of [`crate::validate::validate_algorithm_data`]. With the
/// `serde` feature, an `id` that is not a string and a `moves` field that is
/// not a list of moves decode as `None`, so the validator reports them
/// instead of the whole file failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AlgorithmRecord {
    /// Identifier; blank or absent ids are reported by the validator.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::option"))]
    pub id: Option<String>,
    /// Notation string.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notation: String,
    /// Stored move list.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::option"))]
    pub moves: Option<Vec<StoredMove>>,
}

impl From<Algorithm> for AlgorithmRecord {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            moves: Some(StoredMove::list(&algorithm.moves)),
            id: algorithm.id,
            notation: algorithm.notation,
        }
    }
}

#[cfg(feature = "serde")]
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Value(T),
        Other(IgnoredAny),
    }

    /// Decodes `T`, or `None` when the value has some other shape.
    pub(super) fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match Loose::<T>::deserialize(deserializer)? {
            Loose::Value(value) => Some(value),
            Loose::Other(IgnoredAny) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, AlgorithmRecord, StoredMove};

    #[test]
    fn parse_keeps_notation_and_moves_in_step() {
        let algorithm = Algorithm::parse("R U R' U'").unwrap().with_id("sexy");
        assert_eq!(algorithm.id(), Some("sexy"));
        assert_eq!(algorithm.len(), 4);
        assert_eq!(algorithm.to_string(), "R U R' U'");
    }

    #[test]
    fn inverse_rebuilds_notation() {
        let algorithm: Algorithm = "R U2 F'".parse().unwrap();
        assert_eq!(algorithm.inverse().notation(), "F U2 R'");
        assert_eq!(algorithm.inverse().inverse().moves(), algorithm.moves());
    }

    #[test]
    fn blank_notation_is_an_empty_algorithm() {
        let algorithm = Algorithm::parse("   ").unwrap();
        assert!(algorithm.is_empty());
        assert_eq!(algorithm.inverse().notation(), "");
    }

    #[test]
    fn record_conversion_reparses_notation() {
        let record = AlgorithmRecord {
            id: Some("t-perm".into()),
            notation: "R U R'".into(),
            moves: None,
        };
        let algorithm = Algorithm::try_from(record).unwrap();
        assert_eq!(algorithm.len(), 3);
        assert_eq!(algorithm.id(), Some("t-perm"));

        let back = AlgorithmRecord::from(algorithm);
        let stored = back.moves.unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[2].notation, "R'");
        assert_eq!(stored[2].base.as_deref(), Some("R"));
        assert_eq!(stored[2].modifier.as_deref(), Some("'"));
    }

    #[test]
    fn notation_only_stored_move() {
        let stored = StoredMove::from("U2");
        assert_eq!(stored.notation, "U2");
        assert_eq!(stored.base, None);
    }

    #[test]
    fn bad_record_fails_to_convert() {
        let record = AlgorithmRecord {
            notation: "R Q".into(),
            ..AlgorithmRecord::default()
        };
        assert!(Algorithm::try_from(record).is_err());
    }
}
