//! Non-failing notation checks and stored-record consistency reports.

use thiserror::Error;

use crate::algorithm::AlgorithmRecord;
use crate::error::ParseError;
use crate::notation::{parse_algorithm, parse_move};

/// Returns whether `input` parses as a single move.
#[must_use]
pub fn is_valid_move(input: &str) -> bool {
    parse_move(input).is_ok()
}

/// Returns whether `notation` parses as an algorithm.
#[must_use]
pub fn is_valid_algorithm(notation: &str) -> bool {
    parse_algorithm(notation).is_ok()
}

/// One problem found in an [`AlgorithmRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ValidationIssue {
    /// The notation string does not parse.
    #[error("Invalid notation: \"{notation}\" ({source})")]
    InvalidNotation {
        /// The stored notation.
        notation: String,
        /// Why it failed.
        source: ParseError,
    },
    /// The record has no move list.
    #[error("Moves array is missing or invalid")]
    MissingMoves,
    /// Parsed and stored move lists differ in length.
    #[error("Move count mismatch: notation has {parsed} moves but moves array has {stored}")]
    MoveCountMismatch {
        /// Moves parsed from the notation.
        parsed: usize,
        /// Moves in the stored list.
        stored: usize,
    },
    /// Parsed and stored moves differ at one position.
    #[error(
        "Move mismatch at position {position}: notation has \"{parsed}\" but moves array has \"{stored}\""
    )]
    MoveMismatch {
        /// Zero-based position.
        position: usize,
        /// Notation of the parsed move.
        parsed: String,
        /// Notation of the stored move.
        stored: String,
    },
    /// The identifier is absent or blank.
    #[error("Algorithm ID is missing or invalid")]
    MissingId,
    /// The entry could not be read as a record at all.
    #[error("Record could not be read: {reason}")]
    MalformedRecord {
        /// Decoder message.
        reason: String,
    },
}

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ValidationReport {
    /// `true` exactly when `errors` is empty.
    pub valid: bool,
    /// Every problem found, in check order.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Builds a report; it is valid exactly when `errors` is empty.
    #[must_use]
    pub fn from_errors(errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Renders each issue as a message line.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Cross-checks a record's notation against its stored move list.
///
/// Each independent problem is reported: an unparsable notation, a missing
/// move list, a length mismatch, every per-position notation mismatch, and a
/// missing or blank id.
#[must_use]
pub fn validate_algorithm_data(record: &AlgorithmRecord) -> ValidationReport {
    let mut errors = Vec::new();

    let parsed = match parse_algorithm(&record.notation) {
        Ok(moves) => Some(moves),
        Err(source) => {
            errors.push(ValidationIssue::InvalidNotation {
                notation: record.notation.clone(),
                source,
            });
            None
        }
    };

    match (&parsed, &record.moves) {
        (_, None) => errors.push(ValidationIssue::MissingMoves),
        (Some(parsed), Some(stored)) => {
            if parsed.len() != stored.len() {
                errors.push(ValidationIssue::MoveCountMismatch {
                    parsed: parsed.len(),
                    stored: stored.len(),
                });
            }
            for (position, (left, right)) in parsed.iter().zip(stored).enumerate() {
                if left.notation() != right.notation {
                    errors.push(ValidationIssue::MoveMismatch {
                        position,
                        parsed: left.notation().to_owned(),
                        stored: right.notation.clone(),
                    });
                }
            }
        }
        (None, Some(_)) => {}
    }

    let has_id = record.id.as_deref().is_some_and(|id| !id.trim().is_empty());
    if !has_id {
        errors.push(ValidationIssue::MissingId);
    }

    ValidationReport::from_errors(errors)
}

/// Identifier and problems of one failing record in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct InvalidAlgorithm {
    /// The record's id, if it had one.
    pub id: Option<String>,
    /// What was wrong.
    pub errors: Vec<ValidationIssue>,
}

/// Aggregate result of [`validate_algorithm_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BatchSummary {
    /// Records checked.
    pub total: usize,
    /// Records without problems.
    pub valid: usize,
    /// Records with at least one problem.
    pub invalid: usize,
    /// Failing records in input order.
    pub invalid_algorithms: Vec<InvalidAlgorithm>,
}

impl BatchSummary {
    /// Summarizes already computed `(id, report)` pairs in input order.
    #[must_use]
    pub fn from_reports<I>(reports: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, ValidationReport)>,
    {
        let mut summary = Self::default();
        for (id, report) in reports {
            summary.total += 1;
            if report.valid {
                summary.valid += 1;
            } else {
                summary.invalid_algorithms.push(InvalidAlgorithm {
                    id,
                    errors: report.errors,
                });
            }
        }
        summary.invalid = summary.invalid_algorithms.len();
        summary
    }
}

/// Validates every record and summarizes the failures.
#[must_use]
pub fn validate_algorithm_batch(records: &[AlgorithmRecord]) -> BatchSummary {
    BatchSummary::from_reports(
        records
            .iter()
            .map(|record| (record.id.clone(), validate_algorithm_data(record))),
    )
}
