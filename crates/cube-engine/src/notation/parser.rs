use std::borrow::Cow;

use super::token::{BaseMove, Modifier, MoveToken};
use crate::error::ParseError;

/// Parses one move such as `R`, `U'`, `F2`, `Rw` or `r'`.
///
/// Surrounding whitespace is ignored. Two-character wide identifiers are
/// tried before single-character bases, so `Rw2` reads as `Rw` + `2`.
///
/// # Errors
///
/// Returns [`ParseError::EmptyMove`] for blank input,
/// [`ParseError::UnknownBase`] when the first character is not a base move,
/// and [`ParseError::InvalidModifier`] when the remainder is not `""`, `'` or
/// `2`.
pub fn parse_move(input: &str) -> Result<MoveToken, ParseError> {
    let token = input.trim();
    let Some(first) = token.chars().next() else {
        return Err(ParseError::EmptyMove);
    };

    let (base, rest) = match token.get(..2).and_then(BaseMove::from_symbol) {
        Some(wide) => (wide, &token[2..]),
        None => {
            let (head, rest) = token.split_at(first.len_utf8());
            let base = BaseMove::from_symbol(head).ok_or_else(|| ParseError::UnknownBase {
                base: head.to_owned(),
                token: token.to_owned(),
            })?;
            (base, rest)
        }
    };

    let modifier = Modifier::from_symbol(rest).ok_or_else(|| ParseError::InvalidModifier {
        modifier: rest.to_owned(),
        token: token.to_owned(),
    })?;

    Ok(MoveToken::from_parts(base, modifier, token.to_owned()))
}

/// Removes every `(...)` group, each ending at the first `)` after its `(`.
///
/// An unmatched `(` is left in place.
fn strip_comments(notation: &str) -> Cow<'_, str> {
    if !notation.contains('(') {
        return Cow::Borrowed(notation);
    }

    let mut out = String::with_capacity(notation.len());
    let mut rest = notation;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Parses a whitespace-separated algorithm.
///
/// Blank input yields an empty list. Parenthesized comments are dropped
/// before splitting.
///
/// # Errors
///
/// Returns [`ParseError::InAlgorithm`] wrapping the first failing token.
pub fn parse_algorithm(notation: &str) -> Result<Vec<MoveToken>, ParseError> {
    if notation.trim().is_empty() {
        return Ok(Vec::new());
    }

    strip_comments(notation)
        .split_whitespace()
        .map(|token| {
            parse_move(token).map_err(|source| ParseError::InAlgorithm {
                token: token.to_owned(),
                algorithm: notation.to_owned(),
                source: Box::new(source),
            })
        })
        .collect()
}

/// Returns the move that undoes `token`.
///
/// The notation is rebuilt canonically from the base and the new modifier.
#[must_use]
pub fn invert_move(token: &MoveToken) -> MoveToken {
    MoveToken::new(token.base(), token.modifier().inverse())
}

/// Reverses the sequence and inverts every move.
#[must_use]
pub fn invert_algorithm(moves: &[MoveToken]) -> Vec<MoveToken> {
    moves.iter().rev().map(invert_move).collect()
}

/// Joins move notations with single spaces.
#[must_use]
pub fn moves_to_notation(moves: &[MoveToken]) -> String {
    moves
        .iter()
        .map(MoveToken::notation)
        .collect::<Vec<_>>()
        .join(" ")
}
