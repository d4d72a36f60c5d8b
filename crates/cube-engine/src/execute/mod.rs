//! Move executor.
//!
//! Every base move expands to a short sequence of the nine clockwise
//! primitives (six face turns and three slice turns). A modifier repeats that
//! expansion: once for clockwise, three times for prime, twice for double.
//!
//! All public entry points take the input state by reference and return new
//! values; only a private copy is ever mutated.

mod primitives;

pub use primitives::{
    expand, rotate_face_clockwise, Primitive, StickerCycle, Strip, FACE_ROTATION_MAP,
};

use crate::api::{TraceEvent, TraceSink};
use crate::notation::{BaseMove, MoveToken, RotationAxis};
use crate::state::CubeState;

fn apply_base(state: &mut CubeState, base: BaseMove, quarter_turns: u8) {
    let steps = expand(base);
    for _ in 0..quarter_turns {
        for &(primitive, turns) in steps {
            for _ in 0..turns {
                primitive.apply(state);
            }
        }
    }
}

/// Applies one move and returns the resulting state.
#[must_use]
pub fn apply_move(state: &CubeState, token: &MoveToken) -> CubeState {
    let mut next = *state;
    apply_base(&mut next, token.base(), token.modifier().quarter_turns());
    next
}

/// Applies `moves` in order and returns the final state.
///
/// An empty move list returns a state equal to the input.
#[must_use]
pub fn apply_algorithm(state: &CubeState, moves: &[MoveToken]) -> CubeState {
    moves
        .iter()
        .fold(*state, |current, token| apply_move(&current, token))
}

/// Returns the starting state followed by the state after each move.
///
/// The result always has `moves.len() + 1` entries.
#[must_use]
pub fn apply_algorithm_step_by_step(state: &CubeState, moves: &[MoveToken]) -> Vec<CubeState> {
    let mut states = Vec::with_capacity(moves.len() + 1);
    states.push(*state);
    let mut current = *state;
    for token in moves {
        current = apply_move(&current, token);
        states.push(current);
    }
    states
}

/// Turns the whole cube over with `z2`, bringing the down face on top.
#[must_use]
pub fn apply_z2_rotation(state: &CubeState) -> CubeState {
    let mut next = *state;
    apply_base(&mut next, BaseMove::Rotation(RotationAxis::Z), 2);
    next
}

/// Applies `moves` like [`apply_algorithm`], reporting each step to `sink`.
pub fn apply_algorithm_traced(
    state: &CubeState,
    moves: &[MoveToken],
    sink: &mut dyn TraceSink,
) -> CubeState {
    sink.on_event(TraceEvent::AlgorithmStart { moves: moves.len() });

    let mut current = *state;
    for (index, token) in moves.iter().enumerate() {
        current = apply_move(&current, token);
        sink.on_event(TraceEvent::MoveApplied {
            index,
            notation: token.notation().to_owned(),
            solved: current.is_solved(),
        });
    }

    sink.on_event(TraceEvent::AlgorithmFinished {
        moves: moves.len(),
        solved: current.is_solved(),
    });
    current
}
