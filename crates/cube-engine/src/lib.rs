//! Deterministic 3x3x3 cube simulation engine.
//!
//! Notation text is parsed into [`MoveToken`]s, which the executor applies to
//! immutable [`CubeState`] values. The validator checks stored algorithm
//! records against their notation without failing.

/// Error types for notation parsing and configuration.
pub mod error;
pub use error::{ParseError, ParseErrorClass, SchemeError};

/// Public host-facing configuration and trace hook contracts.
pub mod api;
pub use api::{ColorScheme, EngineConfig, Orientation, TraceEvent, TraceSink};

/// Sticker state model and text renderings.
pub mod state;
pub use state::{
    clone_state, create_solved_state, is_state_solved, render_cube_net, state_to_string,
    states_equal, Color, CubeState, FaceName, FaceStickers, CENTER_INDEX, FACE_COUNT,
    STICKERS_PER_FACE, STICKER_COUNT,
};

/// Move notation tokens and parser.
pub mod notation;
pub use notation::{
    invert_algorithm, invert_move, moves_to_notation, parse_algorithm, parse_move, BaseMove,
    Modifier, MoveToken, RotationAxis, SliceLayer, WideStyle, BASE_MOVE_TABLE,
};

/// Parsed algorithms and stored algorithm records.
pub mod algorithm;
pub use algorithm::{Algorithm, AlgorithmRecord, StoredMove};

/// Move execution over cube states.
pub mod execute;
pub use execute::{
    apply_algorithm, apply_algorithm_step_by_step, apply_algorithm_traced, apply_move,
    apply_z2_rotation, Primitive,
};

/// Notation validity checks and record consistency reports.
pub mod validate;
pub use validate::{
    is_valid_algorithm, is_valid_move, validate_algorithm_batch, validate_algorithm_data,
    BatchSummary, InvalidAlgorithm, ValidationIssue, ValidationReport,
};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
#[cfg(test)]
use serde_json as _;
