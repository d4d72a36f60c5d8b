//! Host-facing configuration and trace hook contracts.
//!
//! The engine itself is pure; these types only parameterize how a solved
//! reference state is built and let callers observe algorithm playback.

use crate::error::SchemeError;
use crate::state::{Color, FaceName, FACE_COUNT};

/// Face-to-color assignment of a solved cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "[Color; FACE_COUNT]", into = "[Color; FACE_COUNT]")
)]
pub struct ColorScheme {
    colors: [Color; FACE_COUNT],
}

impl ColorScheme {
    /// Western scheme: white up, yellow down, green front, blue back,
    /// orange left, red right.
    pub const STANDARD: Self = Self {
        colors: [
            Color::White,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Orange,
            Color::Red,
        ],
    };

    /// Builds a scheme from colors listed in [`FaceName::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::DuplicateColor`] when two faces share a color.
    pub fn new(colors: [Color; FACE_COUNT]) -> Result<Self, SchemeError> {
        for (i, first) in FaceName::ALL.iter().copied().enumerate() {
            for second in FaceName::ALL.iter().copied().skip(i + 1) {
                if colors[first.index()] == colors[second.index()] {
                    return Err(SchemeError::DuplicateColor {
                        color: colors[first.index()],
                        first,
                        second,
                    });
                }
            }
        }
        Ok(Self { colors })
    }

    /// Returns the solved color of a face.
    #[must_use]
    pub const fn color(&self, face: FaceName) -> Color {
        self.colors[face.index()]
    }

    /// Returns the face whose solved color is `color`.
    #[must_use]
    pub fn face_of(&self, color: Color) -> Option<FaceName> {
        FaceName::ALL
            .into_iter()
            .find(|face| self.colors[face.index()] == color)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<[Color; FACE_COUNT]> for ColorScheme {
    type Error = SchemeError;

    fn try_from(colors: [Color; FACE_COUNT]) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<ColorScheme> for [Color; FACE_COUNT] {
    fn from(scheme: ColorScheme) -> Self {
        scheme.colors
    }
}

/// Orientation the solved reference state is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Orientation {
    /// Scheme colors on their own faces.
    #[default]
    Standard,
    /// Turned over with `z2` so the scheme's down color faces up, the usual
    /// view for last-layer cases.
    LastLayerUp,
}

/// Top-level immutable configuration for building reference states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct EngineConfig {
    /// Face color assignment of the solved cube.
    pub scheme: ColorScheme,
    /// Orientation applied after painting the solved cube.
    pub orientation: Orientation,
}

/// Deterministic trace events emitted during traced algorithm playback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// Playback is about to start.
    AlgorithmStart {
        /// Number of moves that will be applied.
        moves: usize,
    },
    /// One move was applied.
    MoveApplied {
        /// Zero-based position of the move in the algorithm.
        index: usize,
        /// Notation of the applied move.
        notation: String,
        /// Whether the state after this move is solved.
        solved: bool,
    },
    /// Playback finished.
    AlgorithmFinished {
        /// Number of moves applied.
        moves: usize,
        /// Whether the final state is solved.
        solved: bool,
    },
}

/// Sink trait for deterministic trace hooks.
pub trait TraceSink {
    /// Records an event in playback order.
    fn on_event(&mut self, event: TraceEvent);
}

impl TraceSink for Vec<TraceEvent> {
    fn on_event(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorScheme, EngineConfig, Orientation, TraceEvent, TraceSink};
    use crate::error::SchemeError;
    use crate::state::{Color, FaceName};

    #[test]
    fn default_config_uses_standard_scheme_upright() {
        let config = EngineConfig::default();
        assert_eq!(config.scheme, ColorScheme::STANDARD);
        assert_eq!(config.orientation, Orientation::Standard);
    }

    #[test]
    fn standard_scheme_assigns_expected_colors() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.color(FaceName::Up), Color::White);
        assert_eq!(scheme.color(FaceName::Down), Color::Yellow);
        assert_eq!(scheme.color(FaceName::Front), Color::Green);
        assert_eq!(scheme.color(FaceName::Back), Color::Blue);
        assert_eq!(scheme.color(FaceName::Left), Color::Orange);
        assert_eq!(scheme.color(FaceName::Right), Color::Red);
    }

    #[test]
    fn face_of_inverts_color_lookup() {
        let scheme = ColorScheme::STANDARD;
        for face in FaceName::ALL {
            assert_eq!(scheme.face_of(scheme.color(face)), Some(face));
        }
    }

    #[test]
    fn duplicate_colors_are_rejected() {
        let result = ColorScheme::new([
            Color::White,
            Color::Yellow,
            Color::Green,
            Color::Green,
            Color::Orange,
            Color::Red,
        ]);
        assert_eq!(
            result,
            Err(SchemeError::DuplicateColor {
                color: Color::Green,
                first: FaceName::Front,
                second: FaceName::Back,
            })
        );
    }

    #[test]
    fn permuted_scheme_is_accepted() {
        let scheme = ColorScheme::new([
            Color::Yellow,
            Color::White,
            Color::Blue,
            Color::Green,
            Color::Red,
            Color::Orange,
        ])
        .expect("all colors distinct");
        assert_eq!(scheme.color(FaceName::Up), Color::Yellow);
        assert_eq!(scheme.face_of(Color::Orange), Some(FaceName::Right));
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<TraceEvent> = Vec::new();
        sink.on_event(TraceEvent::AlgorithmStart { moves: 0 });
        sink.on_event(TraceEvent::AlgorithmFinished {
            moves: 0,
            solved: true,
        });
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], TraceEvent::AlgorithmStart { moves: 0 });
    }
}
