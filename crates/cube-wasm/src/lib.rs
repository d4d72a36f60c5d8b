use cube_engine::{
    AlgorithmRecord, BatchSummary, CubeState, EngineConfig, Orientation, ParseError, TraceEvent,
    TraceSink, ValidationIssue, ValidationReport,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

fn js_error(error: &ParseError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(Into::into)
}

/// Trace sink that echoes playback to the browser console.
struct ConsoleTrace;

impl TraceSink for ConsoleTrace {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::AlgorithmStart { moves } => console_log!("playing {} moves", moves),
            TraceEvent::MoveApplied {
                index,
                notation,
                solved,
            } => console_log!("#{} {} solved={}", index, notation, solved),
            TraceEvent::AlgorithmFinished { moves, solved } => {
                console_log!("finished {} moves, solved={}", moves, solved);
            }
        }
    }
}

/// Every intermediate state of an algorithm, for step scrubbing in the UI.
#[derive(Serialize)]
pub struct Playback {
    pub notation: Vec<String>,
    pub states: Vec<CubeState>,
}

#[wasm_bindgen]
pub struct WasmCube {
    state: CubeState,
    config: EngineConfig,
    tracing: bool,
}

impl Default for WasmCube {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCube {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        let config = EngineConfig::default();
        Self {
            state: CubeState::with_config(&config),
            config,
            tracing: false,
        }
    }

    /// Creates a cube with the last layer facing up (`z2` applied).
    #[must_use]
    pub fn with_orientation(last_layer_up: bool) -> Self {
        let mut cube = Self::new();
        cube.config.orientation = if last_layer_up {
            Orientation::LastLayerUp
        } else {
            Orientation::Standard
        };
        cube.reset();
        cube
    }

    /// Echoes every applied move to the console when enabled.
    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    /// Returns to the solved reference state.
    pub fn reset(&mut self) {
        self.state = CubeState::with_config(&self.config);
    }

    /// Applies a whitespace-separated algorithm.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` naming the failing move; the cube is left unchanged.
    pub fn apply(&mut self, notation: &str) -> Result<(), JsValue> {
        let moves = cube_engine::parse_algorithm(notation).map_err(|e| js_error(&e))?;
        self.state = if self.tracing {
            cube_engine::apply_algorithm_traced(&self.state, &moves, &mut ConsoleTrace)
        } else {
            cube_engine::apply_algorithm(&self.state, &moves)
        };
        Ok(())
    }

    /// Applies a single move.
    ///
    /// # Errors
    ///
    /// Throws a JS `Error` when the move does not parse.
    pub fn apply_move(&mut self, notation: &str) -> Result<(), JsValue> {
        let token = cube_engine::parse_move(notation).map_err(|e| js_error(&e))?;
        self.state = cube_engine::apply_move(&self.state, &token);
        Ok(())
    }

    /// Returns every state from the current one through the end of
    /// `notation`, without changing the cube.
    ///
    /// # Errors
    ///
    /// Throws on parse failure or when serialization fails.
    pub fn steps(&self, notation: &str) -> Result<JsValue, JsValue> {
        let moves = cube_engine::parse_algorithm(notation).map_err(|e| js_error(&e))?;
        let playback = Playback {
            notation: moves.iter().map(|m| m.notation().to_owned()).collect(),
            states: cube_engine::apply_algorithm_step_by_step(&self.state, &moves),
        };
        to_js(&playback)
    }

    /// Returns the current state as `{ U: [...], D: [...], ... }`.
    ///
    /// # Errors
    ///
    /// Throws when serialization fails.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state)
    }

    /// Returns the text cube net of the current state.
    #[must_use]
    pub fn net(&self) -> String {
        cube_engine::render_cube_net(&self.state)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }
}

/// Parses an algorithm into an array of `{ base, modifier, notation }`.
///
/// # Errors
///
/// Throws a JS `Error` naming the failing move.
#[wasm_bindgen]
pub fn parse_algorithm(notation: &str) -> Result<JsValue, JsValue> {
    let moves = cube_engine::parse_algorithm(notation).map_err(|e| js_error(&e))?;
    to_js(&moves)
}

/// Returns the notation of the inverse algorithm.
///
/// # Errors
///
/// Throws a JS `Error` naming the failing move.
#[wasm_bindgen]
pub fn invert_algorithm(notation: &str) -> Result<String, JsValue> {
    let moves = cube_engine::parse_algorithm(notation).map_err(|e| js_error(&e))?;
    Ok(cube_engine::moves_to_notation(&cube_engine::invert_algorithm(
        &moves,
    )))
}

#[wasm_bindgen]
#[must_use]
pub fn is_valid_algorithm(notation: &str) -> bool {
    cube_engine::is_valid_algorithm(notation)
}

/// Validates an array of algorithm records and returns the batch summary.
///
/// Entries are decoded one at a time; an entry that is not a record at all is
/// counted as invalid instead of failing the batch.
///
/// # Errors
///
/// Throws when `records` is not an array or the summary cannot be serialized.
#[wasm_bindgen]
pub fn validate_algorithms(records: JsValue) -> Result<JsValue, JsValue> {
    if !js_sys::Array::is_array(&records) {
        return Err(js_sys::Error::new("expected an array of algorithm records").into());
    }
    let entries = js_sys::Array::from(&records);
    let summary = BatchSummary::from_reports(entries.iter().map(|entry| {
        match serde_wasm_bindgen::from_value::<AlgorithmRecord>(entry) {
            Ok(record) => (record.id.clone(), cube_engine::validate_algorithm_data(&record)),
            Err(error) => (
                None,
                ValidationReport::from_errors(vec![ValidationIssue::MalformedRecord {
                    reason: error.to_string(),
                }]),
            ),
        }
    }));
    if summary.invalid > 0 {
        console_log!("{} of {} algorithms failed validation", summary.invalid, summary.total);
    }
    to_js(&summary)
}
