#![no_main]

use cube_engine::{
    apply_algorithm, apply_algorithm_step_by_step, create_solved_state, invert_algorithm,
    is_valid_algorithm, moves_to_notation, parse_algorithm, parse_move, validate_algorithm_data,
    AlgorithmRecord, StoredMove,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = parse_move(text);
    let parsed = parse_algorithm(text);
    assert_eq!(parsed.is_ok(), is_valid_algorithm(text));

    let Ok(moves) = parsed else {
        return;
    };

    let start = create_solved_state();
    let end = apply_algorithm(&start, &moves);
    let steps = apply_algorithm_step_by_step(&start, &moves);
    assert_eq!(steps.len(), moves.len() + 1);
    assert_eq!(steps.last(), Some(&end));

    let back = apply_algorithm(&end, &invert_algorithm(&moves));
    assert_eq!(back, start);

    let reparsed = parse_algorithm(&moves_to_notation(&moves));
    assert_eq!(reparsed.as_deref(), Ok(moves.as_slice()));

    let record = AlgorithmRecord {
        id: Some("fuzz".into()),
        notation: text.to_owned(),
        moves: Some(StoredMove::list(&moves)),
    };
    assert!(validate_algorithm_data(&record).valid);
});
