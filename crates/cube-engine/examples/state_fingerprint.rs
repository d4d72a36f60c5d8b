//! Deterministic state fingerprint used for cross-host comparison.
//!
//! Plays a fixed set of algorithms step by step and folds every intermediate
//! sticker into an FNV-1a hash.

use cube_engine::{
    apply_algorithm_step_by_step, create_solved_state, parse_algorithm, CubeState,
};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

const ALGORITHMS: [&str; 6] = [
    "R U R' U'",
    "R U R' U' R' F R2 U' R' U' R U R' F'",
    "M2 U M U2 M' U M2",
    "r U R' U' r' F R F'",
    "x y' z2 Rw Lw' Uw2 Dw Fw' Bw",
    "F R U' R' U' R U R' F' R U R' U' R' F R F'",
];

fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for byte in bytes {
        *hash ^= u64::from(*byte);
        *hash = hash.wrapping_mul(0x1000_0000_01B3);
    }
}

fn hash_state(hash: &mut u64, state: &CubeState) {
    for (_, stickers) in state.faces() {
        let bytes = (*stickers).map(|color| color as u8);
        hash_bytes(hash, &bytes);
    }
}

fn fingerprint() -> String {
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    let mut state = create_solved_state();

    for notation in ALGORITHMS {
        let moves = parse_algorithm(notation).expect("fingerprint algorithms parse");
        let steps = apply_algorithm_step_by_step(&state, &moves);
        hash_bytes(&mut hash, &(steps.len() as u64).to_le_bytes());
        for step in &steps {
            hash_state(&mut hash, step);
        }
        if let Some(last) = steps.last() {
            state = *last;
        }
    }

    format!("{hash:016x}")
}

fn main() {
    println!("{}", fingerprint());
}
