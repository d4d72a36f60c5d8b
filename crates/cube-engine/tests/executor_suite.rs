//! Move executor verification suite: cube-net fixtures, move orders and
//! commutation.

#![allow(clippy::pedantic, clippy::nursery, clippy::too_many_lines)]

use cube_engine::{
    apply_algorithm, apply_algorithm_step_by_step, apply_move, apply_z2_rotation,
    create_solved_state, parse_algorithm, parse_move, render_cube_net, states_equal, CubeState,
    BASE_MOVE_TABLE,
};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use serde_json as _;
use thiserror as _;

fn run(notation: &str) -> CubeState {
    let moves = parse_algorithm(notation).expect("fixture notation parses");
    apply_algorithm(&create_solved_state(), &moves)
}

fn net(lines: [&str; 9]) -> String {
    lines.join("\n")
}

#[rstest]
#[case::r_f_sledge("R' F R F'", [
    "    WWG",
    "    WWG",
    "    BRR",
    "OOW RGG YWW OBB",
    "OOO GGW RRR BBB",
    "OOO GGW RRR BBB",
    "    YYG",
    "    YYY",
    "    YYY",
])]
#[case::sexy_three_times("R U R' U' R U R' U' R U R' U'", [
    "    BWB",
    "    WWW",
    "    WWY",
    "ROO GGR GRO WBW",
    "OOO GGG RRR BBB",
    "OOO GGR GRR BBB",
    "    YYW",
    "    YYY",
    "    YYY",
])]
#[case::t_perm("R U R' U' R' F R2 U' R' U' R U R' F'", [
    "    WWW",
    "    WWW",
    "    WWW",
    "ORO GGR BOG RBB",
    "OOO GGG RRR BBB",
    "OOO GGG RRR BBB",
    "    YYY",
    "    YYY",
    "    YYY",
])]
#[case::x("x", [
    "    GGG",
    "    GGG",
    "    GGG",
    "OOO YYY RRR WWW",
    "OOO YYY RRR WWW",
    "OOO YYY RRR WWW",
    "    BBB",
    "    BBB",
    "    BBB",
])]
#[case::y("y", [
    "    WWW",
    "    WWW",
    "    WWW",
    "GGG RRR BBB OOO",
    "GGG RRR BBB OOO",
    "GGG RRR BBB OOO",
    "    YYY",
    "    YYY",
    "    YYY",
])]
#[case::z("z", [
    "    OOO",
    "    OOO",
    "    OOO",
    "YYY GGG WWW BBB",
    "YYY GGG WWW BBB",
    "YYY GGG WWW BBB",
    "    RRR",
    "    RRR",
    "    RRR",
])]
#[case::z2("z2", [
    "    YYY",
    "    YYY",
    "    YYY",
    "RRR GGG OOO BBB",
    "RRR GGG OOO BBB",
    "RRR GGG OOO BBB",
    "    WWW",
    "    WWW",
    "    WWW",
])]
#[case::m_follows_l("M", [
    "    WBW",
    "    WBW",
    "    WBW",
    "OOO GWG RRR BYB",
    "OOO GWG RRR BYB",
    "OOO GWG RRR BYB",
    "    YGY",
    "    YGY",
    "    YGY",
])]
#[case::e_follows_d("E", [
    "    WWW",
    "    WWW",
    "    WWW",
    "OOO GGG RRR BBB",
    "BBB OOO GGG RRR",
    "OOO GGG RRR BBB",
    "    YYY",
    "    YYY",
    "    YYY",
])]
#[case::s_follows_f("S", [
    "    WWW",
    "    OOO",
    "    WWW",
    "OYO GGG RWR BBB",
    "OYO GGG RWR BBB",
    "OYO GGG RWR BBB",
    "    YYY",
    "    RRR",
    "    YYY",
])]
#[case::lowercase_r("r", [
    "    WGG",
    "    WGG",
    "    WGG",
    "OOO GYY RRR WWB",
    "OOO GYY RRR WWB",
    "OOO GYY RRR WWB",
    "    YBB",
    "    YBB",
    "    YBB",
])]
#[case::wide_u_double("Uw2", [
    "    WWW",
    "    WWW",
    "    WWW",
    "RRR BBB OOO GGG",
    "RRR BBB OOO GGG",
    "OOO GGG RRR BBB",
    "    YYY",
    "    YYY",
    "    YYY",
])]
#[case::wide_f_prime("f'", [
    "    WWW",
    "    RRR",
    "    RRR",
    "OWW GGG YYR BBB",
    "OWW GGG YYR BBB",
    "OWW GGG YYR BBB",
    "    OOO",
    "    OOO",
    "    YYY",
])]
fn algorithm_produces_expected_net(#[case] notation: &str, #[case] expected: [&str; 9]) {
    assert_eq!(render_cube_net(&run(notation)), net(expected));
}

#[test]
fn z2_helper_matches_z2_notation() {
    let scrambled = run("R U2 F' L D");
    let moves = parse_algorithm("z2").unwrap();
    assert_eq!(
        apply_z2_rotation(&scrambled),
        apply_algorithm(&scrambled, &moves)
    );
}

#[test]
fn every_base_move_has_order_four() {
    let start = create_solved_state();
    for (symbol, _) in BASE_MOVE_TABLE {
        let token = parse_move(symbol).unwrap();
        let mut state = start;
        for turn in 1..=4 {
            state = apply_move(&state, &token);
            if turn < 4 {
                assert!(!states_equal(&state, &start), "{symbol} returned early after {turn}");
            }
        }
        assert!(states_equal(&state, &start), "{symbol}");
    }
}

#[rstest]
#[case("R")]
#[case("U2")]
#[case("M'")]
#[case("Rw")]
#[case("y'")]
fn double_modifier_is_two_turns(#[case] symbol: &str) {
    let token = parse_move(symbol).unwrap();
    let base = token.base().symbol();
    assert_eq!(run(&format!("{base}2")), run(&format!("{base} {base}")));
}

#[test]
fn parallel_face_turns_commute() {
    assert_eq!(run("U D"), run("D U"));
    assert_eq!(run("R L'"), run("L' R"));
    assert_eq!(run("F2 B"), run("B F2"));
}

#[test]
fn adjacent_face_turns_do_not_commute() {
    assert_ne!(run("R F"), run("F R"));
    assert_ne!(run("U R"), run("R U"));
}

#[test]
fn sexy_move_has_order_six() {
    let sexy = parse_algorithm("R U R' U'").unwrap();
    let mut state = create_solved_state();
    for round in 1..=6 {
        state = apply_algorithm(&state, &sexy);
        assert_eq!(state.is_solved(), round == 6, "round {round}");
    }
}

#[test]
fn t_perm_keeps_last_layer_face_solved() {
    let state = run("R U R' U' R' F R2 U' R' U' R U R' F'");
    assert!(!state.is_solved());
    let up = state.face(cube_engine::FaceName::Up);
    assert!(up.iter().all(|c| *c == up[0]));
    let down = state.face(cube_engine::FaceName::Down);
    assert!(down.iter().all(|c| *c == down[0]));
}

#[test]
fn step_by_step_entries_are_independent() {
    let moves = parse_algorithm("R U F").unwrap();
    let mut steps = apply_algorithm_step_by_step(&create_solved_state(), &moves);
    assert_eq!(steps.len(), 4);
    for (pair, token) in steps.windows(2).zip(&moves) {
        assert_eq!(apply_move(&pair[0], token), pair[1]);
    }

    let snapshot = steps[2];
    steps[1].set_sticker(cube_engine::FaceName::Up, 0, cube_engine::Color::Red);
    assert_eq!(steps[2], snapshot);
    assert!(steps[0].is_solved());
}

#[test]
fn wide_move_equals_face_plus_slice() {
    assert_eq!(run("r"), run("R M'"));
    assert_eq!(run("Lw"), run("L M"));
    assert_eq!(run("u"), run("U E'"));
    assert_eq!(run("Dw"), run("D E"));
    assert_eq!(run("f"), run("F S"));
    assert_eq!(run("Bw"), run("B S'"));
}

#[test]
fn rotations_equal_layer_compositions() {
    assert_eq!(run("x"), run("R M' L'"));
    assert_eq!(run("y"), run("U E' D'"));
    assert_eq!(run("z"), run("F S B'"));
}
