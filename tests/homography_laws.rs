
use std::cmp::Ordering;

use _fixtures::{playback, ratio};
use contlog::strategy::Homography;
use contlog::{compare, CompareMode, ContlogError, Message, Number, NumberConfig};
use insta::assert_snapshot;

fn homography(input: Number, n1: i64, n0: i64, d1: i64, d0: i64) -> Number {
    Number::homography(input, n1, n0, d1, d0).expect("coefficients are not all zero")
}

#[test]
fn identity_egests_the_input_sequence() {
    let inputs = [(0, 1), (1, 2), (1, 1), (2, 1), (-1, 1), (-2, 1), (1, 0), (-1, 0)];
    for (num, den) in inputs {
        let expected = ratio(num, den).drain_glyphs().unwrap();
        let glyphs = homography(ratio(num, den), 1, 0, 0, 1).drain_glyphs().unwrap();
        assert_eq!(glyphs, expected, "identity of {num}/{den}");
    }
}

#[test]
fn linear_spot_checks() {
    let cases = [
        ((2, 0, 0, 1), (4, 1)),
        ((1, 0, 0, 2), (1, 1)),
        ((1, 1, 0, 1), (3, 1)),
        ((0, 1, 1, 0), (1, 2)),
        ((-1, 0, 0, 1), (-2, 1)),
    ];
    for ((n1, n0, d1, d0), (num, den)) in cases {
        let y = homography(ratio(2, 1), n1, n0, d1, d0);
        let ordering = compare(y, ratio(num, den), CompareMode::Pedantic).unwrap();
        assert_eq!(ordering, Ordering::Equal, "({n1}x+{n0})/({d1}x+{d0}) at 2");
    }
}

#[test]
fn zero_input_becomes_ratio_without_output() {
    let mut y = homography(Number::zero(), 1, 0, 0, 1);
    assert_eq!(y.strategy_name(), "homography");
    assert_eq!(y.egest().unwrap(), Message::End);
    assert_eq!(y.strategy_name(), "zero");
}

#[test]
fn all_zero_coefficients_are_undefined() {
    for input in [ratio(1, 2), Number::zero(), Number::infinity(), playback("-/0")] {
        let err = Number::homography(input, 0, 0, 0, 0).unwrap_err();
        assert_eq!(err, ContlogError::UndefinedRatio);
    }
}

#[test]
fn poles_at_the_input_are_undefined() {
    let cases = [
        (Number::zero(), (0, 1, 1, 0)),
        (Number::zero(), (1, 0, 1, 0)),
        (ratio(1, 1), (1, 1, 1, -1)),
        (ratio(-1, 1), (1, 1, 1, 1)),
        (ratio(1, 2), (1, 0, -2, 1)),
    ];
    for (input, (n1, n0, d1, d0)) in cases {
        let err = homography(input, n1, n0, d1, d0).drain_glyphs().unwrap_err();
        assert_eq!(err, ContlogError::UndefinedRatio, "({n1}x+{n0})/({d1}x+{d0})");
    }
}

#[test]
fn infinite_inputs_and_outputs() {
    let cases = [
        (Number::infinity(), (1, 0, 1, 1), "10"),
        (Number::infinity(), (0, 1, 1, 0), "0"),
        (Number::neg_infinity(), (2, 1, 0, 3), "-/0"),
        (Number::infinity(), (1, 0, 0, -1), "-/0"),
        (ratio(1, 1), (1, 0, 0, 0), "/0"),
        (ratio(-1, 1), (1, 0, 0, 0), "-/0"),
        (ratio(2, 1), (0, 1, 0, 0), "/0"),
        (Number::infinity(), (1, 0, 0, 1), "/0"),
    ];
    for (input, (n1, n0, d1, d0), expected) in cases {
        let glyphs = homography(input, n1, n0, d1, d0).drain_glyphs().unwrap();
        assert_eq!(glyphs, expected, "({n1}x+{n0})/({d1}x+{d0})");
    }
}

#[test]
fn negating_minus_pi_approximation() {
    let glyphs = homography(playback("-/21112111221111210"), -1, 0, 0, 1)
        .drain_glyphs()
        .unwrap();
    assert_snapshot!(glyphs, @"/21112111221111210");
}

#[test]
fn composed_homographies() {
    // 1 / (2x + 1) of (x - 1) / 3 at x = 7 is 1 / 5.
    let inner = homography(ratio(7, 1), 1, -1, 0, 3);
    let mut outer = homography(inner, 0, 1, 2, 1);
    assert_snapshot!(outer.drain_glyphs().unwrap(), @"2212210");
    let same = compare(
        homography(homography(ratio(7, 1), 1, -1, 0, 3), 0, 1, 2, 1),
        ratio(1, 5),
        CompareMode::Pedantic,
    )
    .unwrap();
    assert_eq!(same, Ordering::Equal);
}

#[test]
fn sanity_checked_output_is_valid() {
    let strategy = Homography::new(ratio(-157, 50), 3, -1, 2, 5).unwrap();
    let mut y = Number::with_config(Box::new(strategy), NumberConfig::SANITY_CHECKED);
    let messages = y.messages().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(messages.last(), Some(&Message::End));
    // (3x - 1) / (2x + 5) at x = -157/50 is -521/-64, above one.
    assert_eq!(messages.first(), Some(&Message::Turn));
}
