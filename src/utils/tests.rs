use core::cmp::Ordering;

use super::compare;
use crate::config::CompareMode;
use crate::number::Number;

fn glyphs(text: &str) -> Number {
    text.parse().expect("valid glyphs")
}

fn ratio(num: i64, den: i64) -> Number {
    Number::ratio(num, den).expect("defined ratio")
}

#[test]
fn equal_sequences_compare_equal() {
    for text in ["0", "210", "-/21112111221111210", "/0"] {
        assert_eq!(
            compare(glyphs(text), glyphs(text), CompareMode::Pedantic),
            Ok(Ordering::Equal),
            "{text}"
        );
    }
}

#[test]
fn order_follows_the_number_line() {
    let line: [fn() -> Number; 12] = [
        Number::neg_infinity,
        || ratio(-3, 1),
        || ratio(-1, 1),
        || ratio(-1, 3),
        Number::zero,
        || ratio(1, 3),
        || ratio(1, 2),
        || ratio(2, 3),
        || ratio(1, 1),
        || ratio(3, 2),
        || ratio(7, 1),
        Number::infinity,
    ];
    for (i, a) in line.iter().enumerate() {
        for (j, b) in line.iter().enumerate() {
            let expected = i.cmp(&j);
            assert_eq!(
                compare(a(), b(), CompareMode::Lenient),
                Ok(expected),
                "positions {i} and {j}"
            );
        }
    }
}

#[test]
fn signed_zero_depends_on_mode() {
    assert_eq!(
        compare(glyphs("-0"), glyphs("0"), CompareMode::Lenient),
        Ok(Ordering::Equal)
    );
    assert_eq!(
        compare(glyphs("0"), glyphs("-0"), CompareMode::Lenient),
        Ok(Ordering::Equal)
    );
    assert_eq!(
        compare(glyphs("-0"), glyphs("0"), CompareMode::Pedantic),
        Ok(Ordering::Less)
    );
    assert_eq!(
        compare(glyphs("0"), glyphs("-0"), CompareMode::Pedantic),
        Ok(Ordering::Greater)
    );
}

#[test]
fn lenient_mode_still_orders_negative_values_below_zero() {
    assert_eq!(
        compare(ratio(-1, 2), Number::zero(), CompareMode::Lenient),
        Ok(Ordering::Less)
    );
    assert_eq!(
        compare(Number::zero(), ratio(-1, 2), CompareMode::Lenient),
        Ok(Ordering::Greater)
    );
}

#[test]
fn errors_from_either_side_propagate() {
    assert!(compare(glyphs("2"), glyphs("2"), CompareMode::Lenient).is_err());
    assert!(compare(glyphs("10"), glyphs("1/"), CompareMode::Lenient).is_err());
}
