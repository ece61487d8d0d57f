use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;

/// Rational number extended with signed infinity.
///
/// A zero denominator denotes infinity carrying the sign of the numerator.
/// Denominators may be negative; ordering accounts for both signs so no
/// normalising negation is ever required.
#[derive(Debug, Clone, Copy)]
pub struct Extended {
    num: i128,
    den: i128,
}

impl Extended {
    /// Zero.
    pub const ZERO: Extended = Extended::raw(0, 1);
    /// One half, the boundary between Amplify and Uncover.
    pub const HALF: Extended = Extended::raw(1, 2);
    /// One.
    pub const ONE: Extended = Extended::raw(1, 1);
    /// Minus one.
    pub const MINUS_ONE: Extended = Extended::raw(-1, 1);
    /// Positive infinity.
    pub const POS_INFINITY: Extended = Extended::raw(1, 0);
    /// Negative infinity.
    pub const NEG_INFINITY: Extended = Extended::raw(-1, 0);

    const fn raw(num: i128, den: i128) -> Self {
        Self { num, den }
    }

    /// Builds `num / den`, or `None` for the indeterminate form `0/0`.
    pub fn new(num: i128, den: i128) -> Option<Self> {
        if num == 0 && den == 0 {
            None
        } else {
            Some(Self { num, den })
        }
    }

    /// Whether the value is one of the two infinities.
    pub fn is_infinite(&self) -> bool {
        self.den == 0
    }

    /// Sign of the value as `-1`, `0` or `1`.
    pub fn signum(&self) -> i32 {
        let sign = if self.den == 0 {
            self.num.signum()
        } else {
            self.num.signum() * self.den.signum()
        };
        sign as i32
    }
}

/// Compares `a * d` against `c * b`, widening to big integers when either
/// product leaves the `i128` range.
fn cross_cmp(a: i128, d: i128, c: i128, b: i128) -> Ordering {
    match (a.checked_mul(d), c.checked_mul(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        _ => {
            let left = BigInt::from(a) * BigInt::from(d);
            let right = BigInt::from(c) * BigInt::from(b);
            left.cmp(&right)
        }
    }
}

impl Ord for Extended {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => self.num.signum().cmp(&other.num.signum()),
            (true, false) => {
                if self.num > 0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, true) => {
                if other.num > 0 {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, false) => {
                let ordering = cross_cmp(self.num, other.den, other.num, self.den);
                if (self.den < 0) != (other.den < 0) {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
        }
    }
}

impl PartialOrd for Extended {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Extended {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Extended {}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.den, self.num > 0) {
            (0, true) => f.write_str("+inf"),
            (0, false) => f.write_str("-inf"),
            _ => write!(f, "{}/{}", self.num, self.den),
        }
    }
}
