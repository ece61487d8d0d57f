use core::fmt;

use super::coefficients::Coefficients;
use crate::math::Extended;
use crate::protocol::Message;

/// Closed range `[min, max]` known to contain the output of a map whose
/// input lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    min: Extended,
    max: Extended,
}

impl Bracket {
    /// The whole extended line.
    pub const UNBOUNDED: Bracket = Bracket {
        min: Extended::NEG_INFINITY,
        max: Extended::POS_INFINITY,
    };

    /// Computes the output range of `coefficients` over `x` in `[0, 1]`.
    ///
    /// The endpoints are the images of 0 and 1. A root of the numerator in
    /// the interval adds 0. A pole strictly inside adds both infinities; a
    /// pole on the boundary adds only the infinity approached from inside,
    /// unless the numerator vanishes there too.
    pub fn over_unit_interval(coefficients: &Coefficients) -> Self {
        let Coefficients { n1, n0, d1, d0 } = *coefficients;
        let approach = d1.signum();
        let at_zero = endpoint(n0.into(), d0.into(), approach);
        let at_one = endpoint(
            i128::from(n1) + i128::from(n0),
            i128::from(d1) + i128::from(d0),
            -approach,
        );
        let mut bracket: Option<Bracket> = None;

        for point in [at_zero, at_one].into_iter().flatten() {
            bracket = Some(Self::include(bracket, point));
        }

        if changes_sign(n1, n0) {
            bracket = Some(Self::include(bracket, Extended::ZERO));
        }
        let indeterminate = d1 != 0 && (at_zero.is_none() || at_one.is_none());
        if indeterminate || pole_inside(d1, d0) {
            bracket = Some(Self::include(bracket, Extended::NEG_INFINITY));
            bracket = Some(Self::include(bracket, Extended::POS_INFINITY));
        }

        bracket.unwrap_or(Self::UNBOUNDED)
    }

    fn include(bracket: Option<Bracket>, point: Extended) -> Bracket {
        match bracket {
            None => Bracket {
                min: point,
                max: point,
            },
            Some(Bracket { min, max }) => Bracket {
                min: min.min(point),
                max: max.max(point),
            },
        }
    }

    pub fn min(&self) -> Extended {
        self.min
    }

    pub fn max(&self) -> Extended {
        self.max
    }

    /// Whether the range has collapsed to a single value.
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Message whose range contains the whole bracket, checked in the order
    /// Ground, Turn, Reflect, Uncover, Amplify.
    pub fn classify(&self) -> Option<Message> {
        let (min, max) = (self.min, self.max);
        if max < Extended::MINUS_ONE {
            Some(Message::Ground)
        } else if min > Extended::ONE {
            Some(Message::Turn)
        } else if min >= Extended::MINUS_ONE && max < Extended::ZERO {
            Some(Message::Reflect)
        } else if min > Extended::HALF && max <= Extended::ONE {
            Some(Message::Uncover)
        } else if min > Extended::ZERO && max <= Extended::HALF {
            Some(Message::Amplify)
        } else {
            None
        }
    }
}

/// Whether `a x + b` vanishes somewhere on `[0, 1]` without vanishing
/// identically.
fn changes_sign(a: i64, b: i64) -> bool {
    if a == 0 && b == 0 {
        return false;
    }
    let at_zero = b.signum();
    let at_one = (i128::from(a) + i128::from(b)).signum() as i64;
    at_zero * at_one <= 0
}

/// Whether `a x + b` vanishes strictly inside `(0, 1)`.
fn pole_inside(a: i64, b: i64) -> bool {
    let at_zero = b.signum();
    let at_one = (i128::from(a) + i128::from(b)).signum() as i64;
    at_zero * at_one < 0
}

/// Value of `num / den` at an endpoint, `None` when it is `0/0`.
///
/// `approach` is the sign of the denominator just inside the interval. A
/// pole takes its sign from it; a denominator that vanishes identically
/// (`approach == 0`) keeps the sign of the numerator.
fn endpoint(num: i128, den: i128, approach: i64) -> Option<Extended> {
    if den != 0 || approach == 0 {
        return Extended::new(num, den);
    }
    match num.signum() * i128::from(approach) {
        1 => Some(Extended::POS_INFINITY),
        -1 => Some(Extended::NEG_INFINITY),
        _ => None,
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
