use core::fmt;

use crate::math::reduce_by_gcd;
use crate::protocol::Message;

/// Integer coefficients of `y = (n1 x + n0) / (d1 x + d0)`.
///
/// Every transform is overflow checked and leaves the four coefficients
/// divided by their common factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coefficients {
    pub n1: i64,
    pub n0: i64,
    pub d1: i64,
    pub d0: i64,
}

impl Coefficients {
    pub const fn new(n1: i64, n0: i64, d1: i64, d0: i64) -> Self {
        Self { n1, n0, d1, d0 }
    }

    /// `(n1, n0, d1, d0)` in declaration order.
    pub const fn as_array(&self) -> [i64; 4] {
        [self.n1, self.n0, self.d1, self.d0]
    }

    pub fn is_zero(&self) -> bool {
        self.as_array() == [0; 4]
    }

    /// Whether `x` no longer influences `y`.
    pub fn ignores_input(&self) -> bool {
        self.n1 == 0 && self.d1 == 0
    }

    /// Folds an input message into the map by substituting the previous
    /// input value with its expression in terms of the refined one.
    ///
    /// End is not a substitution and leaves the map unchanged.
    pub fn ingest(self, message: Message) -> Option<Self> {
        let Self { n1, n0, d1, d0 } = self;
        let next = match message {
            Message::End => self,
            // x = x' / 2
            Message::Amplify => {
                if n1 % 2 == 0 && d1 % 2 == 0 {
                    Self::new(n1 / 2, n0, d1 / 2, d0)
                } else {
                    Self::new(n1, n0.checked_mul(2)?, d1, d0.checked_mul(2)?)
                }
            }
            // x = 1 / (x' + 1)
            Message::Uncover => Self::new(n0, n0.checked_add(n1)?, d0, d0.checked_add(d1)?),
            // x = 1 / x'
            Message::Turn => Self::new(n0, n1, d0, d1),
            // x = -x'
            Message::Reflect => Self::new(n1.checked_neg()?, n0, d1.checked_neg()?, d0),
            // x = -1 / x'
            Message::Ground => Self::new(n0, n1.checked_neg()?, d0, d1.checked_neg()?),
        };
        Some(next.reduced())
    }

    /// Rewrites the map so that it describes the output after `message` has
    /// been applied to it.
    pub fn egest(self, message: Message) -> Option<Self> {
        let Self { n1, n0, d1, d0 } = self;
        let next = match message {
            Message::End => self,
            // y' = 2y
            Message::Amplify => {
                if d1 % 2 == 0 && d0 % 2 == 0 {
                    Self::new(n1, n0, d1 / 2, d0 / 2)
                } else {
                    Self::new(n1.checked_mul(2)?, n0.checked_mul(2)?, d1, d0)
                }
            }
            // y' = (d - n) / n
            Message::Uncover => Self::new(d1.checked_sub(n1)?, d0.checked_sub(n0)?, n1, n0),
            // y' = d / n
            Message::Turn => Self::new(d1, d0, n1, n0),
            // y' = -n / d
            Message::Reflect => Self::new(n1.checked_neg()?, n0.checked_neg()?, d1, d0),
            // y' = -d / n
            Message::Ground => Self::new(d1.checked_neg()?, d0.checked_neg()?, n1, n0),
        };
        Some(next.reduced())
    }

    fn reduced(self) -> Self {
        let [n1, n0, d1, d0] = reduce_by_gcd(self.as_array());
        Self { n1, n0, d1, d0 }
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}x{:+})/({}x{:+})", self.n1, self.n0, self.d1, self.d0)
    }
}
