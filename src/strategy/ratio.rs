use tracing::trace;

use super::{Egestion, Strategy, Zero};
use crate::protocol::Message;
use crate::{ContlogError, ContlogResult};

/// Closed form emitter for a rational number.
///
/// The sign is folded into a flag and the magnitudes are kept unsigned, so
/// `i64::MIN` is representable on either side of the fraction. A zero
/// denominator denotes infinity; a negative zero numerator keeps its sign
/// and egests `-0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ratio {
    num: u64,
    den: u64,
    negative: bool,
}

impl Ratio {
    /// Builds `numerator / denominator`. Fails with
    /// [`ContlogError::UndefinedRatio`] for `0/0`.
    pub fn new(numerator: i64, denominator: i64) -> ContlogResult<Self> {
        let negative = (numerator < 0) ^ (denominator < 0);
        Self::from_magnitudes(
            numerator.unsigned_abs(),
            denominator.unsigned_abs(),
            negative,
        )
    }

    /// Builds a ratio from unsigned magnitudes and an explicit sign.
    pub fn from_magnitudes(num: u64, den: u64, negative: bool) -> ContlogResult<Self> {
        if num == 0 && den == 0 {
            return Err(ContlogError::UndefinedRatio);
        }
        Ok(Self { num, den, negative })
    }

    /// Current numerator magnitude.
    pub fn numerator(&self) -> u64 {
        self.num
    }

    /// Current denominator magnitude.
    pub fn denominator(&self) -> u64 {
        self.den
    }

    /// Whether the sign has not been egested yet.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn step(&mut self) -> Option<Message> {
        if self.negative {
            self.negative = false;
            if self.num <= self.den {
                return Some(Message::Reflect);
            }
            core::mem::swap(&mut self.num, &mut self.den);
            return Some(Message::Ground);
        }
        if self.num == 0 {
            return None;
        }
        if self.num > self.den {
            core::mem::swap(&mut self.num, &mut self.den);
            return Some(Message::Turn);
        }
        if self.num <= self.den - self.num {
            if self.den % 2 == 0 {
                self.den /= 2;
            } else {
                self.num *= 2;
            }
            return Some(Message::Amplify);
        }
        let (num, den) = (self.den - self.num, self.num);
        self.num = num;
        self.den = den;
        Some(Message::Uncover)
    }
}

impl Strategy for Ratio {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn egest(&mut self) -> ContlogResult<Egestion> {
        match self.step() {
            Some(message) => {
                trace!(%message, num = self.num, den = self.den, "ratio egest");
                Ok(Egestion::Message(message))
            }
            None => Ok(Egestion::Exhausted),
        }
    }

    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>> {
        if self.num == 0 && !self.negative {
            Ok(Box::new(Zero))
        } else {
            Err(ContlogError::Unavailable)
        }
    }
}
