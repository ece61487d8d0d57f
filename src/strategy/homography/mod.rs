//! Homographic transformation of a single number.
//!
//! A [`Homography`] egests the messages of `y = (n1 x + n0) / (d1 x + d0)`
//! while pulling the messages of `x` only when the output range cannot be
//! narrowed otherwise.
//!
//! # State machine
//!
//! ```text
//! fresh --ingest--> primed --collapse / end of x--> exhausted
//!                     |  ^
//!                     +--+ egest or ingest
//! ```
//!
//! * **Ingest** pulls one message of `x` and substitutes the previous input
//!   value by its expression in the refined one, so the map always takes an
//!   input in `[0, 1]` after priming.
//! * **Egest** computes the output range over that interval, picks the
//!   message whose precondition covers the whole range and rewrites the map
//!   with the inverse transform of that message.
//! * **Exhaustion** happens when the range collapses to a point or `x` ends.
//!   The remaining value `n0 / d0` continues as a [`Ratio`].
//!
//! The input is released as soon as it cannot influence the output anymore.

mod bracket;
mod coefficients;

pub use bracket::Bracket;
pub use coefficients::Coefficients;

use tracing::{debug, trace};

use super::{Egestion, Ratio, Strategy};
use crate::number::Number;
use crate::protocol::Message;
use crate::{ContlogError, ContlogResult, OverflowStage};

/// Lazy `(n1 x + n0) / (d1 x + d0)` over an owned input number.
#[derive(Debug)]
pub struct Homography {
    input: Option<Number>,
    coefficients: Coefficients,
    primed: bool,
    exhausted: bool,
    /// `d1 != 0` at construction.
    has_pole: bool,
    /// Turn or Ground has been egested.
    reciprocated: bool,
    result: Option<(i64, i64)>,
}

impl Homography {
    /// Wraps `input` into `(n1 x + n0) / (d1 x + d0)`.
    ///
    /// All-zero coefficients fail with [`ContlogError::UndefinedRatio`]. When
    /// both `n1` and `d1` are zero the input is dropped immediately and the
    /// strategy is exhausted from the start.
    pub fn new(input: Number, n1: i64, n0: i64, d1: i64, d0: i64) -> ContlogResult<Self> {
        let coefficients = Coefficients::new(n1, n0, d1, d0);
        if coefficients.is_zero() {
            return Err(ContlogError::UndefinedRatio);
        }
        let mut homography = Self {
            input: Some(input),
            coefficients,
            primed: false,
            exhausted: false,
            has_pole: d1 != 0,
            reciprocated: false,
            result: None,
        };
        if coefficients.ignores_input() {
            debug!(%coefficients, "homography ignores its input");
            homography.exhaust(n0, d0);
        }
        Ok(homography)
    }

    /// Current coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Output range implied by the current coefficients.
    pub fn bracket(&self) -> Bracket {
        Bracket::over_unit_interval(&self.coefficients)
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether the input number is still held.
    pub fn holds_input(&self) -> bool {
        self.input.is_some()
    }

    fn exhaust(&mut self, num: i64, den: i64) {
        self.exhausted = true;
        self.result = Some((num, den));
        if self.input.take().is_some() {
            debug!(num, den, "homography released its input");
        }
    }

    /// Pulls one message from the input. Returns `false` once the input has
    /// ended and the homography is exhausted.
    fn ingest(&mut self) -> ContlogResult<bool> {
        let message = match self.input.as_mut() {
            Some(input) => input.egest()?,
            None => Message::End,
        };
        if message == Message::End {
            self.finish()?;
            return Ok(false);
        }
        self.coefficients = self.coefficients.ingest(message).ok_or(
            ContlogError::CoefficientOverflow {
                stage: OverflowStage::Ingest(message),
            },
        )?;
        let Coefficients { n1, n0, d1, d0 } = self.coefficients;
        trace!(%message, n1, n0, d1, d0, "homography ingest");
        Ok(true)
    }

    /// Input reached zero: the output is `n0 / d0`.
    fn finish(&mut self) -> ContlogResult<()> {
        let Coefficients { n0, d1, d0, .. } = self.coefficients;
        if self.has_pole && self.reciprocated && n0 == 0 {
            // The reciprocal output is zero, so the input ended on the pole.
            return Err(ContlogError::UndefinedRatio);
        }
        if d0 != 0 {
            debug!(n0, d0, "homography input ended");
            self.exhaust(n0, d0);
            return Ok(());
        }
        if self.has_pole || n0 == 0 {
            return Err(ContlogError::UndefinedRatio);
        }
        // Pole at the end of the input: infinity signed by the approach.
        let sign = n0.signum() * if d1 != 0 { d1.signum() } else { 1 };
        debug!(sign, "homography input ended on a pole");
        self.exhaust(sign, 0);
        Ok(())
    }
}

impl Strategy for Homography {
    fn name(&self) -> &'static str {
        "homography"
    }

    fn egest(&mut self) -> ContlogResult<Egestion> {
        if self.exhausted {
            return Ok(Egestion::Exhausted);
        }
        if !self.primed {
            self.primed = true;
            if !self.ingest()? {
                return Ok(Egestion::Exhausted);
            }
        }
        loop {
            let bracket = self.bracket();
            if bracket.is_point() {
                let Coefficients { n0, d0, .. } = self.coefficients;
                debug!(%bracket, "homography range collapsed");
                self.exhaust(n0, d0);
                return Ok(Egestion::Exhausted);
            }
            if let Some(message) = bracket.classify() {
                self.coefficients = self.coefficients.egest(message).ok_or(
                    ContlogError::CoefficientOverflow {
                        stage: OverflowStage::Egest(message),
                    },
                )?;
                if matches!(message, Message::Turn | Message::Ground) {
                    self.reciprocated = true;
                }
                let Coefficients { n1, n0, d1, d0 } = self.coefficients;
                trace!(%message, %bracket, n1, n0, d1, d0, "homography egest");
                return Ok(Egestion::Message(message));
            }
            if !self.ingest()? {
                return Ok(Egestion::Exhausted);
            }
        }
    }

    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>> {
        match self.result {
            Some((0, _)) => Ok(Box::new(Ratio::new(0, 1)?)),
            Some((num, den)) if self.exhausted => Ok(Box::new(Ratio::new(num, den)?)),
            _ => Err(ContlogError::Unavailable),
        }
    }
}
