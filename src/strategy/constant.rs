use super::{Egestion, Strategy};
use crate::protocol::Message;
use crate::{ContlogError, ContlogResult};

/// Exact zero. Egests `0` forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Strategy for Zero {
    fn name(&self) -> &'static str {
        "zero"
    }

    fn egest(&mut self) -> ContlogResult<Egestion> {
        Ok(Egestion::Message(Message::End))
    }

    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>> {
        Err(ContlogError::Unavailable)
    }
}

/// Signed infinity: `/0` or `-/0`, with `0` repeated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Infinity {
    negative: bool,
    reciprocated: bool,
}

impl Infinity {
    /// Positive infinity.
    pub const fn positive() -> Self {
        Self {
            negative: false,
            reciprocated: false,
        }
    }

    /// Negative infinity.
    pub const fn negative() -> Self {
        Self {
            negative: true,
            reciprocated: false,
        }
    }

    /// Whether this is negative infinity.
    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl Strategy for Infinity {
    fn name(&self) -> &'static str {
        "infinity"
    }

    fn egest(&mut self) -> ContlogResult<Egestion> {
        if self.reciprocated {
            return Ok(Egestion::Message(Message::End));
        }
        self.reciprocated = true;
        let message = if self.negative {
            Message::Ground
        } else {
            Message::Turn
        };
        Ok(Egestion::Message(message))
    }

    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>> {
        Err(ContlogError::Unavailable)
    }
}
