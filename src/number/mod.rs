//! The number driver.
//!
//! A [`Number`] forwards every egestion to its current strategy. When the
//! strategy reports exhaustion the number replaces it with its successor and
//! retries, so callers never observe exhaustion.

use core::str::FromStr;

use tracing::{debug, trace};

use crate::config::NumberConfig;
use crate::protocol::{format_messages, Message, ParseMessageError, Watcher};
use crate::strategy::{Egestion, Homography, Infinity, Playback, Ratio, Strategy, Zero};
use crate::ContlogResult;

/// Exact real number exposed as a destructive stream of messages.
#[derive(Debug)]
pub struct Number {
    strategy: Box<dyn Strategy>,
    watcher: Option<Watcher>,
}

impl Number {
    /// Number driven by `strategy`, without output checks.
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self::with_config(strategy, NumberConfig::default())
    }

    /// Number driven by `strategy` using `config`.
    pub fn with_config(strategy: Box<dyn Strategy>, config: NumberConfig) -> Self {
        Self {
            strategy,
            watcher: config.sanity_check.then(Watcher::new),
        }
    }

    /// `numerator / denominator`.
    pub fn ratio(numerator: i64, denominator: i64) -> ContlogResult<Self> {
        Ok(Self::new(Box::new(Ratio::new(numerator, denominator)?)))
    }

    pub fn zero() -> Self {
        Self::new(Box::new(Zero))
    }

    pub fn infinity() -> Self {
        Self::new(Box::new(Infinity::positive()))
    }

    pub fn neg_infinity() -> Self {
        Self::new(Box::new(Infinity::negative()))
    }

    /// Number replaying a literal message sequence.
    pub fn playback<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = Message>,
    {
        Self::new(Box::new(Playback::new(messages)))
    }

    /// `(n1 x + n0) / (d1 x + d0)` where `x` is `input`.
    pub fn homography(input: Number, n1: i64, n0: i64, d1: i64, d0: i64) -> ContlogResult<Self> {
        Ok(Self::new(Box::new(Homography::new(input, n1, n0, d1, d0)?)))
    }

    /// Name of the strategy currently driving the number.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Pulls the next message, replacing exhausted strategies along the way.
    pub fn egest(&mut self) -> ContlogResult<Message> {
        loop {
            match self.strategy.egest()? {
                Egestion::Message(message) => {
                    trace!(%message, strategy = self.strategy.name(), "number egest");
                    return match self.watcher.as_mut() {
                        Some(watcher) => Ok(watcher.watch(message)?),
                        None => Ok(message),
                    };
                }
                Egestion::Exhausted => {
                    let next = self.strategy.next_strategy()?;
                    debug!(
                        from = self.strategy.name(),
                        to = next.name(),
                        "replacing exhausted strategy"
                    );
                    self.strategy = next;
                }
            }
        }
    }

    /// Iterates over the remaining messages up to and including the first
    /// `0`. An error is yielded once and ends the iteration.
    pub fn messages(&mut self) -> Messages<'_> {
        Messages {
            number: self,
            done: false,
        }
    }

    /// Drains the number into its glyph string, e.g. `210` for one half.
    pub fn drain_glyphs(&mut self) -> ContlogResult<String> {
        let messages = self.messages().collect::<ContlogResult<Vec<_>>>()?;
        Ok(format_messages(&messages))
    }
}

impl FromStr for Number {
    type Err = ParseMessageError;

    /// Reads a glyph string such as `-/210` into a playback number.
    fn from_str(glyphs: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(Box::new(Playback::parse(glyphs)?)))
    }
}

/// Iterator returned by [`Number::messages`].
#[derive(Debug)]
pub struct Messages<'a> {
    number: &'a mut Number,
    done: bool,
}

impl Iterator for Messages<'_> {
    type Item = ContlogResult<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.number.egest();
        self.done = !matches!(item, Ok(message) if message != Message::End);
        Some(item)
    }
}

impl core::iter::FusedIterator for Messages<'_> {}
