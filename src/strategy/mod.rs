//! Strategies: the algorithms that decide a number's next message.
//!
//! A [`crate::Number`] owns exactly one strategy at a time. A strategy either
//! produces a message or reports [`Egestion::Exhausted`], after which the
//! number asks it for a successor through [`Strategy::next_strategy`] and
//! replaces it in place.
//!
//! | Strategy | Emits | Exhausts | Successor |
//! |----------|-------|----------|-----------|
//! | [`Ratio`] | digits of `num/den` | when the numerator reaches zero | [`Zero`] (unsigned zero only) |
//! | [`Zero`] | `0` forever | never | none |
//! | [`Infinity`] | `/` or `-/`, then `0` forever | never | none |
//! | [`Playback`] | a literal message list | when the list runs out | [`Zero`] |
//! | [`Homography`] | `(n1 x + n0) / (d1 x + d0)` | when the range collapses or `x` ends | [`Ratio`] |
//!
//! Requesting a successor from a strategy that has not exhausted fails with
//! [`crate::ContlogError::Unavailable`].

use core::fmt;

use crate::protocol::Message;
use crate::ContlogResult;

mod constant;
pub mod homography;
mod playback;
mod ratio;

pub use constant::{Infinity, Zero};
pub use homography::Homography;
pub use playback::Playback;
pub use ratio::Ratio;

/// Outcome of a single egestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Egestion {
    /// The strategy produced a message.
    Message(Message),
    /// The strategy has nothing more to say and must be replaced.
    Exhausted,
}

/// Algorithm producing the messages of a number.
pub trait Strategy: fmt::Debug {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Produces the next message, or reports exhaustion.
    fn egest(&mut self) -> ContlogResult<Egestion>;

    /// Returns the strategy that continues the number once this one is
    /// exhausted.
    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>>;
}
