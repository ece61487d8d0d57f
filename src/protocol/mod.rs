//! Continued logarithm message protocol.
//!
//! Before a number egests any message it is completely unknown: it lies
//! somewhere between negative and positive infinity. Every message uncovers
//! where the number lies inside its known range and then applies a reversible
//! transform that brings the number back into a canonical range. The
//! vocabulary is a modified version of Bill Gosper's continued logarithms:
//!
//! | Glyph | Message | Range before | Transform | Range after |
//! |-------|---------|--------------|-----------|-------------|
//! | `0` | [`Message::End`] | `x = 0` | none | `0` |
//! | `2` | [`Message::Amplify`] | `0 < x <= 1/2` | `2x` | `(0, 1]` |
//! | `1` | [`Message::Uncover`] | `1/2 < x <= 1` | `1/x - 1` | `[0, 1)` |
//! | `/` | [`Message::Turn`] | `x > 1` | `1/x` | `[0, 1)` |
//! | `-` | [`Message::Reflect`] | `-1 <= x < 0` | `-x` | `(0, 1]` |
//! | `-/` | [`Message::Ground`] | `x < -1` | `-1/x` | `[0, 1)` |
//!
//! Infinities are reached through the reciprocating messages: `+inf` reduces
//! to `/0` and `-inf` to `-/0`. Signed zero reduces to `-0`.
//!
//! Invariants of every valid sequence, enforced by [`Watcher`]:
//!
//! 1. `0` is final; only `0` may follow it.
//! 2. `/`, `-` and `-/` can only happen as the first message.
//! 3. `0` cannot follow `2`.
//!
//! Sample reductions: `0` is `0`, `1/2` is `210`, `-3.14` is
//! `-/21112111221111210`.

mod types;
mod watcher;

pub use types::{format_messages, parse_messages, Message, ParseMessageError};
pub use watcher::{Violation, Watcher};

#[cfg(test)]
pub mod tests;
