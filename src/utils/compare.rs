use core::cmp::Ordering;

use tracing::debug;

use crate::config::CompareMode;
use crate::number::Number;
use crate::protocol::Message;
use crate::ContlogResult;

/// Three way comparison of two numbers by lockstep egestion.
///
/// Both numbers are consumed. Messages are pulled in pairs until they
/// differ, at which point the ranges the two messages announce decide the
/// order. Uncover, Turn and Reflect reverse the order of everything that
/// follows them, so each shared one flips the verdict.
///
/// In [`CompareMode::Lenient`] a `-0` compares equal to `0`.
pub fn compare(mut a: Number, mut b: Number, mode: CompareMode) -> ContlogResult<Ordering> {
    let mut reversed = false;
    let mut shared = 0usize;
    loop {
        let x = a.egest()?;
        let y = b.egest()?;
        if x == y {
            if x == Message::End {
                debug!(shared, "compare: equal");
                return Ok(Ordering::Equal);
            }
            if x.reverses_order() {
                reversed = !reversed;
            }
            shared += 1;
            continue;
        }

        if !mode.is_pedantic() {
            let signed_zero = match (x, y) {
                (Message::Reflect, Message::End) => a.egest()? == Message::End,
                (Message::End, Message::Reflect) => b.egest()? == Message::End,
                _ => false,
            };
            if signed_zero {
                debug!(shared, "compare: signed zero equals zero");
                return Ok(Ordering::Equal);
            }
        }

        let ordering = x.line_rank().cmp(&y.line_rank());
        let ordering = if reversed { ordering.reverse() } else { ordering };
        debug!(shared, %x, %y, ?ordering, "compare: diverged");
        return Ok(ordering);
    }
}
