use std::collections::VecDeque;

use super::{Egestion, Strategy, Zero};
use crate::protocol::{parse_messages, Message, ParseMessageError, Watcher};
use crate::{ContlogError, ContlogResult};

/// Replays a literal message sequence.
///
/// Every replayed message goes through a [`Watcher`], so malformed input is
/// reported as a protocol violation at the point where it is replayed. When
/// the list runs out the sequence is treated as ending with `0`, which makes
/// a trailing `2` a violation as well.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    messages: VecDeque<Message>,
    watcher: Watcher,
}

impl Playback {
    /// Replays `messages` in order.
    pub fn new<I>(messages: I) -> Self
    where
        I: IntoIterator<Item = Message>,
    {
        Self {
            messages: messages.into_iter().collect(),
            watcher: Watcher::new(),
        }
    }

    /// Replays the messages spelled by a glyph string such as `-/210`.
    pub fn parse(glyphs: &str) -> Result<Self, ParseMessageError> {
        parse_messages(glyphs).map(Self::new)
    }

    /// Messages left to replay.
    pub fn remaining(&self) -> usize {
        self.messages.len()
    }
}

impl Strategy for Playback {
    fn name(&self) -> &'static str {
        "playback"
    }

    fn egest(&mut self) -> ContlogResult<Egestion> {
        match self.messages.pop_front() {
            Some(message) => Ok(Egestion::Message(self.watcher.watch(message)?)),
            None => {
                self.watcher.watch(Message::End)?;
                Ok(Egestion::Exhausted)
            }
        }
    }

    fn next_strategy(&mut self) -> ContlogResult<Box<dyn Strategy>> {
        if self.messages.is_empty() {
            Ok(Box::new(Zero))
        } else {
            Err(ContlogError::Unavailable)
        }
    }
}
