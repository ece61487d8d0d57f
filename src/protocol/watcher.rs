use super::types::Message;

/// Protocol invariant broken by an observed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A message other than End followed End.
    #[error("forbidden non final '0'")]
    NonFinalEnd,
    /// End directly followed Amplify; a doubled number cannot be zero.
    #[error("forbidden '20' sequence")]
    EndAfterAmplify,
    /// Turn appeared after the first message.
    #[error("forbidden non initial '/'")]
    NonInitialTurn,
    /// Reflect appeared after the first message.
    #[error("forbidden non initial '-'")]
    NonInitialReflect,
    /// Ground appeared after the first message.
    #[error("forbidden non initial '-/'")]
    NonInitialGround,
}

/// Tracks a message sequence and rejects the first message that breaks a
/// protocol invariant.
///
/// Only the previous message is remembered; every invariant is a function of
/// the pair (previous, current).
#[derive(Debug, Clone, Default)]
pub struct Watcher {
    previous: Option<Message>,
}

impl Watcher {
    /// Creates a watcher that has not observed any message yet.
    pub const fn new() -> Self {
        Self { previous: None }
    }

    /// Checks one more message, returning it unchanged when it is valid.
    ///
    /// A rejected message is not recorded, so the watcher keeps judging
    /// against the last valid message.
    pub fn watch(&mut self, message: Message) -> Result<Message, Violation> {
        if let Some(previous) = self.previous {
            Self::check(previous, message)?;
        }
        self.previous = Some(message);
        Ok(message)
    }

    /// Last accepted message, if any.
    pub fn previous(&self) -> Option<Message> {
        self.previous
    }

    fn check(previous: Message, message: Message) -> Result<(), Violation> {
        match (previous, message) {
            (Message::End, Message::End) => Ok(()),
            (Message::End, _) => Err(Violation::NonFinalEnd),
            (Message::Amplify, Message::End) => Err(Violation::EndAfterAmplify),
            (_, Message::Turn) => Err(Violation::NonInitialTurn),
            (_, Message::Reflect) => Err(Violation::NonInitialReflect),
            (_, Message::Ground) => Err(Violation::NonInitialGround),
            _ => Ok(()),
        }
    }
}
