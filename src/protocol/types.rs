use core::fmt;

/// Continued logarithm message.
///
/// Each variant documents the range the number occupied before the message
/// and the transform it applied to itself afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// `0`: the number is exactly zero. Terminal.
    End,
    /// `2`: the number was in `(0, 1/2]` and was doubled.
    Amplify,
    /// `1`: the number was in `(1/2, 1]`, was reciprocated and had one
    /// subtracted from itself.
    Uncover,
    /// `/`: the number was greater than one and was reciprocated.
    Turn,
    /// `-`: the number was in `[-1, 0)` and was negated.
    Reflect,
    /// `-/`: the number was lesser than minus one, was negated and then
    /// reciprocated.
    Ground,
}

impl Message {
    /// Every message, ordered by [`Message::line_rank`].
    pub const ALL: [Message; 6] = [
        Message::Ground,
        Message::Reflect,
        Message::End,
        Message::Amplify,
        Message::Uncover,
        Message::Turn,
    ];

    /// Textual glyph of the message.
    pub const fn glyph(self) -> &'static str {
        match self {
            Message::End => "0",
            Message::Amplify => "2",
            Message::Uncover => "1",
            Message::Turn => "/",
            Message::Reflect => "-",
            Message::Ground => "-/",
        }
    }

    /// Position of the range announced by the message on the number line,
    /// from `x < -1` (Ground) up to `x > 1` (Turn).
    pub const fn line_rank(self) -> u8 {
        match self {
            Message::Ground => 0,
            Message::Reflect => 1,
            Message::End => 2,
            Message::Amplify => 3,
            Message::Uncover => 4,
            Message::Turn => 5,
        }
    }

    /// Whether the transform applied by the message reverses ordering.
    pub const fn reverses_order(self) -> bool {
        matches!(self, Message::Uncover | Message::Turn | Message::Reflect)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Failure to read a glyph string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character {found:?} at byte {offset} of message glyphs")]
pub struct ParseMessageError {
    /// Byte offset of the offending character.
    pub offset: usize,
    /// The character that is not a glyph.
    pub found: char,
}

/// Reads a glyph string such as `-/21112111221111210` into messages.
///
/// Protocol invariants are not checked here.
pub fn parse_messages(glyphs: &str) -> Result<Vec<Message>, ParseMessageError> {
    let mut messages = Vec::with_capacity(glyphs.len());
    let mut chars = glyphs.char_indices().peekable();
    while let Some((offset, found)) = chars.next() {
        let message = match found {
            '0' => Message::End,
            '2' => Message::Amplify,
            '1' => Message::Uncover,
            '/' => Message::Turn,
            '-' => {
                if matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    Message::Ground
                } else {
                    Message::Reflect
                }
            }
            _ => return Err(ParseMessageError { offset, found }),
        };
        messages.push(message);
    }
    Ok(messages)
}

/// Concatenates the glyphs of a message sequence.
pub fn format_messages<'a, I>(messages: I) -> String
where
    I: IntoIterator<Item = &'a Message>,
{
    messages.into_iter().map(|message| message.glyph()).collect()
}
