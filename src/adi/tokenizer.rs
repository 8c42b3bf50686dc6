//! Lazy tokenizer for ADI data-specifiers.

use std::borrow::Cow;

use crate::{
    grammar::{self, TAG},
    types::LineNumber,
};

use super::events::AdiEvent;

#[derive(Debug)]
enum State<'a> {
    Seek,
    Start {
        name: Cow<'a, str>,
        length: Option<usize>,
        data_type: Option<char>,
    },
    Data {
        name: Cow<'a, str>,
        length: usize,
    },
    End {
        name: Cow<'a, str>,
    },
    Finished,
    Done,
}

/// Splits an ADI document into [`AdiEvent`]s.
///
/// Payload lengths are byte counts, so the cursor works on the UTF-8 bytes of
/// the input rather than on characters. Text after the last tag is dropped.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    cursor: usize,
    line: LineNumber,
    state: State<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizes a string.
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Tokenizes raw bytes; invalid UTF-8 is replaced when decoded.
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            line: 1,
            state: State::Seek,
        }
    }

    /// Line reached by the tokenizer, starting at 1.
    pub fn line(&self) -> LineNumber {
        self.line
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn seek(&mut self) -> Option<AdiEvent<'a>> {
        let input = self.input;
        let Some(caps) = TAG.captures_at(input, self.cursor) else {
            self.state = State::Finished;
            return None;
        };
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(1)) else {
            self.state = State::Finished;
            return None;
        };

        let interleaved = &input[self.cursor..tag.start()];
        self.line += grammar::count_line_breaks(&input[self.cursor..tag.end()]);
        self.cursor = tag.end();

        // An overflowing length still means "the rest of the document".
        let length = caps.get(2).map(|m| {
            std::str::from_utf8(m.as_bytes())
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(usize::MAX)
        });
        let data_type = caps.get(3).map(|m| char::from(m.as_bytes()[0]));
        self.state = State::Start {
            name: String::from_utf8_lossy(name.as_bytes()),
            length,
            data_type,
        };

        let comment = String::from_utf8_lossy(interleaved);
        if comment.chars().any(|c| !c.is_whitespace()) {
            Some(AdiEvent::Comment(comment))
        } else {
            None
        }
    }

    fn take_data(&mut self, length: usize) -> Cow<'a, str> {
        let input = self.input;
        let end = self.cursor.saturating_add(length).min(input.len());
        let bytes = &input[self.cursor..end];
        self.line += grammar::count_line_breaks(bytes);
        self.cursor = end;
        String::from_utf8_lossy(bytes)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = AdiEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, State::Done) {
                State::Seek => {
                    if let Some(comment) = self.seek() {
                        return Some(comment);
                    }
                }
                State::Start {
                    name,
                    length,
                    data_type,
                } => {
                    self.state = match length {
                        Some(length) if length > 0 => State::Data {
                            name: name.clone(),
                            length,
                        },
                        _ => State::End { name: name.clone() },
                    };
                    return Some(AdiEvent::StartField {
                        name,
                        length,
                        data_type,
                    });
                }
                State::Data { name, length } => {
                    let data = self.take_data(length);
                    self.state = State::End { name };
                    return Some(AdiEvent::Data(data));
                }
                State::End { name } => {
                    self.state = State::Seek;
                    return Some(AdiEvent::EndField { name });
                }
                State::Finished => return Some(AdiEvent::EndDocument),
                State::Done => return None,
            }
        }
    }
}
