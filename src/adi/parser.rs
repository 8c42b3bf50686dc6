//! Push-style driver that feeds tokenizer events to a visitor.

use crate::{
    error::{Error, Result},
    types::LineNumber,
};

use super::{events::AdiEvent, tokenizer::Tokenizer};

/// Receives the ADI event stream from a [`Parser`].
pub trait EventSink {
    /// Called once per event, in document order. `line` is the line the
    /// tokenizer has reached after producing the event.
    fn on_event(&mut self, event: AdiEvent<'_>, line: LineNumber);
}

/// Drives a [`Tokenizer`] to completion into an [`EventSink`].
pub struct Parser<'a, 's> {
    tokenizer: Tokenizer<'a>,
    sink: Option<&'s mut dyn EventSink>,
}

impl<'a, 's> Parser<'a, 's> {
    /// Creates a parser with no sink attached.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            sink: None,
        }
    }

    /// Attaches the sink that will receive events.
    pub fn with_sink(mut self, sink: &'s mut dyn EventSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replaces the attached sink.
    pub fn set_sink(&mut self, sink: &'s mut dyn EventSink) {
        self.sink = Some(sink);
    }

    /// Runs the tokenizer over the whole input and returns the last line
    /// number reached.
    ///
    /// Fails with [`Error::NoSink`] before consuming any input when no sink
    /// is attached.
    pub fn parse(self) -> Result<LineNumber> {
        let Parser {
            mut tokenizer,
            sink,
        } = self;
        let sink = sink.ok_or(Error::NoSink)?;

        while let Some(event) = tokenizer.next() {
            let line = tokenizer.line();
            sink.on_event(event, line);
        }
        Ok(tokenizer.line())
    }
}
