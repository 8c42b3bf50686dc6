//! Decode error type.

use thiserror::Error;

/// Errors raised while decoding a document.
#[derive(Debug, Error)]
pub enum Error {
    /// `Parser::parse` was called before an event sink was attached.
    #[error("no event sink attached before parsing started")]
    NoSink,

    /// The XML tokenizer could not produce a well-formed event stream.
    #[error("malformed ADX document at byte {position}: {source}")]
    Xml {
        /// Byte offset reported by the XML reader.
        position: u64,
        /// Underlying reader error.
        #[source]
        source: quick_xml::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The decoder was wired up incorrectly; no input was consumed.
    Configuration,
    /// The input could not be tokenized.
    Parse,
}

impl Error {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoSink => ErrorKind::Configuration,
            Error::Xml { .. } => ErrorKind::Parse,
        }
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;
