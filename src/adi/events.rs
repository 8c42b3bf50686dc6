//! Tokenizer event payloads.

use std::borrow::Cow;

/// One step of the ADI event stream.
///
/// Every tag yields `Comment?`, `StartField`, `Data?`, `EndField`, in that
/// order; the stream ends with a single `EndDocument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdiEvent<'a> {
    /// Non-whitespace text found between two tags.
    Comment(Cow<'a, str>),
    /// A data-specifier tag was opened.
    StartField {
        /// Field name as written in the tag.
        name: Cow<'a, str>,
        /// Declared payload length in bytes.
        length: Option<usize>,
        /// Single-letter data type indicator.
        data_type: Option<char>,
    },
    /// Exactly `length` bytes of payload following the tag.
    Data(Cow<'a, str>),
    /// The current data-specifier is complete.
    EndField {
        /// Field name as written in the tag.
        name: Cow<'a, str>,
    },
    /// No further tag was found.
    EndDocument,
}
