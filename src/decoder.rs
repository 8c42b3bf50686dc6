//! Common interface of the format decoders.

use crate::{document::Document, error::Result};

/// A one-shot decoder for a single in-memory document.
///
/// Decoders own all of their state and are consumed by [`Decoder::decode`],
/// so separate documents can be decoded on separate threads.
pub trait Decoder {
    /// Runs the decoder to completion.
    fn decode(self) -> Result<Document>;
}
