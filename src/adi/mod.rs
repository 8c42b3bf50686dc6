//! Tagged, length-prefixed text format (`.adi`).

/// State machine that assembles records from tokenizer events.
pub mod decoder;
/// Event payloads produced by the tokenizer.
pub mod events;
/// Push-style driver and its visitor trait.
pub mod parser;
/// Byte-exact tag tokenizer.
pub mod tokenizer;

pub use decoder::AdiDecoder;
pub use events::AdiEvent;
pub use parser::{EventSink, Parser};
pub use tokenizer::Tokenizer;
