//! XML element format (`.adx`).

/// State machine that assembles records from XML events.
pub mod decoder;

pub use decoder::AdxDecoder;
