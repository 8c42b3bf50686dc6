//! Shared primitive IDs and format enums.

use serde::{Deserialize, Serialize};

/// Monotonic record identifier, assigned in document order.
pub type RecordId = u64;
/// One-based line number inside an ADI document.
pub type LineNumber = usize;

/// Interchange format of a raw document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tagged, length-prefixed text (`.adi`).
    Adi,
    /// XML elements (`.adx`).
    Adx,
}

impl Format {
    /// Guesses the format from the leading bytes of a document.
    ///
    /// Anything that opens with an XML declaration or an `<ADX` element is
    /// ADX; everything else is treated as ADI.
    pub fn detect(input: &str) -> Self {
        let head = input.trim_start_matches('\u{feff}').trim_start();
        let is_xml = head.starts_with("<?xml")
            || head
                .get(..4)
                .is_some_and(|s| s.eq_ignore_ascii_case("<ADX"));
        if is_xml { Format::Adx } else { Format::Adi }
    }

    /// Maps a file extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("adi") {
            Some(Format::Adi)
        } else if ext.eq_ignore_ascii_case("adx") {
            Some(Format::Adx)
        } else {
            None
        }
    }
}
