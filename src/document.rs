//! Decoded document and the format-selecting entry point.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    adi::AdiDecoder,
    adx::AdxDecoder,
    decoder::Decoder,
    error::Result,
    record::{Header, Record},
    types::{Format, RecordId},
};

/// Decode options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Format of the input; detected from its first bytes when `None`.
    pub format: Option<Format>,
    /// Rewrite CRLF to LF inside field payloads.
    pub normalize_newlines: bool,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            format: None,
            normalize_newlines: true,
        }
    }
}

/// A decoded ADI or ADX document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Header fields and dynamic field declarations.
    pub header: Header,
    /// Records in decode order until re-sorted.
    pub records: Vec<Record>,
}

impl Document {
    /// Decodes `input` with the format chosen by `config`.
    pub fn decode(input: &str, config: &DecodeConfig) -> Result<Self> {
        let format = config.format.unwrap_or_else(|| Format::detect(input));
        match format {
            Format::Adi => AdiDecoder::with_config(input, config).decode(),
            Format::Adx => AdxDecoder::with_config(input, config).decode(),
        }
    }

    /// Decodes an ADI document.
    pub fn from_adi(input: &str) -> Result<Self> {
        AdiDecoder::new(input).decode()
    }

    /// Decodes an ADX document.
    pub fn from_adx(input: &str) -> Result<Self> {
        AdxDecoder::new(input).decode()
    }

    /// Looks up a record by id.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|rec| rec.id == id)
    }

    /// Highest record id, if any record was decoded.
    pub fn max_record_id(&self) -> Option<RecordId> {
        self.records.iter().map(|rec| rec.id).max()
    }

    /// Restores decode order.
    pub fn sort_by_id(&mut self, reverse: bool) {
        self.sort_by_key_with(reverse, |rec| rec.id);
    }

    /// Sorts by `QSO_DATE` then `TIME_ON`; missing values sort first.
    pub fn sort_by_datetime(&mut self, reverse: bool) {
        self.sort_by_key_with(reverse, |rec| {
            let date = rec.data("QSO_DATE").unwrap_or("00000000");
            let time = rec.data("TIME_ON").unwrap_or("000000");
            format!("{date}{time}")
        });
    }

    /// Sorts by callsign, ignoring case.
    pub fn sort_by_call(&mut self, reverse: bool) {
        self.sort_by_key_with(reverse, |rec| {
            rec.data("CALL").unwrap_or_default().to_uppercase()
        });
    }

    // Stable in both directions, so ties keep their current relative order.
    fn sort_by_key_with<K: Ord>(&mut self, reverse: bool, key: impl Fn(&Record) -> K) {
        self.records.sort_by(|a, b| {
            let ord: Ordering = key(a).cmp(&key(b));
            if reverse { ord.reverse() } else { ord }
        });
    }
}
