//! Decoding of ADIF amateur-radio logs in both the tagged ADI and the XML
//! ADX formats into one record model.
//!
//! # Examples
//!
//! Decoding an ADI document with [`document::Document`]:
//! ```
//! use adif::document::Document;
//!
//! let doc = Document::from_adi("<CALL:6>JS2PBF<BAND:2>2M<EOR>").expect("decode");
//! assert!(doc.header.is_empty());
//! assert_eq!(doc.records.len(), 1);
//! assert_eq!(doc.records[0].data("CALL"), Some("JS2PBF"));
//! ```
//!
//! Letting the format be detected, and reading user-defined fields:
//! ```
//! use adif::document::{DecodeConfig, Document};
//!
//! let adx = r#"<?xml version="1.0"?>
//! <ADX>
//!   <HEADER>
//!     <USERDEF FIELDID="1" TYPE="E" ENUM="{S,M,L}">SWEATERSIZE</USERDEF>
//!   </HEADER>
//!   <RECORDS>
//!     <RECORD><CALL>JA6OTC</CALL><USERDEF FIELDNAME="SWEATERSIZE">M</USERDEF></RECORD>
//!   </RECORDS>
//! </ADX>"#;
//! let doc = Document::decode(adx, &DecodeConfig::default()).expect("decode");
//! assert!(doc.header.userdef("SweaterSize").is_some());
//! assert_eq!(doc.records[0].data("SWEATERSIZE"), Some("M"));
//! ```
//!
//! Walking the raw ADI event stream:
//! ```
//! use adif::adi::{AdiEvent, Tokenizer};
//!
//! let names: Vec<_> = Tokenizer::new("<CALL:4>W1AW<EOR>")
//!     .filter_map(|ev| match ev {
//!         AdiEvent::StartField { name, .. } => Some(name.into_owned()),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(names, ["CALL", "EOR"]);
//! ```
#![deny(missing_docs)]

/// Tagged ADI format: tokenizer, event visitor and decoder.
pub mod adi;
/// XML ADX format decoder.
pub mod adx;
mod builder;
/// Decoder trait shared by both formats.
pub mod decoder;
/// Decoded document, decode options and sorting.
pub mod document;
/// Error type and result alias.
pub mod error;
/// Fields and dynamic field declarations.
pub mod field;
/// Field-name and declaration grammar.
pub mod grammar;
/// Records and the document header.
pub mod record;
/// Shared primitive types.
pub mod types;

pub use document::{DecodeConfig, Document};
pub use error::{Error, ErrorKind, Result};
