//! Lexical grammar shared by the decoders.
//!
//! Field names are ADIF `Character`s excluding comma, colon, angle brackets
//! and curly brackets. Inner spaces are allowed, leading and trailing ones
//! are not.

use std::sync::LazyLock;

use regex::Regex;

const NAME_EDGE: &str = r"[\x21-\x2B\x2D-\x39\x3B\x3D\x3F-\x7A\x7C\x7E]";
const NAME_INNER: &str = r"[\x20-\x2B\x2D-\x39\x3B\x3D\x3F-\x7A\x7C\x7E]";
const NUMBER: &str = r"-?[0-9]*\.?[0-9]+";

fn field_name() -> String {
    format!("{NAME_EDGE}(?:{NAME_INNER}*{NAME_EDGE})?")
}

/// `<NAME[:LEN[:T]]>` over raw bytes, so the search can resume at any byte
/// offset left behind by a length-prefixed payload.
pub(crate) static TAG: LazyLock<regex::bytes::Regex> = LazyLock::new(|| {
    regex::bytes::Regex::new(&format!(
        r"<({})(?::([0-9]+)(?::([A-Za-z]))?)?>",
        field_name()
    ))
    .expect("valid regex")
});

static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{}$", field_name())).expect("valid regex"));

// Greedy first capture: the split falls on the last underscore.
static APP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?i:APP)_({0})_({0})$", field_name())).expect("valid regex")
});

static USERDEF_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:USERDEF)([0-9]+)$").expect("valid regex"));

static USERDEF_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\{{({NUMBER}):({NUMBER})\}}$")).expect("valid regex")
});

static USERDEF_ENUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{[\x20-\x7E]+\}$").expect("valid regex"));

/// Returns true when `name` is a syntactically valid ADI field name.
pub fn is_field_name(name: &str) -> bool {
    FIELD_NAME.is_match(name)
}

/// Splits `APP_<programid>_<fieldname>` into its two components, keeping
/// their original case.
pub fn split_app_name(name: &str) -> Option<(&str, &str)> {
    let caps = APP_NAME.captures(name)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Returns the numeric id of a `USERDEFn` header tag.
pub fn userdef_id(name: &str) -> Option<&str> {
    USERDEF_TAG
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses `{lower:upper}`.
pub fn range_bounds(text: &str) -> Option<(f64, f64)> {
    let caps = USERDEF_RANGE.captures(text)?;
    let lower = caps.get(1)?.as_str().parse().ok()?;
    let upper = caps.get(2)?.as_str().parse().ok()?;
    Some((lower, upper))
}

/// Returns true for a brace-enclosed `{lower:upper}` pair.
pub fn is_range(text: &str) -> bool {
    USERDEF_RANGE.is_match(text)
}

/// Returns true for a brace-enclosed enumeration list.
pub fn is_enumeration(text: &str) -> bool {
    USERDEF_ENUM.is_match(text)
}

/// Counts line terminators, treating CRLF as one.
pub(crate) fn count_line_breaks(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => count += 1,
            b'\r' => {
                count += 1;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    count
}
