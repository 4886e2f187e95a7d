// Parsing of free-text monetary strings as they appear in financial export
// records, with inconsistent locale-dependent formatting.
use shared::models::{CurrencyCode, ParsedAmount};

/// One row per supported currency: a symbol that may appear anywhere in the
/// record and an alphabetic prefix that may start it. Detection scans every
/// symbol before any prefix, so adding a row never reorders existing markers.
struct CurrencyMarker {
    code: CurrencyCode,
    symbol: char,
    prefix: &'static str,
}

const MARKERS: &[CurrencyMarker] = &[
    CurrencyMarker {
        code: CurrencyCode::Inr,
        symbol: '₹',
        prefix: "INR",
    },
    CurrencyMarker {
        code: CurrencyCode::Usd,
        symbol: '$',
        prefix: "USD",
    },
];

/// Parses a free-text monetary string into a [`ParsedAmount`].
///
/// The pipeline is strictly linear: trim, detect the currency marker, strip
/// everything that is not part of the numeral, resolve to `f64`. Malformed
/// input never raises or panics; it produces the zero-value, default-currency
/// fallback so batch callers can keep processing subsequent records.
///
/// ```
/// use engine::parse_currency;
/// use shared::models::CurrencyCode;
///
/// let amount = parse_currency("₹1,234.56");
/// assert_eq!(amount.value, 1234.56);
/// assert_eq!(amount.currency, CurrencyCode::Inr);
/// ```
pub fn parse_currency(input: &str) -> ParsedAmount {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedAmount::fallback();
    }

    let currency = detect_currency(trimmed);
    let numeral = normalize_numeral(trimmed);

    // A failed resolve discards the detected marker as well: a record that
    // fails numerically cannot be trusted to be correctly currency-tagged.
    match resolve_value(&numeral) {
        Some(value) => ParsedAmount::new(value, currency),
        None => ParsedAmount::fallback(),
    }
}

/// A symbol anywhere in the record wins over an alphabetic prefix. An
/// unmarked numeral is assumed to be in the primary working currency
/// rather than treated as an error.
fn detect_currency(record: &str) -> CurrencyCode {
    for marker in MARKERS {
        if record.contains(marker.symbol) {
            return marker.code;
        }
    }
    for marker in MARKERS {
        if starts_with_ignore_case(record, marker.prefix) {
            return marker.code;
        }
    }
    CurrencyCode::default()
}

fn starts_with_ignore_case(record: &str, prefix: &str) -> bool {
    // get() rather than slicing: the record may open with a multi-byte
    // symbol, and a hard slice could land inside a char boundary.
    record
        .get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// Keeps ASCII digits, `-` and `.` in their original order; drops the
/// currency marker, grouping commas and interior whitespace in one pass.
///
/// Comma stripping is deliberately position-blind: Western grouping
/// (`1,234,567.89`) and lakh/crore grouping (`1,23,456.78`) reduce to the
/// same digit run, since grouping separators only ever subdivide an unbroken
/// digit sequence. A minus between symbol and digits (`"₹-100.50"`) becomes
/// leading once the symbol is gone. Survivors the resolver cannot accept
/// (a second `.`, a stray `-`) are rejected there, not repaired here.
fn normalize_numeral(record: &str) -> String {
    record
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect()
}

/// The cleaned numeral either parses to a finite float or the whole record
/// falls back. The finite check covers digit runs long enough to overflow
/// `f64` to infinity.
fn resolve_value(numeral: &str) -> Option<f64> {
    numeral.parse::<f64>().ok().filter(|value| value.is_finite())
}
