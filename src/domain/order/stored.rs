use serde::Deserialize;

// ============================================================================
// Stored Order Data - Plugin-specific row persisted next to the shop order
// ============================================================================
//
// The row comes from a loosely typed store: numbers may arrive as strings,
// floats or not at all, and an empty string means "never filled in". The
// parsers below keep that distinction as `None` instead of collapsing it to
// zero or false.
//
// ============================================================================

/// A scalar column value as it comes out of storage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredScalar {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for StoredScalar {
    fn from(value: &str) -> Self {
        StoredScalar::Text(value.to_string())
    }
}

impl From<f64> for StoredScalar {
    fn from(value: f64) -> Self {
        StoredScalar::Number(value)
    }
}

impl From<bool> for StoredScalar {
    fn from(value: bool) -> Self {
        StoredScalar::Flag(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoredOrderData {
    pub id: String,
    pub carrier_id: String,
    pub weight: Option<StoredScalar>,
    pub length: Option<StoredScalar>,
    pub width: Option<StoredScalar>,
    pub height: Option<StoredScalar>,
    pub packet_id: Option<String>,
    pub packet_claim_id: Option<String>,
    pub packet_claim_password: Option<String>,
    pub is_exported: Option<StoredScalar>,
    pub is_label_printed: Option<StoredScalar>,
    pub carrier_number: Option<String>,
    pub packet_status: Option<String>,
    pub stored_until: Option<String>,
    pub address_validated: Option<StoredScalar>,
    pub adult_content: Option<StoredScalar>,
    pub value: Option<StoredScalar>,
    pub cod: Option<StoredScalar>,
    pub deliver_on: Option<String>,
    pub api_error_message: Option<String>,
    pub api_error_date: Option<String>,
    /// JSON snapshot of a validated delivery address.
    pub delivery_address: Option<String>,
    pub car_delivery_id: Option<String>,
    pub point_id: Option<String>,
    pub point_name: Option<String>,
    pub point_city: Option<String>,
    pub point_zip: Option<String>,
    pub point_street: Option<String>,
    pub point_url: Option<String>,
}

impl StoredOrderData {
    pub fn new(id: impl Into<String>, carrier_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            carrier_id: carrier_id.into(),
            ..Default::default()
        }
    }
}

/// Missing or empty values are absent; anything else is read like a loose
/// numeric cast, so unparsable text becomes `0.0`.
pub fn parse_float(value: Option<&StoredScalar>) -> Option<f64> {
    match value? {
        StoredScalar::Text(text) if text.is_empty() => None,
        StoredScalar::Text(text) => Some(leading_float(text)),
        StoredScalar::Number(number) => Some(*number),
        StoredScalar::Flag(flag) => Some(if *flag { 1.0 } else { 0.0 }),
    }
}

/// Missing or empty values are absent; `"0"` and zero are false, every
/// other value is true.
pub fn parse_bool(value: Option<&StoredScalar>) -> Option<bool> {
    match value? {
        StoredScalar::Text(text) if text.is_empty() => None,
        StoredScalar::Text(text) => Some(text != "0"),
        StoredScalar::Number(number) => Some(*number != 0.0),
        StoredScalar::Flag(flag) => Some(*flag),
    }
}

pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|text| !text.is_empty()).map(str::to_string)
}

/// Reads the longest numeric prefix of `text` (after leading whitespace).
fn leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if has_digits || fraction_end > fraction_start {
            has_digits = true;
            end = fraction_end;
        }
    }
    if !has_digits {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

// ============================================================================
// Unit Tests
// ============================================================================
