//! URL encoding helpers for navigation state.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Serialize, de::DeserializeOwned};

// everything but the characters encodeURIComponent leaves alone
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

/// Serializes a value to CBOR and then to URL-safe base64.
pub fn encode_state<T: Serialize>(value: &T) -> String {
    let mut serialized = Vec::new();
    if ciborium::into_writer(value, &mut serialized).is_err() {
        return String::new();
    }
    URL_SAFE_NO_PAD.encode(serialized)
}

pub fn decode_state<T: DeserializeOwned>(encoded: &str) -> Result<T, StateParseError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded.as_bytes())
        .map_err(StateParseError::DecodeError)?;
    ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(StateParseError::CiboriumError)
}

/// Drops keys whose value is missing or empty, so no `key=` pair is emitted.
pub fn remove_empty_keys(
    pairs: impl IntoIterator<Item = (String, Option<String>)>,
) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
}

pub fn encode_query_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY_COMPONENT),
                utf8_percent_encode(v, QUERY_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Splits `a=1&b=2` into decoded pairs. A leading `?` is ignored.
pub fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (k, v) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(s: &str) -> String {
    percent_decode_str(&s.replace('+', " ")).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_empty_and_missing_values() {
        let pairs = remove_empty_keys([
            ("filters".to_string(), Some(String::new())),
            ("facetTab".to_string(), Some("files".to_string())),
            ("bioId".to_string(), None),
        ]);
        assert_eq!(pairs, vec![("facetTab".to_string(), "files".to_string())]);
    }

    #[test]
    fn query_pairs_are_percent_encoded_and_decoded() {
        let pairs = vec![
            ("cases_sort".to_string(), "summary.file_count:desc".to_string()),
            ("name".to_string(), "Head & Neck".to_string()),
        ];
        let encoded = encode_query_pairs(&pairs);
        assert_eq!(encoded, "cases_sort=summary.file_count%3Adesc&name=Head%20%26%20Neck");
        assert_eq!(parse_query_pairs(&format!("?{encoded}")), pairs);
    }

    #[test]
    fn state_survives_encoding() {
        let value = vec!["a".to_string(), "b".to_string()];
        let encoded = encode_state(&value);
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        let decoded: Vec<String> = decode_state(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn garbage_state_is_an_error() {
        assert!(matches!(decode_state::<Vec<String>>("%%%"), Err(StateParseError::DecodeError(_))));
    }
}
