//! Serde helpers for model fields

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serializer};

/// Option<Vec<u8>> as a base64 string (or null)
pub mod option_base64 {
    use super::*;

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(bytes) => s.serialize_some(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(d)?
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Blob {
        #[serde(default, with = "super::option_base64")]
        data: Option<Vec<u8>>,
    }

    #[test]
    fn test_encodes_bytes_as_base64() {
        let json = serde_json::to_string(&Blob {
            data: Some(vec![0x89, b'P', b'N', b'G']),
        })
        .unwrap();
        assert_eq!(json, r#"{"data":"iVBORw=="}"#);
    }

    #[test]
    fn test_null_and_missing_decode_to_none() {
        let blob: Blob = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(blob.data, None);
        let blob: Blob = serde_json::from_str("{}").unwrap();
        assert_eq!(blob.data, None);
    }

    #[test]
    fn test_rejects_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str(r#"{"data":"not base64!"}"#);
        assert!(result.is_err());
    }
}
