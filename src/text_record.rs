//! DNS-SD TXT record codec.
//!
//! A TXT record attached to a service is a sequence of length-prefixed
//! `key` or `key=value` entries. Keys and values are raw bytes; a key with no
//! value is a boolean-style flag. Encoding is deterministic: entries are
//! emitted in key order, so two records with the same contents always encode
//! to the same bytes.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::SeqAccess;
use serde::de::Visitor;
use serde::ser::SerializeSeq;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use tracing::trace;

use crate::constants::MAX_TXT_ENTRY_LENGTH;
use crate::constants::TXT_KEY_VALUE_SEPARATOR;
use crate::error::CodecError;
use crate::error::CodecResult;

/// Key/value metadata attached to a service.
///
/// ```
/// use dnssd_codec::TextRecord;
///
/// let mut txt = TextRecord::new();
/// txt.insert("path", "/printers/front");
/// txt.insert_flag("duplex");
///
/// let bytes = txt.encode().unwrap();
/// assert_eq!(TextRecord::decode(&bytes).unwrap(), txt);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRecord {
    records: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl TextRecord {
    /// Create an empty record.
    pub fn new() -> TextRecord {
        TextRecord::default()
    }

    /// Decode an encoded TXT blob.
    ///
    /// Zero-length entries are padding and skipped. An entry whose declared
    /// length overruns the buffer fails with
    /// [`CodecError::TextRecordTruncated`]; an entry starting with `=` has no
    /// key and fails with [`CodecError::TextRecordKeyMissing`]. When a key
    /// repeats, the last entry wins.
    pub fn decode(bytes: &[u8]) -> CodecResult<TextRecord> {
        let mut records = BTreeMap::new();
        let mut rest = bytes;

        while let Some((&len, tail)) = rest.split_first() {
            let len = len as usize;
            if len == 0 {
                trace!("skipping zero-length text record entry");
                rest = tail;
                continue;
            }
            if tail.len() < len {
                return Err(CodecError::TextRecordTruncated {
                    declared: len,
                    remaining: tail.len(),
                });
            }
            let (entry, tail) = tail.split_at(len);
            if entry[0] == TXT_KEY_VALUE_SEPARATOR {
                return Err(CodecError::TextRecordKeyMissing);
            }

            match entry.iter().position(|&b| b == TXT_KEY_VALUE_SEPARATOR) {
                Some(at) => {
                    records.insert(entry[..at].to_vec(), Some(entry[at + 1..].to_vec()));
                }
                None => {
                    records.insert(entry.to_vec(), None);
                }
            }
            rest = tail;
        }

        Ok(TextRecord { records })
    }

    /// Encode to the wire format.
    ///
    /// Entries are emitted in key order. Keys must be non-empty and free of
    /// `=`; each encoded `key` or `key=value` entry must fit the single
    /// length octet (255 bytes).
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        let mut out = Vec::new();
        for (key, value) in &self.records {
            if key.is_empty() {
                return Err(CodecError::EmptyTextRecordKey);
            }
            if key.contains(&TXT_KEY_VALUE_SEPARATOR) {
                return Err(CodecError::KeyContainsSeparator {
                    key: String::from_utf8_lossy(key).into_owned(),
                });
            }

            let len = match value {
                Some(value) => key.len() + 1 + value.len(),
                None => key.len(),
            };
            if len > MAX_TXT_ENTRY_LENGTH {
                return Err(CodecError::TextRecordEntryTooLong {
                    key: String::from_utf8_lossy(key).into_owned(),
                    len,
                });
            }

            out.push(len as u8);
            out.extend_from_slice(key);
            if let Some(value) = value {
                out.push(TXT_KEY_VALUE_SEPARATOR);
                out.extend_from_slice(value);
            }
        }
        Ok(out)
    }

    /// Look up a key.
    ///
    /// Returns `None` when the key is absent, `Some(None)` for a key-only
    /// flag, and `Some(Some(value))` for a `key=value` entry.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Option<&[u8]>> {
        self.records.get(key.as_ref()).map(|v| v.as_deref())
    }

    /// Set a key to a value, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.records.insert(key.into(), Some(value.into()));
    }

    /// Set a key-only boolean flag, replacing any previous entry.
    pub fn insert_flag(&mut self, key: impl Into<Vec<u8>>) {
        self.records.insert(key.into(), None);
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: impl AsRef<[u8]>) -> Option<Option<Vec<u8>>> {
        self.records.remove(key.as_ref())
    }

    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.records.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], Option<&[u8]>)> {
        self.records.iter().map(|(k, v)| (k.as_slice(), v.as_deref()))
    }
}

impl FromIterator<(Vec<u8>, Option<Vec<u8>>)> for TextRecord {
    fn from_iter<I: IntoIterator<Item = (Vec<u8>, Option<Vec<u8>>)>>(iter: I) -> TextRecord {
        TextRecord {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TextRecord {
    type Item = (Vec<u8>, Option<Vec<u8>>);
    type IntoIter = btree_map::IntoIter<Vec<u8>, Option<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.records {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match value {
                Some(value) => write!(
                    f,
                    "{}={}",
                    String::from_utf8_lossy(key),
                    String::from_utf8_lossy(value)
                )?,
                None => write!(f, "{}", String::from_utf8_lossy(key))?,
            }
        }
        Ok(())
    }
}

// Keys are raw bytes, so the record serializes as a sequence of entry pairs
// rather than a map (JSON maps require string keys).
impl Serialize for TextRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for entry in &self.records {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TextRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<TextRecord, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = TextRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of text record entries")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TextRecord, A::Error> {
                let mut records = BTreeMap::new();
                while let Some((key, value)) = seq.next_element::<(Vec<u8>, Option<Vec<u8>>)>()? {
                    records.insert(key, value);
                }
                Ok(TextRecord { records })
            }
        }

        deserializer.deserialize_seq(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_and_padding() {
        assert!(TextRecord::decode(b"").unwrap().is_empty());
        assert!(TextRecord::decode(b"\x00").unwrap().is_empty());
        assert!(TextRecord::decode(b"\x00\x00").unwrap().is_empty());
    }

    #[test]
    fn test_decode_key_only() {
        let txt = TextRecord::decode(b"\x01k").unwrap();
        assert_eq!(txt.get("k"), Some(None));
    }

    #[test]
    fn test_decode_key_value() {
        let txt = TextRecord::decode(b"\x03k=v").unwrap();
        assert_eq!(txt.get("k"), Some(Some(&b"v"[..])));
    }

    #[test]
    fn test_decode_key_with_empty_value() {
        let txt = TextRecord::decode(b"\x02k=").unwrap();
        assert_eq!(txt.get("k"), Some(Some(&b""[..])));
    }

    #[test]
    fn test_decode_padding_then_entries() {
        let txt = TextRecord::decode(b"\x00\x03k=v").unwrap();
        assert_eq!(txt.get("k"), Some(Some(&b"v"[..])));
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            TextRecord::decode(b"\x00\x01"),
            Err(CodecError::TextRecordTruncated { declared: 1, remaining: 0 })
        ));
    }

    #[test]
    fn test_decode_missing_key() {
        assert!(matches!(
            TextRecord::decode(b"\x01="),
            Err(CodecError::TextRecordKeyMissing)
        ));
        assert!(matches!(
            TextRecord::decode(b"\x02=v"),
            Err(CodecError::TextRecordKeyMissing)
        ));
    }

    #[test]
    fn test_decode_last_key_wins() {
        let txt = TextRecord::decode(b"\x03k=a\x03k=b").unwrap();
        assert_eq!(txt.get("k"), Some(Some(&b"b"[..])));
        assert_eq!(txt.len(), 1);
    }

    #[test]
    fn test_encode_single_pair() {
        let mut txt = TextRecord::new();
        txt.insert("key", "value");
        assert_eq!(txt.encode().unwrap(), b"\x09key=value");
    }

    #[test]
    fn test_encode_sorted_by_key() {
        let mut txt = TextRecord::new();
        txt.insert("b", "2");
        txt.insert("a", "1");
        assert_eq!(txt.encode().unwrap(), b"\x03a=1\x03b=2");
    }

    #[test]
    fn test_encode_flag_omits_separator() {
        let mut txt = TextRecord::new();
        txt.insert_flag("duplex");
        assert_eq!(txt.encode().unwrap(), b"\x06duplex");
    }

    #[test]
    fn test_encode_rejects_empty_key() {
        let mut txt = TextRecord::new();
        txt.insert("", "v");
        assert!(matches!(txt.encode(), Err(CodecError::EmptyTextRecordKey)));
    }

    #[test]
    fn test_encode_rejects_separator_in_key() {
        let mut txt = TextRecord::new();
        txt.insert("a=b", "v");
        assert!(matches!(
            txt.encode(),
            Err(CodecError::KeyContainsSeparator { .. })
        ));
    }

    #[test]
    fn test_encode_rejects_oversized_entry() {
        let mut txt = TextRecord::new();
        txt.insert("key", vec![b'x'; 252]);
        let err = txt.encode().unwrap_err();
        match err {
            CodecError::TextRecordEntryTooLong { key, len } => {
                assert_eq!(key, "key");
                assert_eq!(len, 256);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_entry_at_limit() {
        let mut txt = TextRecord::new();
        txt.insert("key", vec![b'x'; 251]);
        let bytes = txt.encode().unwrap();
        assert_eq!(bytes[0], 255);
        assert_eq!(bytes.len(), 256);
    }

    #[test]
    fn test_round_trip() {
        let mut txt = TextRecord::new();
        txt.insert("path", "/printers/front");
        txt.insert("note", "2nd floor");
        txt.insert_flag("duplex");
        let bytes = txt.encode().unwrap();
        assert_eq!(TextRecord::decode(&bytes).unwrap(), txt);
    }
}
