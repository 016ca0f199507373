//! Cursor-based reader and writer for RFC 1035 wire primitives.
//!
//! Record data arrives as uncompressed RDATA blobs, so the reader only has to
//! handle big-endian integers, character-strings, and plain label sequences.
//! Every read is bounds-checked; an overrun surfaces as a typed error, never
//! a panic.

use crate::constants::MAX_CHARACTER_STRING_LENGTH;
use crate::constants::MAX_LABEL_LENGTH;
use crate::error::CodecError;
use crate::error::CodecResult;

/// Sequential reader over a borrowed byte buffer.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    pub(crate) fn read_bytes(&mut self, len: usize) -> CodecResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(CodecError::UnexpectedEnd {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub(crate) fn read_u16(&mut self) -> CodecResult<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32(&mut self) -> CodecResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read one RFC 1035 character-string: a length octet followed by that
    /// many raw bytes.
    pub(crate) fn read_character_string(&mut self) -> CodecResult<&'a [u8]> {
        let len = self.read_u8()? as usize;
        self.read_bytes(len)
    }

    /// Read an uncompressed domain name: labels until the zero-length root.
    ///
    /// The decoded form keeps one trailing dot per label, so
    /// `\x07nowhere\x07example\x00` becomes `nowhere.example.` and a lone
    /// root label becomes `.`.
    pub(crate) fn read_domain_name(&mut self) -> CodecResult<String> {
        let mut name = String::new();
        loop {
            if self.is_empty() {
                return Err(CodecError::NameTruncated);
            }
            let len = self.read_u8()? as usize;
            if len == 0 {
                break;
            }
            let label = self.read_bytes(len).map_err(|_| CodecError::NameTruncated)?;
            let label = std::str::from_utf8(label).map_err(|_| CodecError::LabelNotUtf8)?;
            name.push_str(label);
            name.push('.');
        }
        if name.is_empty() {
            name.push('.');
        }
        Ok(name)
    }
}

/// Append-only writer producing wire bytes.
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn new() -> Writer {
        Writer { buf: Vec::new() }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub(crate) fn put_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn put_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write one character-string. The payload must fit its length octet.
    pub(crate) fn put_character_string(&mut self, bytes: &[u8]) -> CodecResult<()> {
        if bytes.len() > MAX_CHARACTER_STRING_LENGTH {
            return Err(CodecError::CharacterStringTooLong { len: bytes.len() });
        }
        self.buf.push(bytes.len() as u8);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Write a domain name as an uncompressed label sequence.
    ///
    /// Accepts the presentation form produced by
    /// [`Reader::read_domain_name`]: dot-separated labels with at most one
    /// trailing dot. `.` and the empty string encode to a bare root label.
    pub(crate) fn put_domain_name(&mut self, name: &str) -> CodecResult<()> {
        let name = name.strip_suffix('.').unwrap_or(name);
        if !name.is_empty() {
            for label in name.split('.') {
                if label.is_empty() {
                    return Err(CodecError::InvalidLabel {
                        label: label.to_string(),
                        reason: "empty label".to_string(),
                    });
                }
                if label.len() > MAX_LABEL_LENGTH {
                    return Err(CodecError::InvalidLabel {
                        label: label.to_string(),
                        reason: format!("exceeds {} bytes", MAX_LABEL_LENGTH),
                    });
                }
                self.buf.push(label.len() as u8);
                self.buf.extend_from_slice(label.as_bytes());
            }
        }
        self.buf.push(0);
        Ok(())
    }
}
