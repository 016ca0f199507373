//! Error types for the reply codecs.
//!
//! Two failure families share one enum: malformed-wire errors raised while
//! decoding bytes delivered by the discovery service, and validation errors
//! raised while encoding caller-supplied values. Every failure is synchronous
//! and local to the call that produced it; nothing here is retried.

use std::net::IpAddr;

use snafu::Snafu;

use super::record_type::RecordType;

/// Errors produced by the name, TXT, and resource-record codecs.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CodecError {
    // ------------------------------------------------------------------
    // Malformed wire data (decode side)
    // ------------------------------------------------------------------
    /// A TXT entry declared more bytes than the buffer holds.
    #[snafu(display("ran out of data in text record: entry wants {declared} bytes, {remaining} remain"))]
    TextRecordTruncated {
        /// Length the entry's length octet declared.
        declared: usize,
        /// Bytes actually left in the buffer.
        remaining: usize,
    },

    /// A TXT entry began with `=`, leaving it without a key.
    #[snafu(display("text record entry has no key"))]
    TextRecordKeyMissing,

    /// A fixed-width field ran past the end of the record data.
    #[snafu(display("record data ended early: wanted {needed} more bytes, {remaining} remain"))]
    UnexpectedEnd {
        /// Bytes the decoder still needed.
        needed: usize,
        /// Bytes actually left in the buffer.
        remaining: usize,
    },

    /// A domain name was not terminated by the root label before the buffer
    /// ended.
    #[snafu(display("domain name ran past the end of the record data"))]
    NameTruncated,

    /// A decoded label was not valid UTF-8.
    #[snafu(display("domain name label is not valid UTF-8"))]
    LabelNotUtf8,

    /// Record data had bytes left over after its last field.
    #[snafu(display("{record_type} record has {count} trailing bytes"))]
    TrailingBytes {
        /// The record type being decoded.
        record_type: RecordType,
        /// Number of unconsumed bytes.
        count: usize,
    },

    /// Fixed-size record data had the wrong length.
    #[snafu(display("{record_type} record data must be {expected} bytes, got {actual}"))]
    RecordLength {
        /// The record type being decoded.
        record_type: RecordType,
        /// Required data length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A full service name did not decompose into instance, service type,
    /// and domain.
    #[snafu(display("invalid full name: {reason}"))]
    InvalidFullName {
        /// Why decomposition failed.
        reason: String,
    },

    // ------------------------------------------------------------------
    // Invalid caller input (encode side)
    // ------------------------------------------------------------------
    /// A TXT key was empty.
    #[snafu(display("text record key is empty"))]
    EmptyTextRecordKey,

    /// A TXT key contained the `=` separator.
    #[snafu(display("text record key {key:?} contains '='"))]
    KeyContainsSeparator {
        /// The offending key, rendered lossily.
        key: String,
    },

    /// A `key=value` pair was too large for its single length octet.
    #[snafu(display("text record entry for key {key:?} is {len} bytes, limit is 255"))]
    TextRecordEntryTooLong {
        /// The offending key, rendered lossily.
        key: String,
        /// Encoded entry length.
        len: usize,
    },

    /// A TXT record exceeded the RDATA size limit.
    #[snafu(display("text record data is {len} bytes, limit is {max}"))]
    TxtDataTooLong {
        /// Total encoded length.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// A character-string payload exceeded 255 bytes.
    #[snafu(display("character-string is {len} bytes, limit is 255"))]
    CharacterStringTooLong {
        /// Payload length.
        len: usize,
    },

    /// A domain name label exceeded 63 bytes, or was empty.
    #[snafu(display("invalid label {label:?} in domain name: {reason}"))]
    InvalidLabel {
        /// The offending label.
        label: String,
        /// Why the label is invalid.
        reason: String,
    },

    /// An address of the wrong family was supplied for an address record.
    #[snafu(display("address {address} is not valid for {record_type} records"))]
    AddressFamily {
        /// The record type being encoded.
        record_type: RecordType,
        /// The mismatched address.
        address: IpAddr,
    },

    /// Encoding was requested for a record type the codec does not model.
    #[snafu(display("cannot encode {record_type} record data"))]
    UnsupportedRecordType {
        /// The unsupported record type.
        record_type: RecordType,
    },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
