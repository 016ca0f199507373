//! Structured resource-record data.
//!
//! Converts the opaque RDATA blob delivered with a query reply into a typed
//! value, and typed values back into wire bytes. Only the record types DNS-SD
//! actually traffics in get structured codecs; everything else decodes to an
//! [`RecordData::Opaque`] carrying the untouched bytes. Opaque data cannot be
//! re-encoded; asking for that is an error, never a silent pass-through.

use std::fmt;
use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::MAX_TXT_RECORD_LENGTH;
use crate::error::CodecError;
use crate::error::CodecResult;
use crate::record_type::RecordType;
use crate::wire::Reader;
use crate::wire::Writer;

/// Decoded resource-record data, tagged by record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordData {
    /// IPv4 host address.
    A(Ipv4Addr),
    /// IPv6 host address.
    Aaaa(Ipv6Addr),
    /// Canonical name alias.
    Cname(String),
    /// Authoritative name server.
    Ns(String),
    /// Domain name pointer.
    Ptr(String),
    /// Mail exchange.
    Mx {
        /// Lower is preferred.
        preference: u16,
        /// Mail server host name.
        exchange: String,
    },
    /// Start of a zone of authority.
    Soa {
        /// Primary name server for the zone.
        mname: String,
        /// Mailbox of the person responsible, in domain-name form.
        rname: String,
        /// Zone serial number.
        serial: u32,
        /// Secondary refresh interval, seconds.
        refresh: u32,
        /// Retry interval after a failed refresh, seconds.
        retry: u32,
        /// Secondary expiry, seconds.
        expire: u32,
        /// Negative-caching TTL, seconds.
        minimum: u32,
    },
    /// Service location.
    Srv {
        /// Lower is preferred.
        priority: u16,
        /// Load-balancing weight among equal priorities.
        weight: u16,
        /// TCP or UDP port.
        port: u16,
        /// Target host name.
        target: String,
    },
    /// Raw character-strings. No key=value interpretation here; that is
    /// [`TextRecord`](crate::text_record::TextRecord)'s job.
    Txt(Vec<Vec<u8>>),
    /// Data of a record type without a structured codec, untouched.
    Opaque {
        /// The reported record type.
        record_type: RecordType,
        /// The raw RDATA bytes.
        data: Vec<u8>,
    },
}

impl RecordData {
    /// Decode RDATA bytes for a record type.
    ///
    /// Unrecognized types are not an error: their bytes come back unchanged
    /// in an [`RecordData::Opaque`]. Malformed data for a recognized type is
    /// a malformed-wire error.
    pub fn decode(record_type: RecordType, data: &[u8]) -> CodecResult<RecordData> {
        let mut reader = Reader::new(data);
        let decoded = match record_type {
            RecordType::A => {
                let octets: [u8; 4] = fixed(record_type, data)?;
                RecordData::A(Ipv4Addr::from(octets))
            }
            RecordType::AAAA => {
                let octets: [u8; 16] = fixed(record_type, data)?;
                RecordData::Aaaa(Ipv6Addr::from(octets))
            }
            RecordType::CNAME => RecordData::Cname(reader.read_domain_name()?),
            RecordType::NS => RecordData::Ns(reader.read_domain_name()?),
            RecordType::PTR => RecordData::Ptr(reader.read_domain_name()?),
            RecordType::MX => RecordData::Mx {
                preference: reader.read_u16()?,
                exchange: reader.read_domain_name()?,
            },
            RecordType::SOA => RecordData::Soa {
                mname: reader.read_domain_name()?,
                rname: reader.read_domain_name()?,
                serial: reader.read_u32()?,
                refresh: reader.read_u32()?,
                retry: reader.read_u32()?,
                expire: reader.read_u32()?,
                minimum: reader.read_u32()?,
            },
            RecordType::SRV => RecordData::Srv {
                priority: reader.read_u16()?,
                weight: reader.read_u16()?,
                port: reader.read_u16()?,
                target: reader.read_domain_name()?,
            },
            RecordType::TXT => {
                let mut strings = Vec::new();
                while !reader.is_empty() {
                    strings.push(reader.read_character_string()?.to_vec());
                }
                RecordData::Txt(strings)
            }
            other => {
                trace!(record_type = %other, len = data.len(), "passing through opaque record data");
                return Ok(RecordData::Opaque {
                    record_type: other,
                    data: data.to_vec(),
                });
            }
        };

        // Name-bearing shapes must consume the whole buffer; anything left
        // over is not this record's data.
        match decoded {
            RecordData::A(_) | RecordData::Aaaa(_) | RecordData::Txt(_) => {}
            _ if !reader.is_empty() => {
                return Err(CodecError::TrailingBytes {
                    record_type,
                    count: reader.remaining(),
                });
            }
            _ => {}
        }

        Ok(decoded)
    }

    /// Encode back to RDATA bytes.
    ///
    /// The exact inverse of [`RecordData::decode`] for every structured
    /// variant. [`RecordData::Opaque`] has no encoding and fails with
    /// [`CodecError::UnsupportedRecordType`].
    pub fn encode(&self) -> CodecResult<Vec<u8>> {
        let mut writer = Writer::new();
        match self {
            RecordData::A(addr) => writer.put_bytes(&addr.octets()),
            RecordData::Aaaa(addr) => writer.put_bytes(&addr.octets()),
            RecordData::Cname(name) | RecordData::Ns(name) | RecordData::Ptr(name) => {
                writer.put_domain_name(name)?;
            }
            RecordData::Mx { preference, exchange } => {
                writer.put_u16(*preference);
                writer.put_domain_name(exchange)?;
            }
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => {
                writer.put_domain_name(mname)?;
                writer.put_domain_name(rname)?;
                writer.put_u32(*serial);
                writer.put_u32(*refresh);
                writer.put_u32(*retry);
                writer.put_u32(*expire);
                writer.put_u32(*minimum);
            }
            RecordData::Srv {
                priority,
                weight,
                port,
                target,
            } => {
                writer.put_u16(*priority);
                writer.put_u16(*weight);
                writer.put_u16(*port);
                writer.put_domain_name(target)?;
            }
            RecordData::Txt(strings) => {
                for string in strings {
                    writer.put_character_string(string)?;
                }
                if writer.len() > MAX_TXT_RECORD_LENGTH {
                    return Err(CodecError::TxtDataTooLong {
                        len: writer.len(),
                        max: MAX_TXT_RECORD_LENGTH,
                    });
                }
            }
            RecordData::Opaque { record_type, .. } => {
                return Err(CodecError::UnsupportedRecordType {
                    record_type: *record_type,
                });
            }
        }
        Ok(writer.into_bytes())
    }

    /// The record type this data belongs to.
    pub const fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Ptr(_) => RecordType::PTR,
            RecordData::Mx { .. } => RecordType::MX,
            RecordData::Soa { .. } => RecordType::SOA,
            RecordData::Srv { .. } => RecordType::SRV,
            RecordData::Txt(_) => RecordType::TXT,
            RecordData::Opaque { record_type, .. } => *record_type,
        }
    }

    /// Build an address record, checking the address family against the
    /// record type: an IPv6 address under [`RecordType::A`] (or IPv4 under
    /// [`RecordType::AAAA`]) is an [`CodecError::AddressFamily`] error.
    pub fn address(record_type: RecordType, address: IpAddr) -> CodecResult<RecordData> {
        match (record_type, address) {
            (RecordType::A, IpAddr::V4(addr)) => Ok(RecordData::A(addr)),
            (RecordType::AAAA, IpAddr::V6(addr)) => Ok(RecordData::Aaaa(addr)),
            (RecordType::A, address) | (RecordType::AAAA, address) => {
                Err(CodecError::AddressFamily { record_type, address })
            }
            _ => Err(CodecError::UnsupportedRecordType { record_type }),
        }
    }

    /// Create an A record.
    pub const fn a(addr: Ipv4Addr) -> RecordData {
        RecordData::A(addr)
    }

    /// Create an AAAA record.
    pub const fn aaaa(addr: Ipv6Addr) -> RecordData {
        RecordData::Aaaa(addr)
    }

    /// Create a CNAME record.
    pub fn cname(target: impl Into<String>) -> RecordData {
        RecordData::Cname(target.into())
    }

    /// Create an NS record.
    pub fn ns(nameserver: impl Into<String>) -> RecordData {
        RecordData::Ns(nameserver.into())
    }

    /// Create a PTR record.
    pub fn ptr(target: impl Into<String>) -> RecordData {
        RecordData::Ptr(target.into())
    }

    /// Create an MX record.
    pub fn mx(preference: u16, exchange: impl Into<String>) -> RecordData {
        RecordData::Mx {
            preference,
            exchange: exchange.into(),
        }
    }

    /// Create an SRV record.
    pub fn srv(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> RecordData {
        RecordData::Srv {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }

    /// Create an SOA record.
    #[allow(clippy::too_many_arguments)]
    pub fn soa(
        mname: impl Into<String>,
        rname: impl Into<String>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> RecordData {
        RecordData::Soa {
            mname: mname.into(),
            rname: rname.into(),
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// Create a TXT record from raw character-strings.
    pub fn txt<I, S>(strings: I) -> RecordData
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        RecordData::Txt(strings.into_iter().map(Into::into).collect())
    }
}

/// Copy fixed-size RDATA into an array, or report the length mismatch.
fn fixed<const N: usize>(record_type: RecordType, data: &[u8]) -> CodecResult<[u8; N]> {
    <[u8; N]>::try_from(data).map_err(|_| CodecError::RecordLength {
        record_type,
        expected: N,
        actual: data.len(),
    })
}

impl fmt::Display for RecordData {
    /// BIND-style presentation of the data portion.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{addr}"),
            RecordData::Aaaa(addr) => write!(f, "{addr}"),
            RecordData::Cname(name) | RecordData::Ns(name) | RecordData::Ptr(name) => {
                f.write_str(name)
            }
            RecordData::Mx { preference, exchange } => write!(f, "{preference} {exchange}"),
            RecordData::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                f,
                "{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}"
            ),
            RecordData::Srv {
                priority,
                weight,
                port,
                target,
            } => write!(f, "{priority} {weight} {port} {target}"),
            RecordData::Txt(strings) => {
                let mut first = true;
                for string in strings {
                    if !first {
                        f.write_str(" ")?;
                    }
                    first = false;
                    write!(f, "\"{}\"", String::from_utf8_lossy(string))?;
                }
                Ok(())
            }
            // RFC 3597 generic presentation: \# <length> <hex>.
            RecordData::Opaque { data, .. } => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    f.write_str(" ")?;
                    for byte in data {
                        write!(f, "{byte:02x}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
