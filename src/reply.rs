//! Structured reply objects.
//!
//! Each kind of discovery operation delivers its results through one of the
//! types here. Constructors take exactly the fields the discovery service
//! hands to its callbacks (a flag bitmask, an interface, an escaped full
//! name or a name/type/domain triple, and kind-specific payload) and fail
//! on malformed names, record data, or TXT blobs.
//!
//! Replies are transient values: nothing caches them, and where a TTL is
//! present [`QueryRecord::expired`] / [`AddrInfo::expired`] is a passive
//! check only. Callers decide when to look.

use std::fmt;
use std::net::IpAddr;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CodecResult;
use crate::flags::Flags;
use crate::fullname::ServiceName;
use crate::interface::Interface;
use crate::record_data::RecordData;
use crate::record_type::RecordType;
use crate::text_record::TextRecord;

/// Milliseconds since the Unix epoch, for TTL bookkeeping.
fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// ============================================================================
// Browse
// ============================================================================

/// One service seen (or lost) while browsing for a service type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browse {
    /// Reply flags; [`Flags::add`] distinguishes appearance from removal.
    pub flags: Flags,
    /// Interface the service was seen on.
    pub interface: Interface,
    /// The discovered service identity.
    pub service: ServiceName,
}

impl Browse {
    /// Build from the browse callback fields: raw flags, interface, and the
    /// unescaped name/type/domain triple.
    pub fn new(
        flags: u32,
        interface: Interface,
        name: impl Into<Vec<u8>>,
        service_type: impl Into<String>,
        domain: impl Into<String>,
    ) -> Browse {
        Browse {
            flags: Flags::from_bits(flags),
            interface,
            service: ServiceName::new(name, service_type, domain),
        }
    }

    /// The escaped full name of the discovered service.
    pub fn full_name(&self) -> String {
        self.service.to_string()
    }
}

// ============================================================================
// Domain
// ============================================================================

/// One domain reported by domain enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Reply flags; [`Flags::DEFAULT`] marks the default domain.
    pub flags: Flags,
    /// Interface the domain applies to.
    pub interface: Interface,
    /// A domain for registration or browsing.
    pub domain: String,
}

impl Domain {
    /// Build from the enumerate-domains callback fields.
    pub fn new(flags: u32, interface: Interface, domain: impl Into<String>) -> Domain {
        Domain {
            flags: Flags::from_bits(flags),
            interface,
            domain: domain.into(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// Confirmation of a service registration, carrying the final (possibly
/// auto-renamed) service identity. Registration replies have no interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    /// Reply flags.
    pub flags: Flags,
    /// The identity the service was registered under.
    pub service: ServiceName,
}

impl Register {
    /// Build from the register callback fields.
    pub fn new(
        flags: u32,
        name: impl Into<Vec<u8>>,
        service_type: impl Into<String>,
        domain: impl Into<String>,
    ) -> Register {
        Register {
            flags: Flags::from_bits(flags),
            service: ServiceName::new(name, service_type, domain),
        }
    }

    /// The escaped full name the service was registered under.
    pub fn full_name(&self) -> String {
        self.service.to_string()
    }
}

// ============================================================================
// Resolve
// ============================================================================

/// Resolution of a browsed service to its host, port, and primary TXT
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolve {
    /// Reply flags.
    pub flags: Flags,
    /// Interface the resolution applies to.
    pub interface: Interface,
    /// The resolved service identity.
    pub service: ServiceName,
    /// Host name providing the service.
    pub target: String,
    /// Port the service listens on.
    pub port: u16,
    /// The service's primary text record.
    pub text_record: TextRecord,
}

impl Resolve {
    /// Build from the resolve callback fields. The full name is decomposed
    /// and the raw TXT blob decoded; either failing fails the reply.
    pub fn new(
        flags: u32,
        interface: Interface,
        full_name: &str,
        target: impl Into<String>,
        port: u16,
        txt: &[u8],
    ) -> CodecResult<Resolve> {
        let service = ServiceName::parse(full_name)?;
        let text_record = TextRecord::decode(txt)?;
        debug!(service = %service, port, "resolved service");
        Ok(Resolve {
            flags: Flags::from_bits(flags),
            interface,
            service,
            target: target.into(),
            port,
            text_record,
        })
    }

    /// The escaped full name of the resolved service.
    pub fn full_name(&self) -> String {
        self.service.to_string()
    }
}

// ============================================================================
// QueryRecord
// ============================================================================

/// One resource record returned by a record query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Reply flags.
    pub flags: Flags,
    /// Interface the record was received on.
    pub interface: Interface,
    /// The record's owner identity.
    pub service: ServiceName,
    /// The record's type.
    pub record_type: RecordType,
    /// The record's class; always IN in practice.
    pub record_class: u16,
    /// Decoded record data, or the raw bytes for types without a codec.
    pub data: RecordData,
    /// Time to live in seconds, as reported with the record.
    pub ttl: u32,
    /// When this reply was constructed, milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

impl QueryRecord {
    /// Build from the query-record callback fields. The full name is
    /// decomposed and the RDATA decoded for its type; either failing fails
    /// the reply.
    pub fn new(
        flags: u32,
        interface: Interface,
        full_name: &str,
        record_type: u16,
        record_class: u16,
        rdata: &[u8],
        ttl: u32,
    ) -> CodecResult<QueryRecord> {
        let service = ServiceName::parse(full_name)?;
        let record_type = RecordType::from_code(record_type);
        let data = RecordData::decode(record_type, rdata)?;
        debug!(service = %service, record_type = %record_type, ttl, "decoded record reply");
        Ok(QueryRecord {
            flags: Flags::from_bits(flags),
            interface,
            service,
            record_type,
            record_class,
            data,
            ttl,
            created_at_ms: unix_ms(),
        })
    }

    /// The escaped full name that owns this record.
    pub fn full_name(&self) -> String {
        self.service.to_string()
    }

    /// Name of the record's class. Only IN is supported.
    pub const fn record_class_name(&self) -> &'static str {
        "IN"
    }

    /// Whether this record has outlived its TTL. Purely informational:
    /// nothing evicts expired records, callers must check.
    pub fn expired(&self) -> bool {
        unix_ms() > self.created_at_ms + u64::from(self.ttl) * 1000
    }

    /// Serialize to JSON bytes.
    pub fn to_json_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Deserialize from JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Option<QueryRecord> {
        serde_json::from_slice(bytes).ok()
    }
}

impl fmt::Display for QueryRecord {
    /// BIND-like presentation: `full-name class type data`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.service,
            self.record_class_name(),
            self.record_type,
            self.data
        )
    }
}

// ============================================================================
// AddrInfo
// ============================================================================

/// One address for a resolved host name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddrInfo {
    /// Reply flags.
    pub flags: Flags,
    /// Interface the address applies to.
    pub interface: Interface,
    /// The host name that was looked up.
    pub hostname: String,
    /// One of the host's addresses.
    pub address: IpAddr,
    /// Port from the reported socket address.
    pub port: u16,
    /// Time to live in seconds.
    pub ttl: u32,
    /// When this reply was constructed, milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

impl AddrInfo {
    /// Build from the get-addr-info callback fields, with the socket
    /// address already unpacked by the boundary layer.
    pub fn new(
        flags: u32,
        interface: Interface,
        hostname: impl Into<String>,
        address: IpAddr,
        port: u16,
        ttl: u32,
    ) -> AddrInfo {
        AddrInfo {
            flags: Flags::from_bits(flags),
            interface,
            hostname: hostname.into(),
            address,
            port,
            ttl,
            created_at_ms: unix_ms(),
        }
    }

    /// Whether this address has outlived its TTL. Purely informational.
    pub fn expired(&self) -> bool {
        unix_ms() > self.created_at_ms + u64::from(self.ttl) * 1000
    }
}
