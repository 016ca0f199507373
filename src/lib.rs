//! Reply codecs for DNS Service Discovery.
//!
//! A DNS-SD binding leaves the hard protocol work (multicast framing,
//! probing, cache coherency, retry timers) to the system's discovery
//! service, and is left holding the parts that service will not do for it:
//! turning escaped full names, TXT blobs, and raw RDATA back into values a
//! program can use. This crate is that layer, on its own, with the service
//! boundary kept out.
//!
//! # Architecture
//!
//! ```text
//! discovery service (out of scope)          this crate
//! ┌──────────────────────────────┐          ┌─────────────────────────────┐
//! │ callback per reply:          │          │ ServiceName   full-name     │
//! │   flags, interface,          │ ───────> │               codec         │
//! │   full name or triple,       │          │ TextRecord    key=value     │
//! │   record type + class,       │          │               codec         │
//! │   raw RDATA, ttl             │          │ RecordData    RDATA codec   │
//! └──────────────────────────────┘          │ reply::*      typed replies │
//!                                           └─────────────────────────────┘
//! ```
//!
//! The three codecs are pure functions over their input bytes, with no I/O
//! and no shared mutable state, safe to call from any thread. The reply types in
//! [`reply`] bundle them for each kind of callback the service delivers.
//!
//! # Decoding a record reply
//!
//! ```
//! use dnssd_codec::Interface;
//! use dnssd_codec::RecordData;
//! use dnssd_codec::RecordType;
//! use dnssd_codec::reply::QueryRecord;
//!
//! // Fields as the discovery service hands them to a query callback.
//! let mut rdata = vec![0x00, 0x01, 0x00, 0x05, 0x04, 0x01];
//! rdata.extend_from_slice(b"\x07nowhere\x07example\x00");
//!
//! let reply = QueryRecord::new(
//!     0,
//!     Interface::from_index(2),
//!     "blackjack._blackjack._tcp.test.",
//!     33, // SRV
//!     1,  // IN
//!     &rdata,
//!     120,
//! )
//! .unwrap();
//!
//! assert_eq!(reply.record_type, RecordType::SRV);
//! assert_eq!(reply.data, RecordData::srv(1, 5, 1025, "nowhere.example."));
//! ```
//!
//! # Service names
//!
//! ```
//! use dnssd_codec::ServiceName;
//!
//! let name: ServiceName = "Dr\\.\\032Pepper._http._tcp.local.".parse().unwrap();
//! assert_eq!(name.instance(), b"Dr. Pepper");
//! assert_eq!(name.service_type(), "_http._tcp");
//! assert_eq!(name.domain(), "local.");
//! ```
//!
//! # Errors
//!
//! Decoding bytes the service delivered can fail with malformed-wire errors;
//! encoding caller-supplied values can fail with validation errors. Both
//! share [`CodecError`]. A record type without a structured codec is neither:
//! its data decodes to [`RecordData::Opaque`] unchanged, and only re-encoding
//! it is an error.

pub mod constants;
pub mod error;
pub mod flags;
pub mod fullname;
pub mod interface;
pub mod record_data;
pub mod record_type;
pub mod reply;
pub mod text_record;

mod wire;

// Re-export the main types for convenience
pub use error::CodecError;
pub use error::CodecResult;
pub use flags::Flags;
pub use fullname::ServiceName;
pub use interface::Interface;
pub use record_data::RecordData;
pub use record_type::ParseRecordTypeError;
pub use record_type::RecordType;
pub use reply::AddrInfo;
pub use reply::Browse;
pub use reply::Domain;
pub use reply::QueryRecord;
pub use reply::Register;
pub use reply::Resolve;
pub use text_record::TextRecord;
