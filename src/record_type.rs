//! Resource-record type registry.
//!
//! Covers the closed set of IANA-assigned type codes the discovery service
//! reports, plus an explicit [`RecordType::Other`] variant for every code
//! outside that set. Codes never fall through silently: an unrecognized code
//! still round-trips through `Other` with its numeric value intact.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A DNS resource-record type.
///
/// The named variants mirror the IANA registry entries exposed by the
/// dns_sd.h record constants. Only a handful of them have structured codecs
/// (see [`RecordData`](crate::record_data::RecordData)); the rest exist so
/// that replies can report their type by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    /// Host address (RFC 1035).
    A,
    /// Authoritative name server (RFC 1035).
    NS,
    /// Mail destination (obsolete).
    MD,
    /// Mail forwarder (obsolete).
    MF,
    /// Canonical name alias (RFC 1035).
    CNAME,
    /// Start of a zone of authority (RFC 1035).
    SOA,
    /// Mailbox domain name.
    MB,
    /// Mail group member.
    MG,
    /// Mail rename name.
    MR,
    /// Null resource record.
    NULL,
    /// Well-known service description.
    WKS,
    /// Domain name pointer (RFC 1035).
    PTR,
    /// Host information.
    HINFO,
    /// Mailbox information.
    MINFO,
    /// Mail exchange (RFC 1035).
    MX,
    /// Text strings (RFC 1035).
    TXT,
    /// Responsible person.
    RP,
    /// AFS cell database.
    AFSDB,
    /// X.25 calling address.
    X25,
    /// ISDN calling address.
    ISDN,
    /// Route through.
    RT,
    /// NSAP address.
    NSAP,
    /// Reverse NSAP lookup (deprecated).
    NSAPPTR,
    /// Security signature.
    SIG,
    /// Security key.
    KEY,
    /// X.400 mail mapping.
    PX,
    /// Geographical position (withdrawn).
    GPOS,
    /// IPv6 host address (RFC 3596).
    AAAA,
    /// Location information.
    LOC,
    /// Next domain (security).
    NXT,
    /// Endpoint identifier.
    EID,
    /// Nimrod locator.
    NIMLOC,
    /// Server selection (RFC 2782).
    SRV,
    /// ATM address.
    ATMA,
    /// Naming authority pointer.
    NAPTR,
    /// Key exchange.
    KX,
    /// Certification record.
    CERT,
    /// IPv6 address (deprecated).
    A6,
    /// Non-terminal DNAME.
    DNAME,
    /// Kitchen sink (experimental).
    SINK,
    /// EDNS0 option (meta-RR).
    OPT,
    /// Address prefix list.
    APL,
    /// Delegation signer.
    DS,
    /// SSH key fingerprint.
    SSHFP,
    /// IPSEC key.
    IPSECKEY,
    /// DNSSEC record signature.
    RRSIG,
    /// DNSSEC denial of existence.
    NSEC,
    /// DNSSEC public key.
    DNSKEY,
    /// DHCP identifier.
    DHCID,
    /// Transaction key.
    TKEY,
    /// Transaction signature.
    TSIG,
    /// Incremental zone transfer.
    IXFR,
    /// Transfer of an entire zone.
    AXFR,
    /// Transfer mailbox records.
    MAILB,
    /// Transfer mail agent records.
    MAILA,
    /// Wildcard match.
    ANY,
    /// Any code outside the named set; kept verbatim, never decoded.
    Other(u16),
}

impl RecordType {
    /// All named record types, in code order.
    pub const ALL: &'static [RecordType] = &[
        RecordType::A,
        RecordType::NS,
        RecordType::MD,
        RecordType::MF,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::MB,
        RecordType::MG,
        RecordType::MR,
        RecordType::NULL,
        RecordType::WKS,
        RecordType::PTR,
        RecordType::HINFO,
        RecordType::MINFO,
        RecordType::MX,
        RecordType::TXT,
        RecordType::RP,
        RecordType::AFSDB,
        RecordType::X25,
        RecordType::ISDN,
        RecordType::RT,
        RecordType::NSAP,
        RecordType::NSAPPTR,
        RecordType::SIG,
        RecordType::KEY,
        RecordType::PX,
        RecordType::GPOS,
        RecordType::AAAA,
        RecordType::LOC,
        RecordType::NXT,
        RecordType::EID,
        RecordType::NIMLOC,
        RecordType::SRV,
        RecordType::ATMA,
        RecordType::NAPTR,
        RecordType::KX,
        RecordType::CERT,
        RecordType::A6,
        RecordType::DNAME,
        RecordType::SINK,
        RecordType::OPT,
        RecordType::APL,
        RecordType::DS,
        RecordType::SSHFP,
        RecordType::IPSECKEY,
        RecordType::RRSIG,
        RecordType::NSEC,
        RecordType::DNSKEY,
        RecordType::DHCID,
        RecordType::TKEY,
        RecordType::TSIG,
        RecordType::IXFR,
        RecordType::AXFR,
        RecordType::MAILB,
        RecordType::MAILA,
        RecordType::ANY,
    ];

    /// Map a numeric type code to a record type. Total: codes outside the
    /// named set map to [`RecordType::Other`].
    pub const fn from_code(code: u16) -> RecordType {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            3 => RecordType::MD,
            4 => RecordType::MF,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            7 => RecordType::MB,
            8 => RecordType::MG,
            9 => RecordType::MR,
            10 => RecordType::NULL,
            11 => RecordType::WKS,
            12 => RecordType::PTR,
            13 => RecordType::HINFO,
            14 => RecordType::MINFO,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            17 => RecordType::RP,
            18 => RecordType::AFSDB,
            19 => RecordType::X25,
            20 => RecordType::ISDN,
            21 => RecordType::RT,
            22 => RecordType::NSAP,
            23 => RecordType::NSAPPTR,
            24 => RecordType::SIG,
            25 => RecordType::KEY,
            26 => RecordType::PX,
            27 => RecordType::GPOS,
            28 => RecordType::AAAA,
            29 => RecordType::LOC,
            30 => RecordType::NXT,
            31 => RecordType::EID,
            32 => RecordType::NIMLOC,
            33 => RecordType::SRV,
            34 => RecordType::ATMA,
            35 => RecordType::NAPTR,
            36 => RecordType::KX,
            37 => RecordType::CERT,
            38 => RecordType::A6,
            39 => RecordType::DNAME,
            40 => RecordType::SINK,
            41 => RecordType::OPT,
            42 => RecordType::APL,
            43 => RecordType::DS,
            44 => RecordType::SSHFP,
            45 => RecordType::IPSECKEY,
            46 => RecordType::RRSIG,
            47 => RecordType::NSEC,
            48 => RecordType::DNSKEY,
            49 => RecordType::DHCID,
            249 => RecordType::TKEY,
            250 => RecordType::TSIG,
            251 => RecordType::IXFR,
            252 => RecordType::AXFR,
            253 => RecordType::MAILB,
            254 => RecordType::MAILA,
            255 => RecordType::ANY,
            other => RecordType::Other(other),
        }
    }

    /// The numeric IANA type code.
    pub const fn code(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::X25 => 19,
            RecordType::ISDN => 20,
            RecordType::RT => 21,
            RecordType::NSAP => 22,
            RecordType::NSAPPTR => 23,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::PX => 26,
            RecordType::GPOS => 27,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::NXT => 30,
            RecordType::EID => 31,
            RecordType::NIMLOC => 32,
            RecordType::SRV => 33,
            RecordType::ATMA => 34,
            RecordType::NAPTR => 35,
            RecordType::KX => 36,
            RecordType::CERT => 37,
            RecordType::A6 => 38,
            RecordType::DNAME => 39,
            RecordType::SINK => 40,
            RecordType::OPT => 41,
            RecordType::APL => 42,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::TKEY => 249,
            RecordType::TSIG => 250,
            RecordType::IXFR => 251,
            RecordType::AXFR => 252,
            RecordType::MAILB => 253,
            RecordType::MAILA => 254,
            RecordType::ANY => 255,
            RecordType::Other(code) => code,
        }
    }

    /// The registry name, or `None` for [`RecordType::Other`].
    pub const fn name(self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("A"),
            RecordType::NS => Some("NS"),
            RecordType::MD => Some("MD"),
            RecordType::MF => Some("MF"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::SOA => Some("SOA"),
            RecordType::MB => Some("MB"),
            RecordType::MG => Some("MG"),
            RecordType::MR => Some("MR"),
            RecordType::NULL => Some("NULL"),
            RecordType::WKS => Some("WKS"),
            RecordType::PTR => Some("PTR"),
            RecordType::HINFO => Some("HINFO"),
            RecordType::MINFO => Some("MINFO"),
            RecordType::MX => Some("MX"),
            RecordType::TXT => Some("TXT"),
            RecordType::RP => Some("RP"),
            RecordType::AFSDB => Some("AFSDB"),
            RecordType::X25 => Some("X25"),
            RecordType::ISDN => Some("ISDN"),
            RecordType::RT => Some("RT"),
            RecordType::NSAP => Some("NSAP"),
            RecordType::NSAPPTR => Some("NSAP-PTR"),
            RecordType::SIG => Some("SIG"),
            RecordType::KEY => Some("KEY"),
            RecordType::PX => Some("PX"),
            RecordType::GPOS => Some("GPOS"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::LOC => Some("LOC"),
            RecordType::NXT => Some("NXT"),
            RecordType::EID => Some("EID"),
            RecordType::NIMLOC => Some("NIMLOC"),
            RecordType::SRV => Some("SRV"),
            RecordType::ATMA => Some("ATMA"),
            RecordType::NAPTR => Some("NAPTR"),
            RecordType::KX => Some("KX"),
            RecordType::CERT => Some("CERT"),
            RecordType::A6 => Some("A6"),
            RecordType::DNAME => Some("DNAME"),
            RecordType::SINK => Some("SINK"),
            RecordType::OPT => Some("OPT"),
            RecordType::APL => Some("APL"),
            RecordType::DS => Some("DS"),
            RecordType::SSHFP => Some("SSHFP"),
            RecordType::IPSECKEY => Some("IPSECKEY"),
            RecordType::RRSIG => Some("RRSIG"),
            RecordType::NSEC => Some("NSEC"),
            RecordType::DNSKEY => Some("DNSKEY"),
            RecordType::DHCID => Some("DHCID"),
            RecordType::TKEY => Some("TKEY"),
            RecordType::TSIG => Some("TSIG"),
            RecordType::IXFR => Some("IXFR"),
            RecordType::AXFR => Some("AXFR"),
            RecordType::MAILB => Some("MAILB"),
            RecordType::MAILA => Some("MAILA"),
            RecordType::ANY => Some("ANY"),
            RecordType::Other(_) => None,
        }
    }

    /// Look up a record type by registry name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<RecordType> {
        name_table().get(name.to_ascii_uppercase().as_str()).copied()
    }
}

/// Name lookup table, built once on first use and read-only afterwards.
fn name_table() -> &'static HashMap<&'static str, RecordType> {
    static TABLE: OnceLock<HashMap<&'static str, RecordType>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RecordType::ALL
            .iter()
            .filter_map(|rt| rt.name().map(|name| (name, *rt)))
            .collect()
    })
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            // RFC 3597 presentation for unknown types.
            None => write!(f, "TYPE{}", self.code()),
        }
    }
}

/// Error returned when parsing a record type name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRecordTypeError(String);

impl fmt::Display for ParseRecordTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid record type: {}", self.0)
    }
}

impl std::error::Error for ParseRecordTypeError {}

impl FromStr for RecordType {
    type Err = ParseRecordTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rt) = RecordType::from_name(s) {
            return Ok(rt);
        }
        // RFC 3597 TYPE1234 form, covering codes without a registry name.
        if let Some(digits) = s.strip_prefix("TYPE").or_else(|| s.strip_prefix("type")) {
            if let Ok(code) = digits.parse::<u16>() {
                return Ok(RecordType::from_code(code));
            }
        }
        Err(ParseRecordTypeError(s.to_string()))
    }
}
