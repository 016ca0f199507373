//! Wire-format limits and well-known numeric values.
//!
//! All limits here are fixed by RFC 1035 or by the DNS-SD conventions layered
//! on top of it; none of them are tunable at runtime.

// ============================================================================
// RFC 1035 Name Limits
// ============================================================================

/// Maximum length of a single label within a domain name (RFC 1035
/// Section 2.3.4).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a full domain name in presentation form (RFC 1035
/// Section 2.3.4).
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum payload of an RFC 1035 character-string.
///
/// A character-string is one length octet followed by that many raw octets,
/// so the payload can never exceed 255 bytes.
pub const MAX_CHARACTER_STRING_LENGTH: usize = 255;

// ============================================================================
// DNS-SD TXT Record Limits
// ============================================================================

/// Maximum encoded length of a single `key` or `key=value` TXT entry,
/// including the `=` separator but not the length octet.
pub const MAX_TXT_ENTRY_LENGTH: usize = 255;

/// Maximum total length of an encoded TXT record (RFC 1035 RDATA limit).
pub const MAX_TXT_RECORD_LENGTH: usize = 65535;

/// Separator between key and value inside a TXT entry.
pub const TXT_KEY_VALUE_SEPARATOR: u8 = b'=';

// ============================================================================
// Full Name Escaping
// ============================================================================

/// Label separator in full service names and domain names.
pub const LABEL_SEPARATOR: u8 = b'.';

/// Escape introducer in full service names (`\.`, `\\`, `\DDD`).
pub const NAME_ESCAPE: u8 = b'\\';

// ============================================================================
// Record Classes
// ============================================================================

/// The Internet record class. DNS-SD only ever uses class IN.
pub const CLASS_IN: u16 = 1;

// ============================================================================
// Interface Indexes
// ============================================================================

/// Query or register on all multicast-capable interfaces.
pub const INTERFACE_ANY: u32 = 0;

/// Loopback-only operation (`kDNSServiceInterfaceIndexLocalOnly`, -1 cast to
/// an unsigned 32-bit interface index).
pub const INTERFACE_LOCAL_ONLY: u32 = u32::MAX;

/// Unicast-only operation (`kDNSServiceInterfaceIndexUnicast`, -2 cast to an
/// unsigned 32-bit interface index).
pub const INTERFACE_UNICAST: u32 = u32::MAX - 1;
