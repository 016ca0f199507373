//! Escaped full-name codec for service identities.
//!
//! A discovered service is addressed by the three-part identity
//! `instance.service-type.domain`, delivered as a single escaped string such
//! as `Dr\.\032Pepper._http._tcp.local.`. The instance portion is raw bytes:
//! it may contain literal dots, spaces, control bytes, or non-UTF-8 data, all
//! carried with `\.` / `\\` / `\DDD` escapes. The service type and domain are
//! escaped ASCII label chains by protocol.
//!
//! Escaping operates on bytes, not characters: the rules predate any text
//! encoding and must survive arbitrary instance names.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::error::CodecResult;

/// A service identity: instance name, service type, and domain.
///
/// Immutable once constructed. Converting to a string yields the escaped
/// full name; parsing an escaped full name recovers the parts. The two
/// directions round-trip exactly, including instance names with embedded
/// dots, spaces, and control bytes.
///
/// ```
/// use dnssd_codec::ServiceName;
///
/// let name = ServiceName::new("Dr. Pepper", "_http._tcp", "local.");
/// assert_eq!(name.to_string(), "Dr\\.\\032Pepper._http._tcp.local.");
///
/// let parsed: ServiceName = name.to_string().parse().unwrap();
/// assert_eq!(parsed, name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceName {
    instance: Vec<u8>,
    service_type: String,
    domain: String,
}

impl ServiceName {
    /// Build an identity from unescaped parts.
    ///
    /// The instance is arbitrary bytes. The service type (`_service._proto`)
    /// and domain are expected in their usual escaped label-chain form; the
    /// domain is normalized to carry a trailing dot.
    pub fn new(
        instance: impl Into<Vec<u8>>,
        service_type: impl Into<String>,
        domain: impl Into<String>,
    ) -> ServiceName {
        let mut domain = domain.into();
        if !domain.ends_with('.') {
            domain.push('.');
        }
        ServiceName {
            instance: instance.into(),
            service_type: service_type.into(),
            domain,
        }
    }

    /// Decompose an escaped full name.
    ///
    /// Splits on unescaped dots only; `\.` is a literal dot, `\\` a literal
    /// backslash, and `\DDD` (up to three decimal digits, value ≤ 255) a raw
    /// byte. The first part is the instance, the next two joined with a dot
    /// are the service type, and the remainder (internal dots re-escaped,
    /// trailing dot restored) is the domain.
    ///
    /// Anything with fewer than four parts, a dangling or out-of-range
    /// escape, or a non-UTF-8 service type or domain is rejected as
    /// [`CodecError::InvalidFullName`].
    pub fn parse(full_name: &str) -> CodecResult<ServiceName> {
        let parts = split_escaped(full_name.as_bytes())?;
        if parts.len() < 4 {
            return Err(CodecError::InvalidFullName {
                reason: format!(
                    "expected instance, two-label service type, and domain, got {} parts",
                    parts.len()
                ),
            });
        }

        let instance = parts[0].clone();

        let mut service_type = utf8_part(&parts[1], "service type")?;
        service_type.push('.');
        service_type.push_str(&utf8_part(&parts[2], "service type")?);

        let mut domain = String::new();
        for part in &parts[3..] {
            let part = utf8_part(part, "domain")?;
            // A literal dot inside a domain label goes back to its escaped
            // form so the domain stays a valid label chain.
            domain.push_str(&part.replace('.', "\\."));
            domain.push('.');
        }

        Ok(ServiceName {
            instance,
            service_type,
            domain,
        })
    }

    /// The unescaped instance name, as raw bytes.
    pub fn instance(&self) -> &[u8] {
        &self.instance
    }

    /// The instance name as text, replacing non-UTF-8 bytes.
    pub fn instance_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.instance)
    }

    /// The two-label service type, e.g. `_http._tcp`.
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// The domain, always with a trailing dot, e.g. `local.`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The bare service name from the type: `_http._tcp` → `http`.
    pub fn service(&self) -> &str {
        let first = self.service_type.split('.').next().unwrap_or("");
        first.strip_prefix('_').unwrap_or(first)
    }

    /// The transport protocol from the type: `_http._tcp` → `tcp`.
    pub fn protocol(&self) -> &str {
        let last = self.service_type.split('.').next_back().unwrap_or("");
        last.strip_prefix('_').unwrap_or(last)
    }
}

impl fmt::Display for ServiceName {
    /// Compose the escaped full name, with exactly one trailing dot.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_instance(&self.instance))?;
        f.write_str(".")?;
        f.write_str(&self.service_type)?;
        f.write_str(".")?;
        f.write_str(self.domain.strip_suffix('.').unwrap_or(&self.domain))?;
        f.write_str(".")
    }
}

impl FromStr for ServiceName {
    type Err = CodecError;

    fn from_str(s: &str) -> CodecResult<ServiceName> {
        ServiceName::parse(s)
    }
}

/// Escape one instance name for use inside a full name.
///
/// Literal dots become `\.`, backslashes `\\`, and every byte outside the
/// printable ASCII range (plus space) becomes `\DDD` with three zero-padded
/// decimal digits.
fn escape_instance(instance: &[u8]) -> String {
    let mut out = String::with_capacity(instance.len());
    for &byte in instance {
        match byte {
            b'.' => out.push_str("\\."),
            b'\\' => out.push_str("\\\\"),
            b if b <= b' ' || b >= 0x7F => {
                let _ = write!(out, "\\{:03}", b);
            }
            b => out.push(b as char),
        }
    }
    out
}

/// Split an escaped name into its unescaped parts on unescaped dots.
///
/// Single pass over the bytes; escape decoding and splitting happen
/// together, so a `\046` escape yields a literal dot rather than a new part.
/// Empty parts (consecutive unescaped dots, trailing dot) are dropped.
fn split_escaped(bytes: &[u8]) -> CodecResult<Vec<Vec<u8>>> {
    let mut parts = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 1;
                let Some(&next) = bytes.get(i) else {
                    return Err(CodecError::InvalidFullName {
                        reason: "name ends with a dangling escape".to_string(),
                    });
                };
                if next.is_ascii_digit() {
                    let mut value: u32 = 0;
                    let mut digits = 0;
                    while digits < 3 {
                        match bytes.get(i) {
                            Some(b) if b.is_ascii_digit() => {
                                value = value * 10 + u32::from(b - b'0');
                                digits += 1;
                                i += 1;
                            }
                            _ => break,
                        }
                    }
                    if value > 255 {
                        return Err(CodecError::InvalidFullName {
                            reason: format!("escape \\{} is not a byte value", value),
                        });
                    }
                    current.push(value as u8);
                } else {
                    current.push(next);
                    i += 1;
                }
            }
            b'.' => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                i += 1;
            }
            byte => {
                current.push(byte);
                i += 1;
            }
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }

    Ok(parts)
}

/// Decode one part that must be text (service type or domain labels).
fn utf8_part(part: &[u8], what: &str) -> CodecResult<String> {
    String::from_utf8(part.to_vec()).map_err(|_| CodecError::InvalidFullName {
        reason: format!("{} is not valid UTF-8", what),
    })
}
