//! Reply flag bitmask.
//!
//! Every reply carries a `u32` bitmask from the discovery service. The valid
//! bits form a closed set; unknown bits are preserved through arithmetic but
//! never given names.

use std::fmt;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// Bitmask of reply and request flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags(u32);

impl Flags {
    /// More replies are queued and about to arrive; coalesce updates until a
    /// reply without this flag lands.
    pub const MORE_COMING: Flags = Flags(0x1);
    /// The reply reports an addition. Absent means the record went away.
    pub const ADD: Flags = Flags(0x2);
    /// The reported domain is the default for its operation.
    pub const DEFAULT: Flags = Flags(0x4);
    /// Do not rename the service automatically on a name conflict.
    pub const NO_AUTO_RENAME: Flags = Flags(0x8);
    /// Multiple records with this name and type may coexist.
    pub const SHARED: Flags = Flags(0x10);
    /// The record's name must be unique on the network.
    pub const UNIQUE: Flags = Flags(0x20);
    /// Enumerate domains recommended for browsing.
    pub const BROWSE_DOMAINS: Flags = Flags(0x40);
    /// Enumerate domains recommended for registration.
    pub const REGISTRATION_DOMAINS: Flags = Flags(0x80);
    /// Create a long-lived unicast query.
    pub const LONG_LIVED_QUERY: Flags = Flags(0x100);
    /// Allow the query to be answered over unicast DNS.
    pub const ALLOW_REMOTE_QUERY: Flags = Flags(0x200);
    /// Force the query onto multicast even for apparently-unicast names.
    pub const FORCE_MULTICAST: Flags = Flags(0x400);
    /// Force an update even when the record appears unchanged.
    pub const FORCE: Flags = Flags(0x800);
    /// Deliver intermediate results such as CNAME chains.
    pub const RETURN_INTERMEDIATES: Flags = Flags(0x1000);

    const NAMES: &'static [(Flags, &'static str)] = &[
        (Flags::MORE_COMING, "more_coming"),
        (Flags::ADD, "add"),
        (Flags::DEFAULT, "default"),
        (Flags::NO_AUTO_RENAME, "no_auto_rename"),
        (Flags::SHARED, "shared"),
        (Flags::UNIQUE, "unique"),
        (Flags::BROWSE_DOMAINS, "browse_domains"),
        (Flags::REGISTRATION_DOMAINS, "registration_domains"),
        (Flags::LONG_LIVED_QUERY, "long_lived_query"),
        (Flags::ALLOW_REMOTE_QUERY, "allow_remote_query"),
        (Flags::FORCE_MULTICAST, "force_multicast"),
        (Flags::FORCE, "force"),
        (Flags::RETURN_INTERMEDIATES, "return_intermediates"),
    ];

    /// An empty flag set.
    pub const fn empty() -> Flags {
        Flags(0)
    }

    /// Wrap a raw bitmask as delivered by the discovery service.
    pub const fn from_bits(bits: u32) -> Flags {
        Flags(bits)
    }

    /// The raw bitmask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Every named flag.
    pub const fn all() -> Flags {
        Flags(0x1FFF)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    /// More replies are buffered behind this one.
    pub const fn more_coming(self) -> bool {
        self.contains(Flags::MORE_COMING)
    }

    /// The reply reports an addition rather than a removal.
    pub const fn add(self) -> bool {
        self.contains(Flags::ADD)
    }

    /// Names of the set flags, in bit order.
    pub fn names(self) -> Vec<&'static str> {
        Flags::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    /// Complement within the named set; unknown bits never appear.
    fn not(self) -> Flags {
        Flags(!self.0) & Flags::all()
    }
}

impl From<u32> for Flags {
    fn from(bits: u32) -> Flags {
        Flags(bits)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let flags = Flags::ADD | Flags::DEFAULT;
        assert!(flags.contains(Flags::ADD));
        assert!(flags.contains(Flags::DEFAULT));
        assert!(!flags.contains(Flags::MORE_COMING));
        assert_eq!(flags.bits(), 6);
    }

    #[test]
    fn test_insert_remove() {
        let mut flags = Flags::empty();
        flags.insert(Flags::ADD);
        flags.insert(Flags::DEFAULT);
        flags.remove(Flags::ADD);
        assert_eq!(flags, Flags::DEFAULT);
    }

    #[test]
    fn test_predicates() {
        assert!(Flags::from_bits(0x3).more_coming());
        assert!(Flags::from_bits(0x3).add());
        assert!(!Flags::empty().add());
    }

    #[test]
    fn test_complement_stays_within_named_set() {
        assert_eq!(!Flags::empty(), Flags::all());
        assert!(!(!Flags::ADD).contains(Flags::ADD));
    }

    #[test]
    fn test_display_lists_names() {
        let flags = Flags::ADD | Flags::DEFAULT;
        assert_eq!(flags.to_string(), "add, default");
        assert_eq!(Flags::empty().to_string(), "");
    }

    #[test]
    fn test_unknown_bits_preserved() {
        let flags = Flags::from_bits(0x8000_0000 | 0x2);
        assert!(flags.add());
        assert_eq!(flags.bits(), 0x8000_0002);
        assert_eq!(flags.names(), vec!["add"]);
    }
}
