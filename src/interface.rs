//! Network interface identification for replies.
//!
//! The discovery service reports the interface a reply arrived on either as
//! a numeric index or, once the boundary layer has resolved it, as an OS
//! interface name. Three index values are reserved sentinels. Resolving an
//! index to a name requires the OS and is the boundary layer's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::INTERFACE_ANY;
use crate::constants::INTERFACE_LOCAL_ONLY;
use crate::constants::INTERFACE_UNICAST;

/// The interface a reply was delivered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interface {
    /// All multicast-capable interfaces.
    Any,
    /// Loopback only.
    LocalOnly,
    /// Unicast only.
    Unicast,
    /// A concrete OS interface index.
    Index(u32),
    /// An already-resolved OS interface name such as `en0`.
    Name(String),
}

impl Interface {
    /// Map a raw interface index, folding the reserved sentinels into their
    /// named variants.
    pub const fn from_index(index: u32) -> Interface {
        match index {
            INTERFACE_ANY => Interface::Any,
            INTERFACE_LOCAL_ONLY => Interface::LocalOnly,
            INTERFACE_UNICAST => Interface::Unicast,
            index => Interface::Index(index),
        }
    }

    /// The numeric index, when one is known.
    pub fn index(&self) -> Option<u32> {
        match self {
            Interface::Any => Some(INTERFACE_ANY),
            Interface::LocalOnly => Some(INTERFACE_LOCAL_ONLY),
            Interface::Unicast => Some(INTERFACE_UNICAST),
            Interface::Index(index) => Some(*index),
            Interface::Name(_) => None,
        }
    }
}

impl From<u32> for Interface {
    fn from(index: u32) -> Interface {
        Interface::from_index(index)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interface::Any => f.write_str("any"),
            Interface::LocalOnly => f.write_str("local"),
            Interface::Unicast => f.write_str("unicast"),
            Interface::Index(index) => write!(f, "{index}"),
            Interface::Name(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(Interface::from_index(0), Interface::Any);
        assert_eq!(Interface::from_index(u32::MAX), Interface::LocalOnly);
        assert_eq!(Interface::from_index(u32::MAX - 1), Interface::Unicast);
        assert_eq!(Interface::from_index(3), Interface::Index(3));
    }

    #[test]
    fn test_index_round_trip() {
        for index in [0, 3, u32::MAX - 1, u32::MAX] {
            assert_eq!(Interface::from_index(index).index(), Some(index));
        }
        assert_eq!(Interface::Name("en0".to_string()).index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Interface::Any.to_string(), "any");
        assert_eq!(Interface::LocalOnly.to_string(), "local");
        assert_eq!(Interface::Unicast.to_string(), "unicast");
        assert_eq!(Interface::Index(7).to_string(), "7");
        assert_eq!(Interface::Name("en2".to_string()).to_string(), "en2");
    }
}
