//! Inclusion flags for sibling enumeration.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Which of the three special addresses of a subnet to keep when listing
/// siblings. A flag that is not set excludes that address.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct SiblingOptions {
    /// Keep the reference address itself.
    pub include_self: bool,
    /// Keep the broadcast address (all host bits set).
    pub include_broadcast: bool,
    /// Keep the network identifier (all host bits clear).
    pub include_network_identifier: bool,
}

impl SiblingOptions {
    pub const EXCLUDE_ALL: SiblingOptions = SiblingOptions {
        include_self: false,
        include_broadcast: false,
        include_network_identifier: false,
    };
    pub const INCLUDE_SELF: SiblingOptions = SiblingOptions {
        include_self: true,
        ..Self::EXCLUDE_ALL
    };
    pub const INCLUDE_BROADCAST: SiblingOptions = SiblingOptions {
        include_broadcast: true,
        ..Self::EXCLUDE_ALL
    };
    pub const INCLUDE_NETWORK_IDENTIFIER: SiblingOptions = SiblingOptions {
        include_network_identifier: true,
        ..Self::EXCLUDE_ALL
    };
    pub const INCLUDE_ALL: SiblingOptions = SiblingOptions {
        include_self: true,
        include_broadcast: true,
        include_network_identifier: true,
    };

    /// True if every flag set in `other` is also set in `self`.
    pub fn contains(self, other: SiblingOptions) -> bool {
        (self | other) == self
    }

    /// Clear every flag that is set in `other`.
    pub fn without(self, other: SiblingOptions) -> SiblingOptions {
        SiblingOptions {
            include_self: self.include_self && !other.include_self,
            include_broadcast: self.include_broadcast && !other.include_broadcast,
            include_network_identifier: self.include_network_identifier
                && !other.include_network_identifier,
        }
    }
}

impl BitOr for SiblingOptions {
    type Output = SiblingOptions;

    fn bitor(self, rhs: SiblingOptions) -> SiblingOptions {
        SiblingOptions {
            include_self: self.include_self || rhs.include_self,
            include_broadcast: self.include_broadcast || rhs.include_broadcast,
            include_network_identifier: self.include_network_identifier
                || rhs.include_network_identifier,
        }
    }
}

impl BitOrAssign for SiblingOptions {
    fn bitor_assign(&mut self, rhs: SiblingOptions) {
        *self = *self | rhs;
    }
}

impl std::fmt::Display for SiblingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut names = Vec::new();
        if self.include_self {
            names.push("self");
        }
        if self.include_broadcast {
            names.push("broadcast");
        }
        if self.include_network_identifier {
            names.push("network");
        }
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
