//! Entity trait: identity + organization ownership.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> &EntityId;
}

/// Kind of organization in the network hierarchy.
///
/// Downstream records point at their owners by *name* under one of these
/// kinds (`providerName`, `partnerName`, `propertyName`, `stationName`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgKind {
    Provider,
    Partner,
    Property,
    Station,
}

impl OrgKind {
    pub const ALL: [OrgKind; 4] = [
        OrgKind::Provider,
        OrgKind::Partner,
        OrgKind::Property,
        OrgKind::Station,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgKind::Provider => "provider",
            OrgKind::Partner => "partner",
            OrgKind::Property => "property",
            OrgKind::Station => "station",
        }
    }
}

impl core::fmt::Display for OrgKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
