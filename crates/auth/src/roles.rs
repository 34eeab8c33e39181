use serde::{Deserialize, Serialize};

use relaydesk_core::OrgKind;

/// Tier of the logistics network a session acts for.
///
/// Delegation order: Platform ⊇ Provider ⊇ {Partner, Property} ⊇ Station ⊇ Courier.
/// Partner and Property are incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Platform operator; bypasses all scoping.
    Platform,
    Provider,
    Partner,
    Property,
    Station,
    Courier,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Platform,
        Role::Provider,
        Role::Partner,
        Role::Property,
        Role::Station,
        Role::Courier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Platform => "platform",
            Role::Provider => "provider",
            Role::Partner => "partner",
            Role::Property => "property",
            Role::Station => "station",
            Role::Courier => "courier",
        }
    }

    /// Display label shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Platform => "快金平台",
            Role::Provider => "服务商",
            Role::Partner => "合伙人",
            Role::Property => "物业公司",
            Role::Station => "驿站负责人",
            Role::Courier => "派送员",
        }
    }

    /// Whether this role's subtree contains `other`.
    pub fn covers(self, other: Role) -> bool {
        use Role::*;
        match self {
            Platform => true,
            Provider => other != Platform,
            Partner => matches!(other, Partner | Station | Courier),
            Property => matches!(other, Property | Station | Courier),
            Station => matches!(other, Station | Courier),
            Courier => other == Courier,
        }
    }

    /// Map a system-role display name to a network role.
    ///
    /// Matching is by keyword; anything unrecognised is treated as an
    /// administrator account.
    pub fn from_role_name(role_name: &str) -> Role {
        if role_name.contains("服务商") {
            Role::Provider
        } else if role_name.contains("合伙人") {
            Role::Partner
        } else if role_name.contains("物业") {
            Role::Property
        } else if role_name.contains("驿站") || role_name.contains("站长") {
            Role::Station
        } else if role_name.contains("派送员") || role_name.contains("快递员") {
            Role::Courier
        } else {
            Role::Platform
        }
    }

    /// Kind of organization an account of this role belongs to. Couriers
    /// belong to a station; the platform is not an organization.
    pub fn org_kind(self) -> Option<OrgKind> {
        match self {
            Role::Platform => None,
            Role::Provider => Some(OrgKind::Provider),
            Role::Partner => Some(OrgKind::Partner),
            Role::Property => Some(OrgKind::Property),
            Role::Station | Role::Courier => Some(OrgKind::Station),
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown role '{s}'"))
    }
}
