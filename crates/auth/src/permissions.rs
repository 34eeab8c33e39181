use serde::{Deserialize, Serialize};

/// Mutation a role may attempt on a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Edit,
    Delete,
    /// Approve or reject an onboarding application.
    Review,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Edit, Action::Delete, Action::Review];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Review => "review",
        }
    }
}

/// Record types subject to scoping and mutation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Provider,
    Partner,
    Property,
    Station,
    Bill,
    Parcel,
    Report,
    SystemUser,
    StationAudit,
    PartnerAudit,
    PropertyAudit,
    Ticket,
    SplitConfig,
}

impl EntityKind {
    pub const ALL: [EntityKind; 13] = [
        EntityKind::Provider,
        EntityKind::Partner,
        EntityKind::Property,
        EntityKind::Station,
        EntityKind::Bill,
        EntityKind::Parcel,
        EntityKind::Report,
        EntityKind::SystemUser,
        EntityKind::StationAudit,
        EntityKind::PartnerAudit,
        EntityKind::PropertyAudit,
        EntityKind::Ticket,
        EntityKind::SplitConfig,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Provider => "provider",
            EntityKind::Partner => "partner",
            EntityKind::Property => "property",
            EntityKind::Station => "station",
            EntityKind::Bill => "bill",
            EntityKind::Parcel => "parcel",
            EntityKind::Report => "report",
            EntityKind::SystemUser => "system_user",
            EntityKind::StationAudit => "station_audit",
            EntityKind::PartnerAudit => "partner_audit",
            EntityKind::PropertyAudit => "property_audit",
            EntityKind::Ticket => "ticket",
            EntityKind::SplitConfig => "split_config",
        }
    }

    /// Display label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Provider => "服务商",
            EntityKind::Partner => "合伙人",
            EntityKind::Property => "物业公司",
            EntityKind::Station => "服务站",
            EntityKind::Bill => "收益账单",
            EntityKind::Parcel => "包裹",
            EntityKind::Report => "报表",
            EntityKind::SystemUser => "用户",
            EntityKind::StationAudit => "服务站审核",
            EntityKind::PartnerAudit => "合伙人审核",
            EntityKind::PropertyAudit => "物业公司审核",
            EntityKind::Ticket => "工单",
            EntityKind::SplitConfig => "分账配置",
        }
    }
}

/// Permission identifier: an action on a record type, rendered as
/// `"<kind>.<action>"` (e.g. `"station.create"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub kind: EntityKind,
    pub action: Action,
}

impl Permission {
    pub fn new(kind: EntityKind, action: Action) -> Self {
        Self { kind, action }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.kind.as_str(), self.action.as_str())
    }
}
