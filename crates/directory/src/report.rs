use serde::{Deserialize, Serialize};

use relaydesk_core::{Entity, EntityId, OrgKind};

/// What a report row aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSubject {
    Station,
    Provider,
    Partner,
    Property,
    /// Carrier brand; not an organization of the network.
    Brand,
}

impl ReportSubject {
    /// Organization kind the report's `name` refers to, if any.
    pub fn org_kind(&self) -> Option<OrgKind> {
        match self {
            ReportSubject::Station => Some(OrgKind::Station),
            ReportSubject::Provider => Some(OrgKind::Provider),
            ReportSubject::Partner => Some(OrgKind::Partner),
            ReportSubject::Property => Some(OrgKind::Property),
            ReportSubject::Brand => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub id: EntityId,
    /// Name of the reported subject.
    pub name: String,
    #[serde(rename = "type")]
    pub subject: ReportSubject,
    pub province: String,
    pub city: String,
    pub district: String,
    pub community: String,
    pub contact: String,
    pub total_inbound: u32,
    pub total_outbound: u32,
    pub issue_count: u32,
    pub income: f64,
    pub date: String,
}

impl Entity for ReportData {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
