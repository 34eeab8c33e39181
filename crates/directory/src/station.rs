use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainResult, Entity, EntityId, require_text};

/// Pickup station.
///
/// A station belongs to one partner and optionally sits inside a property
/// company's estate; both links are by organization name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: EntityId,
    pub name: String,
    pub partner_name: String,
    pub property_name: Option<String>,
    pub account: String,
    pub contact: String,
    /// Operational status (`normal`, `abnormal`, ...).
    pub status: String,
    pub account_status: String,
    pub inbound: u32,
    pub outbound: u32,
    pub stock: u32,
    pub balance: f64,
    pub region: String,
    pub margin: f64,
    pub courier_count: u32,
    pub staff_count: u32,
    pub is_dispatching: bool,
    pub is_receiving: bool,
    pub create_time: String,
}

impl Station {
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.name, "station name")?;
        require_text(&self.account, "station account")
    }
}

impl Entity for Station {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
