use serde::{Deserialize, Serialize};

use relaydesk_core::{Entity, EntityId};

/// A parcel held at a station. The id is the carrier waybill number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: EntityId,
    pub pickup_code: String,
    pub brand: String,
    pub inbound_time: String,
    pub outbound_time: Option<String>,
    pub receiver_phone: String,
    pub station_name: String,
    pub station_account: String,
    /// `pending`, `signed`, `outbound`, ...
    pub status: String,
    pub notify_status: String,
    pub partner_name: Option<String>,
    pub property_name: Option<String>,
}

impl Entity for Parcel {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
