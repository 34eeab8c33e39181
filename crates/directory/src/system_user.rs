use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainResult, Entity, EntityId, require_text};

/// Back-office login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemUser {
    pub id: EntityId,
    pub username: String,
    pub phone: String,
    /// Display name of the assigned system role (e.g. `服务商`).
    pub role_name: String,
    pub status: String,
    pub create_time: String,
    pub organization: Option<String>,
    pub wallet_id: Option<String>,
    pub wallet_name: Option<String>,
    pub wallet_balance: Option<f64>,
    /// Demo-only plaintext password; never serialized.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl SystemUser {
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.username, "username")?;
        require_text(&self.role_name, "role")
    }
}

impl Entity for SystemUser {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
