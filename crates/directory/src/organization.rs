//! Organizations of the network: service providers, partners and property companies.

use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainResult, Entity, EntityId, require_text};

/// Enable/disable lifecycle shared by organizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    #[default]
    Active,
    Disabled,
}

/// A service provider, managed by the platform operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub contact: String,
    pub phone: String,
    pub partner_count: u32,
    pub account_name: String,
    pub account_id: String,
    pub credit_code: String,
    /// Security deposit; `None` where the record shows `-`.
    pub margin: Option<f64>,
    /// Jurisdiction.
    pub region: String,
    pub create_time: String,
    pub status: ActivationStatus,
}

impl ServiceProvider {
    /// Required fields of the provider form.
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.name, "provider name")?;
        require_text(&self.address, "provider address")
    }
}

impl Entity for ServiceProvider {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A regional partner operating stations under a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: EntityId,
    pub name: String,
    /// Owning provider, by name.
    pub provider_name: Option<String>,
    pub provider_id: Option<EntityId>,
    pub contact_person: String,
    pub phone: String,
    pub staff_count: u32,
    pub station_count: u32,
    pub margin: Option<f64>,
    pub account_name: String,
    pub account_id: String,
    pub credit_code: Option<String>,
    pub status: ActivationStatus,
    pub create_time: String,
    pub address: String,
    pub service_scope: Option<String>,
    pub address_detail: Option<String>,
}

impl Partner {
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.name, "partner name")?;
        require_text(&self.contact_person, "contact person")
    }
}

impl Entity for Partner {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// A property-management company.
///
/// Property companies have read access to their stations but never mutate
/// the network topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyCompany {
    pub id: EntityId,
    pub name: String,
    pub address: String,
    pub station_count: u32,
    pub contact: String,
    /// Login account.
    pub account: String,
    pub phone: String,
    pub create_time: String,
    pub status: ActivationStatus,
    pub provider_name: Option<String>,
}

impl PropertyCompany {
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.name, "company name")?;
        require_text(&self.address, "company address")
    }
}

impl Entity for PropertyCompany {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
