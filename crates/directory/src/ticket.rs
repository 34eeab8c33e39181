//! Work orders raised by stations and partners.

use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainError, DomainResult, Entity, EntityId, OrgKind, require_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Complaint,
    Business,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: TicketKind,
    /// Organization that raised the ticket.
    pub initiator: String,
    /// Kind of the initiating organization; names are only unique per kind.
    #[serde(default)]
    pub initiator_kind: Option<OrgKind>,
    /// `-` when the ticket is not about a station.
    pub station_name: String,
    pub description: String,
    pub create_time: String,
    pub status: TicketStatus,
    pub handler: Option<String>,
}

impl Ticket {
    pub fn validate(&self) -> DomainResult<()> {
        require_text(&self.description, "ticket description")?;
        Ok(())
    }

    /// Mark a pending ticket resolved.
    pub fn resolve(&mut self, handler: &str) -> DomainResult<()> {
        if self.status != TicketStatus::Pending {
            return Err(DomainError::invariant(format!("ticket {} is not pending", self.id)));
        }
        self.status = TicketStatus::Resolved;
        self.handler = Some(handler.to_string());
        Ok(())
    }
}

impl Entity for Ticket {
    fn id(&self) -> &EntityId {
        &self.id
    }
}
