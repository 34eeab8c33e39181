//! Onboarding applications awaiting review.

use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainError, DomainResult, Entity, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Pending,
    Approved,
    Rejected,
}

/// Review decision applied to a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditDecision {
    Approve,
    Reject,
}

impl AuditStatus {
    /// Only pending applications can be decided.
    pub fn decide(self, decision: AuditDecision) -> DomainResult<AuditStatus> {
        if self != AuditStatus::Pending {
            return Err(DomainError::invariant(format!(
                "application already {}",
                match self {
                    AuditStatus::Approved => "approved",
                    AuditStatus::Rejected => "rejected",
                    AuditStatus::Pending => "pending",
                }
            )));
        }
        Ok(match decision {
            AuditDecision::Approve => AuditStatus::Approved,
            AuditDecision::Reject => AuditStatus::Rejected,
        })
    }
}

/// Station onboarding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAudit {
    pub id: EntityId,
    pub station_name: String,
    pub account: String,
    pub phone: String,
    pub business_hours: Option<String>,
    pub region: String,
    pub community: Option<String>,
    pub address: String,
    pub partner_name: String,
    pub provider_name: String,
    pub property_name: Option<String>,
    pub delivery_payer: Option<String>,
    pub sms_payer: Option<String>,
    pub status: AuditStatus,
    pub apply_time: String,
}

/// Partner onboarding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAudit {
    pub id: EntityId,
    pub partner_name: String,
    pub contact_person: String,
    pub phone: String,
    /// Provider that submitted the application, if any.
    pub provider_name: Option<String>,
    pub status: AuditStatus,
    pub apply_time: String,
}

/// Property company onboarding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyAudit {
    pub id: EntityId,
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub region: String,
    pub provider_name: String,
    pub status: AuditStatus,
    pub apply_time: String,
}

macro_rules! impl_audit_entity {
    ($t:ty) => {
        impl Entity for $t {
            fn id(&self) -> &EntityId {
                &self.id
            }
        }

        impl $t {
            pub fn status(&self) -> AuditStatus {
                self.status
            }

            /// Apply a review decision in place.
            pub fn decide(&mut self, decision: AuditDecision) -> DomainResult<()> {
                self.status = self.status.decide(decision)?;
                Ok(())
            }
        }
    };
}

impl_audit_entity!(StationAudit);
impl_audit_entity!(PartnerAudit);
impl_audit_entity!(PropertyAudit);
