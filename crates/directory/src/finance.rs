use serde::{Deserialize, Serialize};

use relaydesk_core::{DomainError, DomainResult, Entity, EntityId};

use crate::organization::ActivationStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Confirmed,
    Paid,
}

/// Monthly revenue bill of a station or one of its couriers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBill {
    pub id: EntityId,
    pub month: String,
    /// `station` or `courier`.
    pub account_type: String,
    pub name: String,
    pub user_id: String,
    pub user_phone: String,
    pub station_name: String,
    pub amount: f64,
    pub status: BillStatus,
}

impl Entity for RevenueBill {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Who a revenue split applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitTarget {
    #[serde(rename = "kuaijin")]
    Platform,
    Provider,
    Partner,
    Property,
    Staff,
}

/// Revenue split ratio of one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfig {
    pub id: EntityId,
    pub entity_id: String,
    pub entity_name: String,
    pub entity_type: SplitTarget,
    pub wallet_account: String,
    /// Own share, percent.
    pub ratio: f64,
    /// Provider's share on a property, percent.
    pub provider_ratio: Option<f64>,
    pub status: ActivationStatus,
    pub update_time: String,
    pub station_name: Option<String>,
    pub partner_name: Option<String>,
    pub provider_name: Option<String>,
    pub property_name: Option<String>,
}

impl SplitConfig {
    pub fn validate(&self) -> DomainResult<()> {
        for (label, value) in [("ratio", Some(self.ratio)), ("provider ratio", self.provider_ratio)] {
            if let Some(v) = value {
                if !(0.0..=100.0).contains(&v) {
                    return Err(DomainError::validation(format!("{label} must be within 0-100, got {v}")));
                }
            }
        }
        Ok(())
    }
}

impl Entity for SplitConfig {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_ratio_is_a_percentage() {
        let mut config = SplitConfig {
            id: EntityId::new("sc1"),
            entity_id: "prop001".to_string(),
            entity_name: "物业".to_string(),
            entity_type: SplitTarget::Property,
            wallet_account: "W1".to_string(),
            ratio: 10.0,
            provider_ratio: Some(15.0),
            status: ActivationStatus::Active,
            update_time: "2025-11-01".to_string(),
            station_name: None,
            partner_name: None,
            provider_name: None,
            property_name: None,
        };
        assert!(config.validate().is_ok());

        config.provider_ratio = Some(120.0);
        assert!(config.validate().is_err());

        let json = serde_json::to_value(SplitTarget::Platform).unwrap();
        assert_eq!(json, "kuaijin");
    }
}
