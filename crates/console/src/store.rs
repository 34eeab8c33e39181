//! Binding between record types and their directory collections.

use relaydesk_access::Scoped;
use relaydesk_auth::{Role, Session};
use relaydesk_core::DomainResult;
use relaydesk_directory::{
    AuditDecision, Collection, Directory, Parcel, Partner, PartnerAudit, PropertyAudit,
    PropertyCompany, ReportData, RevenueBill, ServiceProvider, SplitConfig, Station, StationAudit,
    SystemUser, Ticket,
};

/// A record type the console can list and save.
pub trait Stored: Scoped + Clone {
    fn collection(directory: &Directory) -> &Collection<Self>;

    fn collection_mut(directory: &mut Directory) -> &mut Collection<Self>;

    /// Required-field checks run before a save is applied.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    /// Fill owner fields of a new record from the creating session.
    fn stamp_owner(&mut self, _session: &Session) {}
}

/// An onboarding application that can be approved or rejected.
pub trait Reviewable: Stored {
    fn apply_decision(&mut self, decision: AuditDecision) -> DomainResult<()>;
}

macro_rules! stored {
    ($t:ty, $field:ident) => {
        fn collection(directory: &Directory) -> &Collection<$t> {
            &directory.$field
        }

        fn collection_mut(directory: &mut Directory) -> &mut Collection<$t> {
            &mut directory.$field
        }
    };
}

impl Stored for ServiceProvider {
    stored!(ServiceProvider, providers);

    fn validate(&self) -> DomainResult<()> {
        ServiceProvider::validate(self)
    }
}

impl Stored for Partner {
    stored!(Partner, partners);

    fn validate(&self) -> DomainResult<()> {
        Partner::validate(self)
    }

    fn stamp_owner(&mut self, session: &Session) {
        if session.role() == Role::Provider {
            self.provider_name = Some(session.organization_name().to_string());
        }
    }
}

impl Stored for PropertyCompany {
    stored!(PropertyCompany, properties);

    fn validate(&self) -> DomainResult<()> {
        PropertyCompany::validate(self)
    }

    fn stamp_owner(&mut self, session: &Session) {
        if session.role() == Role::Provider {
            self.provider_name = Some(session.organization_name().to_string());
        }
    }
}

impl Stored for Station {
    stored!(Station, stations);

    fn validate(&self) -> DomainResult<()> {
        Station::validate(self)
    }

    fn stamp_owner(&mut self, session: &Session) {
        if session.role() == Role::Partner {
            self.partner_name = session.organization_name().to_string();
        }
    }
}

impl Stored for RevenueBill {
    stored!(RevenueBill, bills);
}

impl Stored for Parcel {
    stored!(Parcel, parcels);

    fn stamp_owner(&mut self, session: &Session) {
        if session.role() == Role::Station {
            self.station_name = session.organization_name().to_string();
        }
    }
}

impl Stored for ReportData {
    stored!(ReportData, reports);
}

impl Stored for SystemUser {
    stored!(SystemUser, users);

    fn validate(&self) -> DomainResult<()> {
        SystemUser::validate(self)
    }

    fn stamp_owner(&mut self, session: &Session) {
        if !session.is_platform() {
            self.organization = Some(session.organization_name().to_string());
        }
    }
}

impl Stored for Ticket {
    stored!(Ticket, tickets);

    fn validate(&self) -> DomainResult<()> {
        Ticket::validate(self)
    }

    fn stamp_owner(&mut self, session: &Session) {
        if !session.is_platform() {
            self.initiator = session.organization_name().to_string();
            self.initiator_kind = session.role().org_kind();
        }
    }
}

impl Stored for SplitConfig {
    stored!(SplitConfig, split_configs);

    fn validate(&self) -> DomainResult<()> {
        SplitConfig::validate(self)
    }
}

impl Stored for StationAudit {
    stored!(StationAudit, station_audits);
}

impl Stored for PartnerAudit {
    stored!(PartnerAudit, partner_audits);
}

impl Stored for PropertyAudit {
    stored!(PropertyAudit, property_audits);
}

macro_rules! reviewable {
    ($($t:ty),+) => {
        $(
            impl Reviewable for $t {
                fn apply_decision(&mut self, decision: AuditDecision) -> DomainResult<()> {
                    self.decide(decision)
                }
            }
        )+
    };
}

reviewable!(StationAudit, PartnerAudit, PropertyAudit);
