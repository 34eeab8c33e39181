//! The full, unfiltered entity snapshot backing the console.

use relaydesk_core::{DomainError, DomainResult, OrgKind, require_text};

use crate::audit::{PartnerAudit, PropertyAudit, StationAudit};
use crate::collection::Collection;
use crate::finance::{RevenueBill, SplitConfig, SplitTarget};
use crate::organization::{Partner, PropertyCompany, ServiceProvider};
use crate::parcel::Parcel;
use crate::report::ReportData;
use crate::station::Station;
use crate::system_user::SystemUser;
use crate::ticket::Ticket;

/// Every entity collection the console works with.
///
/// This is the entity data provider: views read scoped snapshots of it and
/// saves write back into it. Nothing here applies authorization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub providers: Collection<ServiceProvider>,
    pub partners: Collection<Partner>,
    pub properties: Collection<PropertyCompany>,
    pub stations: Collection<Station>,
    pub bills: Collection<RevenueBill>,
    pub parcels: Collection<Parcel>,
    pub archived_parcels: Collection<Parcel>,
    pub reports: Collection<ReportData>,
    pub users: Collection<SystemUser>,
    pub station_audits: Collection<StationAudit>,
    pub partner_audits: Collection<PartnerAudit>,
    pub property_audits: Collection<PropertyAudit>,
    pub tickets: Collection<Ticket>,
    pub split_configs: Collection<SplitConfig>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an organization of `kind` named `name` exists (exact match).
    pub fn has_organization(&self, kind: OrgKind, name: &str) -> bool {
        match kind {
            OrgKind::Provider => self.providers.iter().any(|p| p.name == name),
            OrgKind::Partner => self.partners.iter().any(|p| p.name == name),
            OrgKind::Property => self.properties.iter().any(|p| p.name == name),
            OrgKind::Station => self.stations.iter().any(|s| s.name == name),
        }
    }

    /// Rename an organization and rewrite every record that references it by name.
    ///
    /// Returns the number of downstream references rewritten (the organization
    /// record itself is not counted). Ownership joins are by name, so a rename
    /// that bypasses this method orphans those records.
    ///
    /// Names are only unique per kind. Accounts are rewritten only when
    /// `is_member` says they belong to an organization of `kind`, and ticket
    /// initiators only when their recorded kind matches.
    pub fn rename_organization<F>(&mut self, kind: OrgKind, from: &str, to: &str, is_member: F) -> DomainResult<usize>
    where
        F: Fn(&SystemUser) -> bool,
    {
        require_text(to, "new name")?;
        if !self.has_organization(kind, from) {
            return Err(DomainError::not_found(format!("{kind} '{from}'")));
        }
        if from == to {
            return Ok(0);
        }
        if self.has_organization(kind, to) {
            return Err(DomainError::invariant(format!("{kind} '{to}' already exists")));
        }

        let mut n = 0;
        match kind {
            OrgKind::Provider => {
                for p in self.providers.iter_mut() {
                    rename_in(&mut p.name, from, to);
                }
                for p in self.partners.iter_mut() {
                    n += rename_opt(&mut p.provider_name, from, to);
                }
                for p in self.properties.iter_mut() {
                    n += rename_opt(&mut p.provider_name, from, to);
                }
                for a in self.station_audits.iter_mut() {
                    n += rename_in(&mut a.provider_name, from, to);
                }
                for a in self.partner_audits.iter_mut() {
                    n += rename_opt(&mut a.provider_name, from, to);
                }
                for a in self.property_audits.iter_mut() {
                    n += rename_in(&mut a.provider_name, from, to);
                }
                for c in self.split_configs.iter_mut() {
                    n += rename_opt(&mut c.provider_name, from, to);
                }
            }
            OrgKind::Partner => {
                for p in self.partners.iter_mut() {
                    rename_in(&mut p.name, from, to);
                }
                for s in self.stations.iter_mut() {
                    n += rename_in(&mut s.partner_name, from, to);
                }
                for p in self.parcels.iter_mut().chain(self.archived_parcels.iter_mut()) {
                    n += rename_opt(&mut p.partner_name, from, to);
                }
                for a in self.station_audits.iter_mut() {
                    n += rename_in(&mut a.partner_name, from, to);
                }
                for c in self.split_configs.iter_mut() {
                    n += rename_opt(&mut c.partner_name, from, to);
                }
            }
            OrgKind::Property => {
                for p in self.properties.iter_mut() {
                    rename_in(&mut p.name, from, to);
                }
                for s in self.stations.iter_mut() {
                    n += rename_opt(&mut s.property_name, from, to);
                }
                for p in self.parcels.iter_mut().chain(self.archived_parcels.iter_mut()) {
                    n += rename_opt(&mut p.property_name, from, to);
                }
                for a in self.station_audits.iter_mut() {
                    n += rename_opt(&mut a.property_name, from, to);
                }
                for c in self.split_configs.iter_mut() {
                    n += rename_opt(&mut c.property_name, from, to);
                }
            }
            OrgKind::Station => {
                for s in self.stations.iter_mut() {
                    rename_in(&mut s.name, from, to);
                }
                for b in self.bills.iter_mut() {
                    n += rename_in(&mut b.station_name, from, to);
                }
                for p in self.parcels.iter_mut().chain(self.archived_parcels.iter_mut()) {
                    n += rename_in(&mut p.station_name, from, to);
                }
                for t in self.tickets.iter_mut() {
                    n += rename_in(&mut t.station_name, from, to);
                }
                for c in self.split_configs.iter_mut() {
                    n += rename_opt(&mut c.station_name, from, to);
                }
            }
        }

        let target = match kind {
            OrgKind::Provider => Some(SplitTarget::Provider),
            OrgKind::Partner => Some(SplitTarget::Partner),
            OrgKind::Property => Some(SplitTarget::Property),
            OrgKind::Station => None,
        };
        for c in self.split_configs.iter_mut() {
            if Some(c.entity_type) == target {
                n += rename_in(&mut c.entity_name, from, to);
            }
        }

        for r in self.reports.iter_mut() {
            if r.subject.org_kind() == Some(kind) {
                n += rename_in(&mut r.name, from, to);
            }
        }
        for t in self.tickets.iter_mut() {
            if t.initiator_kind == Some(kind) {
                n += rename_in(&mut t.initiator, from, to);
            }
        }
        for u in self.users.iter_mut() {
            if is_member(u) {
                n += rename_opt(&mut u.organization, from, to);
            }
        }

        tracing::info!(kind = kind.as_str(), from, to, references = n, "organization renamed");
        Ok(n)
    }
}

fn rename_in(field: &mut String, from: &str, to: &str) -> usize {
    if field == from {
        *field = to.to_string();
        1
    } else {
        0
    }
}

fn rename_opt(field: &mut Option<String>, from: &str, to: &str) -> usize {
    field.as_mut().map_or(0, |f| rename_in(f, from, to))
}
