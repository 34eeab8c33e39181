//! Access scope resolver.
//!
//! Owned organizations are derived from the session by joining organization
//! names across the directory. A Provider owns its partners and property
//! companies by `provider_name`, and through them every station whose
//! `partner_name` or `property_name` names one of those. Bills, parcels and
//! station reports follow the station set.
//!
//! Scoping never fails: an unknown organization owns nothing, so every view is
//! empty for it.

use std::collections::BTreeSet;

use relaydesk_auth::{EntityKind, Role, Session};
use relaydesk_core::{Entity, OrgKind};
use relaydesk_directory::{
    Directory, Parcel, Partner, PartnerAudit, PropertyAudit, PropertyCompany, ReportData,
    ReportSubject, RevenueBill, ServiceProvider, SplitConfig, Station, StationAudit, SystemUser,
    Ticket,
};

/// Names of the organizations a session owns, resolved against one
/// directory snapshot.
///
/// Rebuild it after the directory changes; it does not track later edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessScope {
    role: Role,
    organization: String,
    providers: BTreeSet<String>,
    partners: BTreeSet<String>,
    properties: BTreeSet<String>,
    stations: BTreeSet<String>,
}

impl AccessScope {
    pub fn resolve(session: &Session, directory: &Directory) -> Self {
        let org = session.organization_name();
        let mut scope = Self {
            role: session.role(),
            organization: org.to_string(),
            providers: BTreeSet::new(),
            partners: BTreeSet::new(),
            properties: BTreeSet::new(),
            stations: BTreeSet::new(),
        };

        match session.role() {
            Role::Platform => {}
            Role::Provider => {
                scope.providers.insert(org.to_string());
                scope.partners = directory
                    .partners
                    .iter()
                    .filter(|p| p.provider_name.as_deref() == Some(org))
                    .map(|p| p.name.clone())
                    .collect();
                scope.properties = directory
                    .properties
                    .iter()
                    .filter(|p| p.provider_name.as_deref() == Some(org))
                    .map(|p| p.name.clone())
                    .collect();
                scope.stations = directory
                    .stations
                    .iter()
                    .filter(|s| {
                        scope.partners.contains(&s.partner_name)
                            || s.property_name.as_ref().is_some_and(|p| scope.properties.contains(p))
                    })
                    .map(|s| s.name.clone())
                    .collect();
            }
            Role::Partner => {
                // The contact person match lets a partner account created for
                // a person see the partner record it administers.
                scope.partners = directory
                    .partners
                    .iter()
                    .filter(|p| p.name == org || p.contact_person == session.user_name())
                    .map(|p| p.name.clone())
                    .collect();
                scope.partners.insert(org.to_string());
                scope.stations = directory
                    .stations
                    .iter()
                    .filter(|s| s.partner_name == org)
                    .map(|s| s.name.clone())
                    .collect();
            }
            Role::Property => {
                scope.properties.insert(org.to_string());
                scope.stations = directory
                    .stations
                    .iter()
                    .filter(|s| s.property_name.as_deref() == Some(org))
                    .map(|s| s.name.clone())
                    .collect();
            }
            Role::Station | Role::Courier => {
                scope.stations.insert(org.to_string());
            }
        }

        tracing::debug!(
            role = scope.role.as_str(),
            organization = %scope.organization,
            partners = scope.partners.len(),
            properties = scope.properties.len(),
            stations = scope.stations.len(),
            "access scope resolved"
        );
        scope
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn is_unrestricted(&self) -> bool {
        self.role == Role::Platform
    }

    /// Whether `name` is an owned organization of `kind`.
    pub fn owns(&self, kind: OrgKind, name: &str) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        let set = match kind {
            OrgKind::Provider => &self.providers,
            OrgKind::Partner => &self.partners,
            OrgKind::Property => &self.properties,
            OrgKind::Station => &self.stations,
        };
        set.contains(name)
    }

    fn owns_opt(&self, kind: OrgKind, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.owns(kind, name),
            None => self.is_unrestricted(),
        }
    }

    pub fn can_see<E: Scoped>(&self, entity: &E) -> bool {
        entity.visible_in(self)
    }

    /// The visible subset of `all`, in source order.
    pub fn scope<E: Scoped + Clone>(&self, all: &[E]) -> Vec<E> {
        if self.is_unrestricted() {
            return all.to_vec();
        }
        all.iter().filter(|e| e.visible_in(self)).cloned().collect()
    }

    /// Borrowing variant of [`AccessScope::scope`].
    pub fn visible<'a, E: Scoped>(&'a self, all: &'a [E]) -> impl Iterator<Item = &'a E> + 'a {
        all.iter().filter(move |e| e.visible_in(self))
    }
}

/// A record type the resolver knows how to filter.
pub trait Scoped: Entity {
    const KIND: EntityKind;

    fn visible_in(&self, scope: &AccessScope) -> bool;

    /// Whether a new record may be created where it says it belongs. Checked
    /// against the owner fields, since a fresh organization is not yet in
    /// any scope.
    fn placed_in(&self, scope: &AccessScope) -> bool {
        self.visible_in(scope)
    }
}

impl Scoped for ServiceProvider {
    const KIND: EntityKind = EntityKind::Provider;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Provider, &self.name)
    }
}

impl Scoped for Partner {
    const KIND: EntityKind = EntityKind::Partner;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Partner, &self.name)
    }

    fn placed_in(&self, scope: &AccessScope) -> bool {
        scope.owns_opt(OrgKind::Provider, self.provider_name.as_deref())
    }
}

impl Scoped for PropertyCompany {
    const KIND: EntityKind = EntityKind::Property;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Property, &self.name)
    }

    fn placed_in(&self, scope: &AccessScope) -> bool {
        scope.owns_opt(OrgKind::Provider, self.provider_name.as_deref())
    }
}

impl Scoped for Station {
    const KIND: EntityKind = EntityKind::Station;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Station, &self.name)
    }

    fn placed_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Partner, &self.partner_name)
            || scope.owns_opt(OrgKind::Property, self.property_name.as_deref())
    }
}

impl Scoped for RevenueBill {
    const KIND: EntityKind = EntityKind::Bill;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        // Couriers see no bills.
        scope.role != Role::Courier && scope.owns(OrgKind::Station, &self.station_name)
    }
}

impl Scoped for Parcel {
    const KIND: EntityKind = EntityKind::Parcel;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Station, &self.station_name)
    }
}

impl Scoped for ReportData {
    const KIND: EntityKind = EntityKind::Report;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        match self.subject.org_kind() {
            Some(kind) => scope.owns(kind, &self.name),
            None => scope.is_unrestricted(),
        }
    }
}

impl Scoped for SystemUser {
    const KIND: EntityKind = EntityKind::SystemUser;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        if scope.is_unrestricted() {
            return true;
        }
        !scope.organization.is_empty() && self.organization.as_deref() == Some(scope.organization())
    }
}

impl Scoped for StationAudit {
    const KIND: EntityKind = EntityKind::StationAudit;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Provider, &self.provider_name)
            || scope.owns(OrgKind::Partner, &self.partner_name)
    }
}

impl Scoped for PartnerAudit {
    const KIND: EntityKind = EntityKind::PartnerAudit;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns_opt(OrgKind::Provider, self.provider_name.as_deref())
    }
}

impl Scoped for PropertyAudit {
    const KIND: EntityKind = EntityKind::PropertyAudit;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Provider, &self.provider_name)
    }
}

impl Scoped for Ticket {
    const KIND: EntityKind = EntityKind::Ticket;

    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.owns(OrgKind::Station, &self.station_name)
            || (!scope.organization.is_empty() && self.initiator == scope.organization)
            || scope.owns(OrgKind::Partner, &self.initiator)
            || scope.owns(OrgKind::Station, &self.initiator)
    }
}

impl Scoped for SplitConfig {
    const KIND: EntityKind = EntityKind::SplitConfig;

    // Split ratios are set by the platform only.
    fn visible_in(&self, scope: &AccessScope) -> bool {
        scope.is_unrestricted()
    }
}

/// Brand reports are not tied to an organization.
pub fn is_brand_report(report: &ReportData) -> bool {
    report.subject == ReportSubject::Brand
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaydesk_directory::seed;

    fn scope_for(role: Role, org: &str, user: &str) -> (AccessScope, Directory) {
        let dir = seed::demo_directory();
        let session = Session::new("u_test", user, role, org);
        (AccessScope::resolve(&session, &dir), dir)
    }

    fn ids<E: Entity>(items: &[E]) -> Vec<&str> {
        items.iter().map(|e| e.id().as_str()).collect()
    }

    #[test]
    fn provider_sees_only_its_own_partners() {
        let (scope, dir) = scope_for(Role::Provider, "深圳市快金数据", "寇鑫");
        let partners = scope.scope(dir.partners.as_slice());
        assert_eq!(ids(&partners), vec!["p001"]);
        assert_eq!(partners[0].provider_name.as_deref(), Some("深圳市快金数据"));

        let providers = scope.scope(dir.providers.as_slice());
        assert_eq!(ids(&providers), vec!["sp001"]);
    }

    #[test]
    fn provider_reaches_stations_through_partners_and_properties() {
        let (scope, dir) = scope_for(Role::Provider, "翟总", "翟总");
        assert_eq!(
            ids(&scope.scope(dir.properties.as_slice())),
            vec!["prop001", "prop005"]
        );
        assert_eq!(
            ids(&scope.scope(dir.stations.as_slice())),
            vec!["s001", "s002", "s004", "s005"]
        );
        assert_eq!(ids(&scope.scope(dir.bills.as_slice())), vec!["BILL202511003"]);
        assert_eq!(ids(&scope.scope(dir.parcels.as_slice())), vec!["ZT5566778899"]);
        assert_eq!(ids(&scope.scope(dir.reports.as_slice())), vec!["rep007"]);
    }

    #[test]
    fn property_sees_stations_on_its_estates() {
        let (scope, dir) = scope_for(Role::Property, seed::PENGBAI_PROPERTY, "翟总");
        assert_eq!(scope.scope(dir.stations.as_slice()).len(), 4);
        assert_eq!(ids(&scope.scope(dir.properties.as_slice())), vec!["prop001"]);
        assert!(scope.scope(dir.partners.as_slice()).is_empty());
    }

    #[test]
    fn organization_name_is_an_exact_join_key() {
        // The seeded name carries a zero-width suffix.
        let (scope, dir) = scope_for(Role::Property, "深圳市澎柏物业管理有限公司", "翟总");
        assert!(scope.scope(dir.stations.as_slice()).is_empty());
    }

    #[test]
    fn partner_matches_by_name_or_contact_person() {
        let (scope, dir) = scope_for(Role::Partner, "翟总", "nobody");
        assert_eq!(ids(&scope.scope(dir.partners.as_slice())), vec!["p002"]);

        let (scope, _) = scope_for(Role::Partner, "某合伙人", "寇鑫");
        assert_eq!(ids(&scope.scope(dir.partners.as_slice())), vec!["p001"]);
        assert!(scope.scope(dir.stations.as_slice()).is_empty());
    }

    #[test]
    fn station_sees_its_own_bills_but_courier_does_not() {
        let (scope, dir) = scope_for(Role::Station, "厚德品园上门服务", "站长");
        assert_eq!(ids(&scope.scope(dir.stations.as_slice())), vec!["s001"]);
        assert_eq!(ids(&scope.scope(dir.bills.as_slice())), vec!["BILL202511003"]);

        let (scope, _) = scope_for(Role::Courier, "厚德品园上门服务", "派送员");
        assert!(scope.scope(dir.bills.as_slice()).is_empty());
        assert_eq!(ids(&scope.scope(dir.parcels.as_slice())), vec!["ZT5566778899"]);
    }

    #[test]
    fn brand_reports_are_platform_only() {
        let (scope, dir) = scope_for(Role::Provider, "杭州顺达服务商", "provider_01");
        let visible = scope.scope(dir.reports.as_slice());
        assert_eq!(ids(&visible), vec!["rep003"]);
        assert!(!visible.iter().any(is_brand_report));
    }

    #[test]
    fn audits_follow_the_provider() {
        let (scope, dir) = scope_for(Role::Provider, "杭州顺达服务商", "provider_01");
        assert_eq!(ids(&scope.scope(dir.station_audits.as_slice())), vec!["a001"]);
        assert_eq!(ids(&scope.scope(dir.property_audits.as_slice())), vec!["pra001", "pra002"]);
        assert!(scope.scope(dir.partner_audits.as_slice()).is_empty());

        let (scope, _) = scope_for(Role::Provider, "深圳市快金数据", "寇鑫");
        assert_eq!(ids(&scope.scope(dir.partner_audits.as_slice())), vec!["pa001"]);
    }

    #[test]
    fn tickets_follow_station_or_initiator() {
        let (scope, dir) = scope_for(Role::Partner, "翟总", "翟总");
        assert_eq!(ids(&scope.scope(dir.tickets.as_slice())), vec!["GD20251121003"]);

        let (scope, _) = scope_for(Role::Partner, "城东区域合伙人", "x");
        assert_eq!(ids(&scope.scope(dir.tickets.as_slice())), vec!["GD20231025002"]);
    }

    #[test]
    fn blank_organization_owns_no_initiator_or_account() {
        let (scope, dir) = scope_for(Role::Provider, "", "x");
        let mut ticket = dir.tickets.as_slice()[0].clone();
        ticket.initiator = String::new();
        ticket.station_name = "-".to_string();
        assert!(!scope.can_see(&ticket));

        let mut user = dir.users.as_slice()[0].clone();
        user.organization = Some(String::new());
        assert!(!scope.can_see(&user));
    }

    #[test]
    fn new_records_are_placed_by_their_owner_fields() {
        let (scope, dir) = scope_for(Role::Provider, "深圳市快金数据", "寇鑫");
        let mut station = dir.stations.as_slice()[0].clone();
        station.name = "新驿站".to_string();
        station.property_name = None;

        station.partner_name = "快递鸟".to_string();
        assert!(station.placed_in(&scope));
        assert!(!station.visible_in(&scope));

        station.partner_name = "翟总".to_string();
        assert!(!station.placed_in(&scope));

        let mut partner = dir.partners.as_slice()[0].clone();
        partner.provider_name = Some("深圳市快金数据".to_string());
        assert!(partner.placed_in(&scope));
        partner.provider_name = Some("翟总".to_string());
        assert!(!partner.placed_in(&scope));
        partner.provider_name = None;
        assert!(!partner.placed_in(&scope));
    }

    #[test]
    fn split_configs_are_platform_only() {
        let (scope, dir) = scope_for(Role::Provider, "杭州顺达服务商", "provider_01");
        assert!(scope.scope(dir.split_configs.as_slice()).is_empty());
    }

    #[test]
    fn users_are_scoped_by_organization() {
        let (scope, dir) = scope_for(Role::Provider, "杭州顺达服务商", "provider_01");
        assert_eq!(ids(&scope.scope(dir.users.as_slice())), vec!["u002"]);
    }

    #[test]
    fn platform_sees_everything_with_empty_org() {
        let (scope, dir) = scope_for(Role::Platform, "", "admin");
        assert_eq!(scope.scope(dir.providers.as_slice()), dir.providers.as_slice());
        assert_eq!(scope.scope(dir.partners.as_slice()), dir.partners.as_slice());
        assert_eq!(scope.scope(dir.properties.as_slice()), dir.properties.as_slice());
        assert_eq!(scope.scope(dir.stations.as_slice()), dir.stations.as_slice());
        assert_eq!(scope.scope(dir.bills.as_slice()), dir.bills.as_slice());
        assert_eq!(scope.scope(dir.parcels.as_slice()), dir.parcels.as_slice());
        assert_eq!(scope.scope(dir.reports.as_slice()), dir.reports.as_slice());
        assert_eq!(scope.scope(dir.users.as_slice()), dir.users.as_slice());
        assert_eq!(scope.scope(dir.partner_audits.as_slice()), dir.partner_audits.as_slice());
    }

    #[test]
    fn orphaned_partner_is_visible_only_to_platform() {
        let dir = seed::demo_directory();
        let orphan = dir
            .partners
            .iter()
            .find(|p| p.id.as_str() == "p003")
            .cloned()
            .unwrap();

        for provider in dir.providers.iter() {
            let session = Session::new("u", "x", Role::Provider, provider.name.clone());
            assert!(!AccessScope::resolve(&session, &dir).can_see(&orphan));
        }
        let platform = Session::new("u", "x", Role::Platform, "");
        assert!(AccessScope::resolve(&platform, &dir).can_see(&orphan));
    }

    #[test]
    fn unknown_organization_sees_nothing() {
        let (scope, dir) = scope_for(Role::Provider, "不存在的服务商", "x");
        assert!(scope.scope(dir.partners.as_slice()).is_empty());
        assert!(scope.scope(dir.stations.as_slice()).is_empty());
        assert!(scope.scope(dir.parcels.as_slice()).is_empty());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn any_session() -> impl Strategy<Value = Session> {
            let orgs = vec![
                "",
                "深圳市快金数据",
                "翟总",
                "KDN合伙人",
                "杭州顺达服务商",
                seed::PENGBAI_PROPERTY,
                "厚德品园上门服务",
                "不存在",
            ];
            (
                prop::sample::select(Role::ALL.to_vec()),
                prop::sample::select(orgs),
                prop::sample::select(vec!["寇鑫", "翟总", "admin"]),
            )
                .prop_map(|(role, org, user)| Session::new("u", user, role, org))
        }

        fn is_subsequence<E: PartialEq>(sub: &[E], all: &[E]) -> bool {
            let mut rest = all.iter();
            sub.iter().all(|x| rest.any(|y| y == x))
        }

        proptest! {
            #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

            #[test]
            fn scoping_is_an_order_preserving_subset(session in any_session()) {
                let dir = seed::demo_directory();
                let scope = AccessScope::resolve(&session, &dir);
                let stations = scope.scope(dir.stations.as_slice());
                prop_assert!(is_subsequence(&stations, dir.stations.as_slice()));
                let parcels = scope.scope(dir.parcels.as_slice());
                prop_assert!(is_subsequence(&parcels, dir.parcels.as_slice()));
                let partners = scope.scope(dir.partners.as_slice());
                prop_assert!(is_subsequence(&partners, dir.partners.as_slice()));
            }

            #[test]
            fn scoping_is_idempotent(session in any_session()) {
                let dir = seed::demo_directory();
                let scope = AccessScope::resolve(&session, &dir);
                let once = scope.scope(dir.stations.as_slice());
                prop_assert_eq!(scope.scope(&once), once.clone());
                let reports = scope.scope(dir.reports.as_slice());
                prop_assert_eq!(scope.scope(&reports), reports.clone());
            }

            #[test]
            fn scoping_leaves_the_source_untouched(session in any_session()) {
                let dir = seed::demo_directory();
                let before = dir.clone();
                let scope = AccessScope::resolve(&session, &dir);
                let _ = scope.scope(dir.bills.as_slice());
                let _ = scope.scope(dir.users.as_slice());
                prop_assert_eq!(dir, before);
            }

            #[test]
            fn platform_scope_is_identity(org in "[a-z]{0,6}") {
                let dir = seed::demo_directory();
                let scope = AccessScope::resolve(&Session::new("u", "x", Role::Platform, org), &dir);
                prop_assert_eq!(scope.scope(dir.stations.as_slice()), dir.stations.to_vec());
                prop_assert_eq!(scope.scope(dir.reports.as_slice()), dir.reports.to_vec());
            }
        }
    }
}
