//! Route dispatch and the navigation state machine.

use serde::Serialize;

use relaydesk_auth::Role;

use crate::{MenuNode, is_reachable, menu_tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSubject {
    Station,
    Partner,
    Property,
}

/// Action mode reviews applications; query mode only tracks their progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditMode {
    Action,
    Query,
}

/// The view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewKind {
    Dashboard,
    Reports,
    Providers,
    Partners,
    Properties,
    Stations,
    Audits { subject: AuditSubject, mode: AuditMode },
    Tickets,
    Parcels,
    ParcelArchive,
    Transactions,
    Bills,
    SplitSettings,
    Payments,
    HelpDocs,
    SystemRoles,
    SystemUsers,
}

/// Dispatch a route id to its view. Parent ids fall back to their default
/// child view; unknown ids and the `data` header have none.
pub fn resolve_view(route_id: &str) -> Option<ViewKind> {
    use AuditMode::{Action, Query};

    let audits = |subject, mode| ViewKind::Audits { subject, mode };
    let view = match route_id {
        "dashboard" => ViewKind::Dashboard,
        "data-reports" => ViewKind::Reports,
        "provider-list" | "provider" => ViewKind::Providers,
        "partner-list" | "partner" => ViewKind::Partners,
        "property" => ViewKind::Properties,
        "station" => ViewKind::Stations,
        "audit-station-action" => audits(AuditSubject::Station, Action),
        "audit-station-query" | "audit" => audits(AuditSubject::Station, Query),
        "audit-partner-action" => audits(AuditSubject::Partner, Action),
        "audit-partner-query" => audits(AuditSubject::Partner, Query),
        "audit-property-action" => audits(AuditSubject::Property, Action),
        "audit-property-query" => audits(AuditSubject::Property, Query),
        "ticket" => ViewKind::Tickets,
        "express-package" | "express" => ViewKind::Parcels,
        "express-archive" => ViewKind::ParcelArchive,
        "finance-trans" | "finance" => ViewKind::Transactions,
        "finance-bill" => ViewKind::Bills,
        "split-settings" => ViewKind::SplitSettings,
        "payment" => ViewKind::Payments,
        "help-docs" | "help" => ViewKind::HelpDocs,
        "system-role" | "system" => ViewKind::SystemRoles,
        "system-user" => ViewKind::SystemUsers,
        _ => return None,
    };
    Some(view)
}

/// Where the console currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RouteState {
    /// Nothing selected yet; the home route applies.
    NoRoute,
    Authorized { route: String, view: ViewKind },
    /// Not reachable for the role, or no view behind it. Rendered as a
    /// placeholder, never as an error.
    Fallback { route: String },
}

impl RouteState {
    pub fn view(&self) -> Option<ViewKind> {
        match self {
            RouteState::Authorized { view, .. } => Some(*view),
            _ => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, RouteState::Authorized { .. })
    }
}

/// Per-session navigation state. Every route change is evaluated
/// synchronously against the role.
#[derive(Debug, Clone)]
pub struct Navigator {
    role: Role,
    home: String,
    menu: &'static [MenuNode],
    state: RouteState,
}

impl Navigator {
    pub fn new(role: Role, home: impl Into<String>) -> Self {
        Self::with_menu(role, home, menu_tree())
    }

    pub fn with_menu(role: Role, home: impl Into<String>, menu: &'static [MenuNode]) -> Self {
        Self {
            role,
            home: home.into(),
            menu,
            state: RouteState::NoRoute,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Evaluate `route` for this navigator's role without changing state.
    pub fn evaluate(&self, route: &str) -> RouteState {
        if route.is_empty() {
            return RouteState::NoRoute;
        }
        match resolve_view(route) {
            Some(view) if is_reachable(self.role, route, self.menu) => RouteState::Authorized {
                route: route.to_string(),
                view,
            },
            _ => RouteState::Fallback {
                route: route.to_string(),
            },
        }
    }

    pub fn navigate(&mut self, route: &str) -> &RouteState {
        let next = self.evaluate(route);
        if let RouteState::Fallback { route } = &next {
            tracing::info!(role = self.role.as_str(), route = %route, "route not available, showing placeholder");
        }
        self.state = next;
        &self.state
    }

    /// The route in effect: the selected one, or home when nothing is.
    pub fn active_route(&self) -> &str {
        match &self.state {
            RouteState::NoRoute => &self.home,
            RouteState::Authorized { route, .. } | RouteState::Fallback { route } => route,
        }
    }

    /// The state in effect, with [`RouteState::NoRoute`] resolved to home.
    pub fn effective(&self) -> RouteState {
        match &self.state {
            RouteState::NoRoute => self.evaluate(&self.home),
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parents_fall_back_to_default_views() {
        assert_eq!(resolve_view("provider"), Some(ViewKind::Providers));
        assert_eq!(resolve_view("express"), Some(ViewKind::Parcels));
        assert_eq!(resolve_view("finance"), Some(ViewKind::Transactions));
        assert_eq!(resolve_view("system"), Some(ViewKind::SystemRoles));
        assert_eq!(
            resolve_view("audit"),
            Some(ViewKind::Audits {
                subject: AuditSubject::Station,
                mode: AuditMode::Query
            })
        );
        assert_eq!(resolve_view("help"), Some(ViewKind::HelpDocs));
        assert_eq!(resolve_view("data"), None);
        assert_eq!(resolve_view("nowhere"), None);
    }

    #[test]
    fn partner_navigating_to_provider_list_falls_back() {
        let mut nav = Navigator::new(Role::Partner, "dashboard");
        let state = nav.navigate("provider-list").clone();
        assert_eq!(
            state,
            RouteState::Fallback {
                route: "provider-list".to_string()
            }
        );
        assert_eq!(nav.active_route(), "provider-list");
        assert_eq!(state.view(), None);
    }

    #[test]
    fn no_route_resolves_to_home() {
        let nav = Navigator::new(Role::Platform, "dashboard");
        assert_eq!(nav.state(), &RouteState::NoRoute);
        assert_eq!(nav.active_route(), "dashboard");
        assert_eq!(nav.effective().view(), Some(ViewKind::Dashboard));
    }

    #[test]
    fn every_route_change_recomputes() {
        let mut nav = Navigator::new(Role::Provider, "dashboard");
        assert!(nav.navigate("partner-list").is_authorized());
        assert!(!nav.navigate("split-settings").is_authorized());
        assert!(nav.navigate("audit-property-query").is_authorized());
        nav.navigate("");
        assert_eq!(nav.state(), &RouteState::NoRoute);
    }

    #[test]
    fn header_without_view_is_a_fallback_even_when_reachable() {
        let mut nav = Navigator::new(Role::Platform, "dashboard");
        assert!(matches!(nav.navigate("data"), RouteState::Fallback { .. }));
    }

    #[test]
    fn courier_home_is_a_placeholder() {
        let nav = Navigator::new(Role::Courier, "dashboard");
        assert!(matches!(nav.effective(), RouteState::Fallback { .. }));
    }

    #[test]
    fn state_serializes_with_a_tag() {
        let state = RouteState::Authorized {
            route: "station".to_string(),
            view: ViewKind::Stations,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "authorized");
        assert_eq!(json["view"]["view"], "stations");
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

        #[test]
        fn authorized_iff_reachable_and_routable(
            role in prop::sample::select(Role::ALL.to_vec()),
            route in prop::sample::select(vec![
                "dashboard", "data", "data-reports", "provider", "provider-list", "partner",
                "partner-list", "property", "station", "audit", "audit-station-action",
                "audit-partner-query", "ticket", "express", "express-archive", "finance",
                "finance-bill", "split-settings", "payment", "help", "system-user", "bogus",
            ]),
        ) {
            let nav = Navigator::new(role, "dashboard");
            let expected = is_reachable(role, route, menu_tree()) && resolve_view(route).is_some();
            prop_assert_eq!(nav.evaluate(route).is_authorized(), expected);
        }
    }
}
