//! Global search across menu entries and scoped records.

use serde::Serialize;

use relaydesk_access::AccessScope;
use relaydesk_auth::Role;
use relaydesk_directory::Directory;
use relaydesk_navigation::{MenuNode, search_menu};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Menu,
    Parcel,
    Station,
    Partner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Route to open when the result is picked.
    pub link: String,
}

/// Case-insensitive substring search. Records only come from the scope, so a
/// role never finds what its lists would not show. Partners are searched for
/// the platform and providers only.
pub fn search(
    term: &str,
    scope: &AccessScope,
    directory: &Directory,
    menu: &[MenuNode],
) -> Vec<SearchResult> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let hit = |value: &str| value.to_lowercase().contains(&needle);

    let mut results: Vec<SearchResult> = search_menu(scope.role(), &needle, menu)
        .into_iter()
        .map(|m| SearchResult {
            kind: SearchKind::Menu,
            subtitle: match &m.parent_label {
                Some(parent) => format!("功能菜单 > {parent}"),
                None => "功能菜单".to_string(),
            },
            link: m.id.clone(),
            id: m.id,
            title: m.label,
        })
        .collect();

    results.extend(
        scope
            .visible(directory.parcels.as_slice())
            .filter(|p| hit(p.id.as_str()) || hit(&p.pickup_code))
            .map(|p| SearchResult {
                kind: SearchKind::Parcel,
                id: p.id.to_string(),
                title: format!("运单号: {}", p.id),
                subtitle: format!("取件码: {} | 状态: {}", p.pickup_code, p.status),
                link: "express-package".to_string(),
            }),
    );

    results.extend(
        scope
            .visible(directory.stations.as_slice())
            .filter(|s| hit(&s.name) || hit(&s.account))
            .map(|s| SearchResult {
                kind: SearchKind::Station,
                id: s.id.to_string(),
                title: s.name.clone(),
                subtitle: format!("账号: {} | 区域: {}", s.account, s.region),
                link: "station".to_string(),
            }),
    );

    if matches!(scope.role(), Role::Platform | Role::Provider) {
        results.extend(
            scope
                .visible(directory.partners.as_slice())
                .filter(|p| hit(&p.name) || hit(&p.contact_person))
                .map(|p| SearchResult {
                    kind: SearchKind::Partner,
                    id: p.id.to_string(),
                    title: p.name.clone(),
                    subtitle: format!("负责人: {} | 电话: {}", p.contact_person, p.phone),
                    link: "partner-list".to_string(),
                }),
        );
    }

    tracing::debug!(role = scope.role().as_str(), term, results = results.len(), "search");
    results
}
