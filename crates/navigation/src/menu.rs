//! Menu tree model and role filtering.

use serde::Serialize;

use relaydesk_auth::Role;

/// One entry of the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    pub allowed_roles: Vec<Role>,
    /// Clicking the node dispatches to a view. Leaves are always routable;
    /// a parent is routable when it has a default child view.
    pub routable: bool,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, roles: &[Role]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            allowed_roles: roles.to_vec(),
            routable: true,
            children: Vec::new(),
        }
    }

    pub fn branch(
        id: impl Into<String>,
        label: impl Into<String>,
        roles: &[Role],
        routable: bool,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            allowed_roles: roles.to_vec(),
            routable,
            children,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

/// Keep exactly the nodes whose `allowed_roles` contain `role`.
///
/// Children are filtered independently of their parent's outcome, but a
/// dropped parent takes its subtree with it. A kept parent may end up with no
/// children; see [`sidebar`] for the presentation variant.
pub fn filter_tree(role: Role, nodes: &[MenuNode]) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter(|n| n.allows(role))
        .map(|n| MenuNode {
            children: filter_tree(role, &n.children),
            ..n.clone()
        })
        .collect()
}

/// Whether any node with id `route_id` anywhere in the unfiltered tree allows
/// `role`.
pub fn is_reachable(role: Role, route_id: &str, nodes: &[MenuNode]) -> bool {
    nodes
        .iter()
        .any(|n| (n.id == route_id && n.allows(role)) || is_reachable(role, route_id, &n.children))
}

/// First node with id `route_id`, depth-first.
pub fn find_node<'a>(route_id: &str, nodes: &'a [MenuNode]) -> Option<&'a MenuNode> {
    nodes.iter().find_map(|n| {
        if n.id == route_id {
            Some(n)
        } else {
            find_node(route_id, &n.children)
        }
    })
}

/// The role's sidebar: [`filter_tree`] with inert headers removed.
///
/// A header is inert when it is not routable and none of its children
/// survive.
pub fn sidebar(role: Role, nodes: &[MenuNode]) -> Vec<MenuNode> {
    fn elide(nodes: Vec<MenuNode>) -> Vec<MenuNode> {
        nodes
            .into_iter()
            .filter_map(|mut n| {
                n.children = elide(n.children);
                (n.routable || !n.children.is_empty()).then_some(n)
            })
            .collect()
    }
    elide(filter_tree(role, nodes))
}

/// A menu entry matched by [`search_menu`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMatch {
    pub id: String,
    pub label: String,
    /// Label of the enclosing top-level entry, for child matches.
    pub parent_label: Option<String>,
}

/// Case-insensitive label search over the top level and the first level of
/// children visible to `role`. Children of hidden parents are never matched.
pub fn search_menu(role: Role, term: &str, nodes: &[MenuNode]) -> Vec<MenuMatch> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for item in nodes.iter().filter(|n| n.allows(role)) {
        if item.label.to_lowercase().contains(&term) {
            out.push(MenuMatch {
                id: item.id.clone(),
                label: item.label.clone(),
                parent_label: None,
            });
        }
        for child in item.children.iter().filter(|c| c.allows(role)) {
            if child.label.to_lowercase().contains(&term) {
                out.push(MenuMatch {
                    id: child.id.clone(),
                    label: child.label.clone(),
                    parent_label: Some(item.label.clone()),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::leaf("home", "Home", &[Role::Platform, Role::Partner]),
            MenuNode::branch(
                "reports",
                "Reports",
                &[Role::Platform, Role::Partner],
                false,
                vec![MenuNode::leaf("reports-daily", "Daily reports", &[Role::Platform])],
            ),
            MenuNode::branch(
                "admin",
                "Admin",
                &[Role::Platform],
                true,
                vec![MenuNode::leaf("admin-users", "Users", &[Role::Platform, Role::Partner])],
            ),
        ]
    }

    #[test]
    fn filter_keeps_empty_parents() {
        let filtered = filter_tree(Role::Partner, &tree());
        let ids: Vec<_> = filtered.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "reports"]);
        assert!(filtered[1].children.is_empty());
    }

    #[test]
    fn sidebar_drops_inert_headers() {
        let bar = sidebar(Role::Partner, &tree());
        let ids: Vec<_> = bar.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["home"]);
    }

    #[test]
    fn reachability_ignores_parent_filtering() {
        // The child allows Partner even though its parent does not.
        assert!(is_reachable(Role::Partner, "admin-users", &tree()));
        assert!(!is_reachable(Role::Partner, "admin", &tree()));
        assert!(!is_reachable(Role::Platform, "missing", &tree()));
    }

    #[test]
    fn find_node_descends() {
        assert_eq!(find_node("reports-daily", &tree()).map(|n| n.label.as_str()), Some("Daily reports"));
        assert!(find_node("nope", &tree()).is_none());
    }

    #[test]
    fn search_is_case_insensitive_and_role_aware() {
        let hits = search_menu(Role::Platform, "REPORT", &tree());
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].parent_label.as_deref(), Some("Reports"));

        assert!(search_menu(Role::Partner, "daily", &tree()).is_empty());
        // Hidden parent hides the child even if the child allows the role.
        assert!(search_menu(Role::Partner, "users", &tree()).is_empty());
        assert!(search_menu(Role::Platform, "  ", &tree()).is_empty());
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_tree() -> impl Strategy<Value = Vec<MenuNode>> {
        let leaf = (0u8..12, prop::sample::subsequence(Role::ALL.to_vec(), 0..=6))
            .prop_map(|(n, roles)| MenuNode::leaf(format!("n{n}"), format!("N{n}"), &roles));
        let node = leaf.prop_recursive(3, 32, 4, |inner| {
            (
                0u8..12,
                prop::sample::subsequence(Role::ALL.to_vec(), 0..=6),
                any::<bool>(),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(n, roles, routable, children)| {
                    MenuNode::branch(format!("b{n}"), format!("B{n}"), &roles, routable, children)
                })
        });
        prop::collection::vec(node, 0..6)
    }

    fn all_allow(role: Role, nodes: &[MenuNode]) -> bool {
        nodes.iter().all(|n| n.allows(role) && all_allow(role, &n.children))
    }

    fn count(nodes: &[MenuNode]) -> usize {
        nodes.iter().map(|n| 1 + count(&n.children)).sum()
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

        #[test]
        fn filtered_nodes_all_allow_the_role(role in any_role(), nodes in any_tree()) {
            let filtered = filter_tree(role, &nodes);
            prop_assert!(all_allow(role, &filtered));
            prop_assert!(count(&filtered) <= count(&nodes));
        }

        #[test]
        fn filter_keeps_every_allowed_top_level_node(role in any_role(), nodes in any_tree()) {
            let filtered = filter_tree(role, &nodes);
            let expected: Vec<_> = nodes.iter().filter(|n| n.allows(role)).map(|n| n.id.clone()).collect();
            let actual: Vec<_> = filtered.iter().map(|n| n.id.clone()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn filter_is_idempotent(role in any_role(), nodes in any_tree()) {
            let once = filter_tree(role, &nodes);
            prop_assert_eq!(filter_tree(role, &once), once);
        }

        #[test]
        fn reachable_iff_some_node_allows(role in any_role(), nodes in any_tree(), n in 0u8..12) {
            let mut flat = Vec::new();
            let mut stack: Vec<&MenuNode> = nodes.iter().collect();
            while let Some(x) = stack.pop() {
                flat.push((x.id.clone(), x.allows(role)));
                stack.extend(x.children.iter());
            }
            for id in [format!("n{n}"), format!("b{n}")] {
                let expected = flat.iter().any(|(i, allowed)| *i == id && *allowed);
                prop_assert_eq!(is_reachable(role, &id, &nodes), expected);
            }
        }

        #[test]
        fn sidebar_is_a_subset_of_the_filtered_tree(role in any_role(), nodes in any_tree()) {
            let bar = sidebar(role, &nodes);
            prop_assert!(all_allow(role, &bar));
            prop_assert!(count(&bar) <= count(&filter_tree(role, &nodes)));
        }
    }
}
