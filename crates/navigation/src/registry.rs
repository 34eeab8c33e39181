//! The console's menu, built once per process.

use once_cell::sync::Lazy;

use relaydesk_auth::Role::{self, Partner, Platform, Property, Provider, Station};

use crate::MenuNode;

const REPORTING: &[Role] = &[Platform, Provider, Partner, Property];
const OPERATORS: &[Role] = &[Platform, Provider, Partner];

/// Process-wide menu tree. Read-only after first use.
pub static MENU: Lazy<Vec<MenuNode>> = Lazy::new(build);

pub fn menu_tree() -> &'static [MenuNode] {
    MENU.as_slice()
}

fn build() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("dashboard", "首页", &[Platform, Provider, Partner, Property, Station]),
        MenuNode::branch(
            "data",
            "数据报表",
            REPORTING,
            false,
            vec![MenuNode::leaf("data-reports", "报表", REPORTING)],
        ),
        MenuNode::branch(
            "provider",
            "服务商管理",
            &[Platform],
            true,
            vec![MenuNode::leaf("provider-list", "服务商列表", &[Platform])],
        ),
        MenuNode::branch(
            "partner",
            "合伙人管理",
            &[Platform, Provider],
            true,
            vec![MenuNode::leaf("partner-list", "合伙人列表", &[Platform, Provider])],
        ),
        MenuNode::leaf("property", "物业公司管理", &[Platform, Provider]),
        MenuNode::leaf("station", "服务站管理", REPORTING),
        MenuNode::branch(
            "audit",
            "审核管理",
            &[Platform, Provider, Partner, Station],
            true,
            vec![
                MenuNode::leaf("audit-station-action", "服务站审核", &[Platform, Provider]),
                MenuNode::leaf("audit-station-query", "服务站审核进度查询", &[Partner]),
                MenuNode::leaf("audit-partner-action", "合伙人审核", &[Platform]),
                MenuNode::leaf("audit-partner-query", "合伙人审核进度查询", &[Provider]),
                MenuNode::leaf("audit-property-action", "物业公司审核", &[Platform]),
                MenuNode::leaf("audit-property-query", "物业公司审核进度查询", &[Provider]),
            ],
        ),
        MenuNode::leaf("ticket", "工单管理", OPERATORS),
        MenuNode::branch(
            "express",
            "快递管理",
            REPORTING,
            true,
            vec![
                MenuNode::leaf("express-package", "包裹管理", REPORTING),
                MenuNode::leaf("express-archive", "归档管理", REPORTING),
            ],
        ),
        MenuNode::branch(
            "finance",
            "财务管理",
            REPORTING,
            true,
            vec![
                MenuNode::leaf("finance-trans", "交易明细", OPERATORS),
                MenuNode::leaf("finance-bill", "收益账单", REPORTING),
                MenuNode::leaf("split-settings", "分账设置", &[Platform]),
            ],
        ),
        MenuNode::leaf("payment", "支付管理", OPERATORS),
        MenuNode::branch(
            "help",
            "帮助中心",
            &[Platform, Provider, Partner, Station, Property],
            true,
            vec![MenuNode::leaf(
                "help-docs",
                "帮助文档",
                &[Platform, Provider, Partner, Station, Property],
            )],
        ),
        MenuNode::branch(
            "system",
            "系统管理",
            OPERATORS,
            true,
            vec![
                MenuNode::leaf("system-role", "角色管理", OPERATORS),
                MenuNode::leaf("system-user", "用户管理", OPERATORS),
            ],
        ),
    ]
}

/// Roles that never appear in any menu entry.
pub fn roles_without_menu() -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|r| crate::menu::filter_tree(*r, menu_tree()).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter_tree, is_reachable, sidebar};

    fn ids(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn menu_ids_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        let mut stack: Vec<&MenuNode> = menu_tree().iter().collect();
        while let Some(n) = stack.pop() {
            assert!(seen.insert(n.id.as_str()), "duplicate menu id {}", n.id);
            stack.extend(n.children.iter());
        }
    }

    #[test]
    fn platform_sees_the_whole_menu() {
        assert_eq!(filter_tree(Platform, menu_tree()), menu_tree().to_vec());
    }

    #[test]
    fn partner_never_sees_provider_management() {
        assert!(!is_reachable(Partner, "provider-list", menu_tree()));
        assert!(!is_reachable(Partner, "provider", menu_tree()));
        let bar = sidebar(Partner, menu_tree());
        assert!(!ids(&bar).contains(&"provider"));
        assert!(is_reachable(Partner, "audit-station-query", menu_tree()));
    }

    #[test]
    fn station_sidebar() {
        let bar = sidebar(Station, menu_tree());
        assert_eq!(ids(&bar), vec!["dashboard", "audit", "help"]);
        // The audit parent has a default view even with no child for stations.
        assert!(bar[1].children.is_empty());
    }

    #[test]
    fn property_sidebar_keeps_reports_header() {
        let bar = sidebar(Property, menu_tree());
        assert_eq!(
            ids(&bar),
            vec!["dashboard", "data", "station", "express", "finance", "help"]
        );
        let finance = &bar[4];
        assert_eq!(ids(&finance.children), vec!["finance-bill"]);
    }

    #[test]
    fn couriers_have_no_menu() {
        assert_eq!(roles_without_menu(), vec![Role::Courier]);
        assert!(sidebar(Role::Courier, menu_tree()).is_empty());
    }

    #[test]
    fn menu_serializes_with_camel_case_roles() {
        let json = serde_json::to_value(&menu_tree()[0]).unwrap();
        assert_eq!(json["allowedRoles"][0], "PLATFORM");
        assert_eq!(json["routable"], true);
    }
}
