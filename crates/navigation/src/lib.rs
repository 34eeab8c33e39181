//! `relaydesk-navigation`: the role-tagged menu tree and route dispatch.
//!
//! The tree is static and shared ([`registry::menu_tree`]). Filtering and
//! reachability work on any tree so they can be tested independently of it.

pub mod menu;
pub mod registry;
pub mod router;

pub use menu::{MenuMatch, MenuNode, filter_tree, find_node, is_reachable, search_menu, sidebar};
pub use registry::{MENU, menu_tree};
pub use router::{AuditMode, AuditSubject, Navigator, RouteState, ViewKind, resolve_view};
