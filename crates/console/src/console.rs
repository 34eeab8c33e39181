//! The console facade: one logged-in operator over an in-memory directory.

use relaydesk_access::{AccessScope, advise, advise_create, advise_organization, advise_placement};
use relaydesk_auth::{Action, Credentials, IdentityError, IdentityProvider, Role, Session, is_read_only};
use relaydesk_core::{DomainError, Entity, EntityId, OrgKind, Severity, require_text};
use relaydesk_directory::{AuditDecision, Directory, Parcel, SystemUser, Ticket, Upsert, seed};
use relaydesk_navigation::{MenuNode, Navigator, RouteState, menu_tree, sidebar};

use crate::search::{SearchResult, search};
use crate::store::{Reviewable, Stored};
use crate::{ConsoleConfig, ConsoleError, NotificationCenter};

#[derive(Debug, Clone)]
struct ActiveSession {
    session: Session,
    navigator: Navigator,
}

/// Console state for a single operator.
///
/// Every mutation goes through the same path: advise (policy, then scope),
/// stamp owner fields on creates, validate, apply last-writer-wins, notify.
/// A refused or invalid mutation leaves the directory untouched.
#[derive(Debug)]
pub struct Console {
    config: ConsoleConfig,
    identity: IdentityProvider,
    directory: Directory,
    notifications: NotificationCenter,
    active: Option<ActiveSession>,
}

impl Console {
    pub fn new(config: ConsoleConfig, directory: Directory) -> Self {
        let identity = IdentityProvider::new(config.demo_password.clone());
        Self {
            config,
            identity,
            directory,
            notifications: NotificationCenter::new(),
            active: None,
        }
    }

    /// A console over the seeded demo directory.
    pub fn demo(config: ConsoleConfig) -> Self {
        Self::new(config, seed::demo_directory())
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// The full, unscoped directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    // ── session ────────────────────────────────────────────────────────────

    /// Log in, replacing any current session.
    pub fn login(&mut self, username: &str, password: &str, role: Role) -> Result<&Session, ConsoleError> {
        let session = self.identity.login(
            Credentials { username, password },
            role,
            self.directory.users.as_slice(),
        )?;
        let navigator = Navigator::new(session.role(), self.config.home_route.clone());
        let active = self.active.insert(ActiveSession { session, navigator });
        Ok(&active.session)
    }

    /// End the session. Returns the session that was active, if any.
    pub fn logout(&mut self) -> Option<Session> {
        let ended = self.active.take().map(|a| a.session);
        if let Some(session) = &ended {
            tracing::info!(user = session.user_name(), role = session.role().as_str(), "logout");
        }
        ended
    }

    pub fn session(&self) -> Result<&Session, ConsoleError> {
        self.active().map(|a| &a.session)
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    fn active(&self) -> Result<&ActiveSession, ConsoleError> {
        self.active.as_ref().ok_or(ConsoleError::NotLoggedIn)
    }

    fn active_mut(&mut self) -> Result<&mut ActiveSession, ConsoleError> {
        self.active.as_mut().ok_or(ConsoleError::NotLoggedIn)
    }

    /// Change the logged-in user's password and end the session.
    ///
    /// Only registered users have a stored password; demo sessions get
    /// `NotFound`.
    pub fn change_password(&mut self, current: &str, new: &str, confirm: &str) -> Result<(), ConsoleError> {
        let user_id = self.session()?.user_id().clone();

        let result = self.store_password(&user_id, current, new, confirm);

        match result {
            Ok(()) => {
                tracing::info!(user = %user_id, "password changed");
                self.notifications.add("修改成功", "密码修改成功，请重新登录", Severity::Success);
                self.logout();
                Ok(())
            }
            Err(err) => {
                self.notifications.add("修改失败", &err.to_string(), Severity::Error);
                Err(err)
            }
        }
    }

    fn store_password(
        &mut self,
        user_id: &EntityId,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<(), ConsoleError> {
        require_text(new, "new password")?;
        if new != confirm {
            return Err(DomainError::validation("两次输入的新密码不一致").into());
        }
        let default_password = self.identity.default_password();
        let user = self
            .directory
            .users
            .get_mut(user_id)
            .ok_or_else(|| DomainError::not_found(format!("system user {user_id}")))?;
        if user.password.as_deref().unwrap_or(default_password) != current {
            return Err(IdentityError::InvalidCredentials.into());
        }
        user.password = Some(new.to_string());
        Ok(())
    }

    // ── navigation ─────────────────────────────────────────────────────────

    pub fn navigate(&mut self, route: &str) -> Result<RouteState, ConsoleError> {
        Ok(self.active_mut()?.navigator.navigate(route).clone())
    }

    /// The route state in effect, with no selection resolved to home.
    pub fn route_state(&self) -> Result<RouteState, ConsoleError> {
        Ok(self.active()?.navigator.effective())
    }

    pub fn sidebar(&self) -> Result<Vec<MenuNode>, ConsoleError> {
        Ok(sidebar(self.session()?.role(), menu_tree()))
    }

    // ── reads ──────────────────────────────────────────────────────────────

    /// The session's scope over the current directory. Resolved on every call
    /// so creates and renames are picked up immediately.
    pub fn access_scope(&self) -> Result<AccessScope, ConsoleError> {
        Ok(AccessScope::resolve(self.session()?, &self.directory))
    }

    /// The records of type `E` the session may see, in stored order.
    pub fn visible<E: Stored>(&self) -> Result<Vec<E>, ConsoleError> {
        let scope = self.access_scope()?;
        Ok(scope.scope(E::collection(&self.directory).as_slice()))
    }

    /// Parcels moved out of the live list, scoped like live parcels.
    pub fn archived_parcels(&self) -> Result<Vec<Parcel>, ConsoleError> {
        let scope = self.access_scope()?;
        Ok(scope.scope(self.directory.archived_parcels.as_slice()))
    }

    /// Whether detail forms for `E` open read-only.
    pub fn is_read_only<E: Stored>(&self) -> Result<bool, ConsoleError> {
        Ok(is_read_only(self.session()?.role(), E::KIND))
    }

    pub fn search(&self, term: &str) -> Result<Vec<SearchResult>, ConsoleError> {
        let scope = self.access_scope()?;
        Ok(search(term, &scope, &self.directory, menu_tree()))
    }

    // ── mutations ──────────────────────────────────────────────────────────

    /// Create or replace `record`.
    ///
    /// An id already present is an edit: the stored version must be in scope
    /// and the submitted one placed under an owned organization. A new id is
    /// a create: it is stamped with the session's organization first, then
    /// placed the same way.
    pub fn save<E: Stored>(&mut self, mut record: E) -> Result<Upsert, ConsoleError> {
        let session = self.session()?.clone();
        let scope = AccessScope::resolve(&session, &self.directory);
        let label = E::KIND.label();

        match E::collection(&self.directory).get(record.id()) {
            Some(current) => {
                advise(&session, &scope, Action::Edit, current, &mut self.notifications)?;
                advise_placement(&session, &scope, Action::Edit, &record, &mut self.notifications)?;
            }
            None => {
                record.stamp_owner(&session);
                advise_create(&session, &scope, &record, &mut self.notifications)?;
            }
        }

        if let Err(err) = Stored::validate(&record) {
            self.notifications.add("保存失败", &err.to_string(), Severity::Error);
            return Err(err.into());
        }

        let id = record.id().clone();
        let outcome = E::collection_mut(&mut self.directory).upsert(record);
        tracing::info!(kind = E::KIND.as_str(), id = %id, ?outcome, "record saved");
        match outcome {
            Upsert::Inserted => {
                self.notifications.add("添加成功", &format!("新{label}已添加"), Severity::Success)
            }
            Upsert::Replaced => {
                self.notifications.add("保存成功", &format!("{label}信息已更新"), Severity::Success)
            }
        };
        Ok(outcome)
    }

    pub fn delete<E: Stored>(&mut self, id: &EntityId) -> Result<E, ConsoleError> {
        let session = self.session()?.clone();
        let scope = AccessScope::resolve(&session, &self.directory);
        let current = E::collection(&self.directory)
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("{} {id}", E::KIND.as_str())))?;
        advise(&session, &scope, Action::Delete, current, &mut self.notifications)?;

        let removed = E::collection_mut(&mut self.directory)
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("{} {id}", E::KIND.as_str())))?;
        tracing::info!(kind = E::KIND.as_str(), id = %id, "record deleted");
        self.notifications
            .add("删除成功", &format!("{}已删除", E::KIND.label()), Severity::Info);
        Ok(removed)
    }

    /// Approve or reject a pending onboarding application.
    pub fn review<E: Reviewable>(&mut self, id: &EntityId, decision: AuditDecision) -> Result<(), ConsoleError> {
        let session = self.session()?.clone();
        let scope = AccessScope::resolve(&session, &self.directory);
        let current = E::collection(&self.directory)
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("{} {id}", E::KIND.as_str())))?;
        advise(&session, &scope, Action::Review, current, &mut self.notifications)?;

        let applied = E::collection_mut(&mut self.directory)
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("{} {id}", E::KIND.as_str())))
            .and_then(|record| record.apply_decision(decision));
        if let Err(err) = applied {
            self.notifications.add("审核失败", &err.to_string(), Severity::Error);
            return Err(err.into());
        }

        tracing::info!(kind = E::KIND.as_str(), id = %id, ?decision, "application reviewed");
        match decision {
            AuditDecision::Approve => self.notifications.add("审核通过", "申请已批准", Severity::Success),
            AuditDecision::Reject => self.notifications.add("审核驳回", "申请已驳回", Severity::Warning),
        };
        Ok(())
    }

    /// Mark a pending ticket resolved, handled by the current user.
    pub fn resolve_ticket(&mut self, id: &EntityId) -> Result<(), ConsoleError> {
        let session = self.session()?.clone();
        let scope = AccessScope::resolve(&session, &self.directory);
        let current = self
            .directory
            .tickets
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("ticket {id}")))?;
        advise(&session, &scope, Action::Edit, current, &mut self.notifications)?;

        let resolved = self
            .directory
            .tickets
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("ticket {id}")))
            .and_then(|ticket: &mut Ticket| ticket.resolve(session.user_name()));
        if let Err(err) = resolved {
            self.notifications.add("处理失败", &err.to_string(), Severity::Error);
            return Err(err.into());
        }
        tracing::info!(id = %id, handler = session.user_name(), "ticket resolved");
        self.notifications.add("处理成功", "工单已处理", Severity::Success);
        Ok(())
    }

    /// Rename an organization and rewrite every record that references it.
    ///
    /// Only accounts whose role belongs to an organization of `kind` follow
    /// the rename. The session is not updated: a provider renaming itself
    /// keeps its old organization name until it logs in again.
    pub fn rename_organization(&mut self, kind: OrgKind, from: &str, to: &str) -> Result<usize, ConsoleError> {
        let session = self.session()?.clone();
        let scope = AccessScope::resolve(&session, &self.directory);
        advise_organization(&session, &scope, Action::Edit, kind, from, &mut self.notifications)?;

        let is_member = |user: &SystemUser| Role::from_role_name(&user.role_name).org_kind() == Some(kind);
        let renamed = require_text(to, "name")
            .and_then(|()| self.directory.rename_organization(kind, from, to, is_member));
        match renamed {
            Ok(rewritten) => {
                self.notifications.add("保存成功", &format!("名称已更新为 {to}"), Severity::Success);
                Ok(rewritten)
            }
            Err(err) => {
                self.notifications.add("保存失败", &err.to_string(), Severity::Error);
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaydesk_directory::{Partner, Station};

    fn console(role: Role) -> Console {
        let mut console = Console::demo(ConsoleConfig::default());
        console.login("admin", "123456a", role).unwrap();
        console
    }

    #[test]
    fn operations_require_a_session() {
        let mut console = Console::demo(ConsoleConfig::default());
        assert_eq!(console.visible::<Station>().unwrap_err(), ConsoleError::NotLoggedIn);
        assert_eq!(console.navigate("station").unwrap_err(), ConsoleError::NotLoggedIn);
        assert!(console.search("x").is_err());
    }

    #[test]
    fn login_failure_keeps_the_console_logged_out() {
        let mut console = Console::demo(ConsoleConfig::default());
        let err = console.login("admin", "wrong", Role::Platform).unwrap_err();
        assert_eq!(err, ConsoleError::Identity(IdentityError::InvalidCredentials));
        assert!(!console.is_logged_in());
    }

    #[test]
    fn configured_demo_password_is_used() {
        let config = ConsoleConfig {
            demo_password: "letmein".to_string(),
            ..ConsoleConfig::default()
        };
        let mut console = Console::demo(config);
        assert!(console.login("nobody", "123456a", Role::Partner).is_err());
        assert!(console.login("nobody", "letmein", Role::Partner).is_ok());
    }

    #[test]
    fn edit_cannot_move_a_record_out_of_scope() {
        let mut console = console(Role::Provider);
        let mut partner: Partner = console.visible::<Partner>().unwrap().remove(0);
        partner.provider_name = Some("翟总".to_string());

        let err = console.save(partner).unwrap_err();
        assert!(matches!(err, ConsoleError::Authz(_)));
        let stored = console.directory().partners.get(&EntityId::new("p001")).unwrap();
        assert_eq!(stored.provider_name.as_deref(), Some("深圳市快金数据"));
    }

    #[test]
    fn invalid_save_is_not_applied() {
        let mut console = console(Role::Platform);
        let mut station = console.directory().stations.as_slice()[0].clone();
        station.name = "  ".to_string();

        let err = console.save(station).unwrap_err();
        assert!(matches!(err, ConsoleError::Domain(DomainError::Validation(_))));
        assert_eq!(console.notifications().latest().unwrap().severity, Severity::Error);
        assert_eq!(console.directory().stations.as_slice()[0].name, "厚德品园上门服务");
    }

    #[test]
    fn user_created_by_partner_belongs_to_its_organization() {
        let mut console = console(Role::Partner);
        let mut user = console.directory().users.as_slice()[0].clone();
        user.id = EntityId::new("u_new");
        user.username = "partner_clerk".to_string();
        user.organization = None;

        assert_eq!(console.save(user).unwrap(), Upsert::Inserted);
        let visible = console.visible::<SystemUser>().unwrap();
        assert!(visible.iter().any(|u| u.username == "partner_clerk"));
    }

    #[test]
    fn demo_sessions_cannot_change_password() {
        let mut console = console(Role::Partner);
        let err = console.change_password("123456a", "n3w", "n3w").unwrap_err();
        assert!(matches!(err, ConsoleError::Domain(DomainError::NotFound(_))));
        assert!(console.is_logged_in());
    }

    #[test]
    fn changed_password_applies_to_the_next_login() {
        let mut console = Console::demo(ConsoleConfig::default());
        console.login("provider_01", "123456a", Role::Platform).unwrap();

        let mismatch = console.change_password("123456a", "n3w", "other").unwrap_err();
        assert!(matches!(mismatch, ConsoleError::Domain(DomainError::Validation(_))));

        console.change_password("123456a", "n3w", "n3w").unwrap();
        assert!(!console.is_logged_in());
        assert!(console.login("provider_01", "123456a", Role::Platform).is_err());
        assert_eq!(console.login("provider_01", "n3w", Role::Platform).unwrap().role(), Role::Provider);
    }
}
