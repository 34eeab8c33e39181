//! Mutation advisor.
//!
//! Combines the role policy with the access scope. A refusal is returned as an
//! [`AuthzError`] and also reported to the notification sink as a warning; the
//! caller must not apply the mutation.

use relaydesk_auth::{Action, AuthzError, EntityKind, Permission, Session, authorize};
use relaydesk_core::{Entity, NotificationSink, OrgKind, Severity};

use crate::{AccessScope, Scoped};

/// Title of the warning emitted for a refused mutation.
pub const REFUSED_TITLE: &str = "权限不足";

/// Advise creating `target`, after its owner fields have been stamped.
pub fn advise_create<E, S>(
    session: &Session,
    scope: &AccessScope,
    target: &E,
    sink: &mut S,
) -> Result<(), AuthzError>
where
    E: Scoped,
    S: NotificationSink + ?Sized,
{
    advise_placement(session, scope, Action::Create, target, sink)
}

/// Advise writing `target` as submitted: the role must hold the permission
/// and the owner fields must name organizations the session owns. Used for
/// new records and for the new version of an edited one.
pub fn advise_placement<E, S>(
    session: &Session,
    scope: &AccessScope,
    action: Action,
    target: &E,
    sink: &mut S,
) -> Result<(), AuthzError>
where
    E: Scoped,
    S: NotificationSink + ?Sized,
{
    let required = Permission::new(E::KIND, action);
    let outcome = authorize(session, &required).and_then(|()| {
        if target.placed_in(scope) {
            Ok(())
        } else {
            Err(out_of_scope(session, required, target.id().to_string()))
        }
    });
    outcome.inspect_err(|err| refuse(session, err, sink))
}

/// Advise `action` on an existing record: the role must hold the permission
/// and the record must be inside the session's scope.
pub fn advise<E, S>(
    session: &Session,
    scope: &AccessScope,
    action: Action,
    target: &E,
    sink: &mut S,
) -> Result<(), AuthzError>
where
    E: Scoped,
    S: NotificationSink + ?Sized,
{
    let required = Permission::new(E::KIND, action);
    let outcome = authorize(session, &required).and_then(|()| {
        if target.visible_in(scope) {
            Ok(())
        } else {
            Err(out_of_scope(session, required, target.id().to_string()))
        }
    });
    outcome.inspect_err(|err| refuse(session, err, sink))
}

/// Advise `action` on the organization of `kind` named `name`, for mutations
/// addressed by name rather than by record.
pub fn advise_organization<S>(
    session: &Session,
    scope: &AccessScope,
    action: Action,
    kind: OrgKind,
    name: &str,
    sink: &mut S,
) -> Result<(), AuthzError>
where
    S: NotificationSink + ?Sized,
{
    let required = Permission::new(organization_kind(kind), action);
    let outcome = authorize(session, &required).and_then(|()| {
        if scope.owns(kind, name) {
            Ok(())
        } else {
            Err(out_of_scope(session, required, name.to_string()))
        }
    });
    outcome.inspect_err(|err| refuse(session, err, sink))
}

fn out_of_scope(session: &Session, permission: Permission, record: String) -> AuthzError {
    AuthzError::OutOfScope {
        permission,
        record,
        organization: session.organization_name().to_string(),
    }
}

fn organization_kind(kind: OrgKind) -> EntityKind {
    match kind {
        OrgKind::Provider => EntityKind::Provider,
        OrgKind::Partner => EntityKind::Partner,
        OrgKind::Property => EntityKind::Property,
        OrgKind::Station => EntityKind::Station,
    }
}

fn refuse<S>(session: &Session, err: &AuthzError, sink: &mut S)
where
    S: NotificationSink + ?Sized,
{
    let permission = err.permission();
    tracing::warn!(
        role = session.role().as_str(),
        organization = session.organization_name(),
        permission = %permission,
        error = %err,
        "mutation refused"
    );

    let message = match err {
        AuthzError::Forbidden { .. } => format!(
            "{}无权{}{}",
            session.role().label(),
            action_label(permission.action),
            permission.kind.label()
        ),
        AuthzError::OutOfScope { record, .. } => {
            format!("{} {} 不在当前账号的管理范围内", permission.kind.label(), record)
        }
    };
    sink.notify(REFUSED_TITLE, &message, Severity::Warning);
}

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Create => "新增",
        Action::Edit => "编辑",
        Action::Delete => "删除",
        Action::Review => "审核",
    }
}
