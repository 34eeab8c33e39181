//! `relaydesk-core`: shared building blocks for the console core.
//!
//! Pure primitives only: identifiers, the domain error model, the `Entity`
//! contract and the notification sink seam.

pub mod entity;
pub mod error;
pub mod id;
pub mod notify;

pub use entity::{Entity, OrgKind};
pub use error::{DomainError, DomainResult, require_text};
pub use id::{EntityId, NotificationId, SessionId};
pub use notify::{NotificationSink, Severity, TracingSink};
