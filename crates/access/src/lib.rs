//! `relaydesk-access`: who may see which records, and whether a mutation is
//! advised.
//!
//! - [`scope`]: the access scope resolver (pure filtering by organization name)
//! - [`advisor`]: mutation policy plus scope check, reporting refusals to a
//!   notification sink

pub mod advisor;
pub mod scope;

pub use advisor::{REFUSED_TITLE, advise, advise_create, advise_organization, advise_placement};
pub use scope::{AccessScope, Scoped};
