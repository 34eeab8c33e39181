//! `relaydesk-console`: the console core behind the admin UI.
//!
//! Wires identity, scoping, navigation and the directory together behind a
//! single [`Console`] value, plus the ambient pieces the UI needs
//! (configuration, notifications, global search).

pub mod config;
pub mod console;
pub mod error;
pub mod notifications;
pub mod search;
pub mod store;

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::ConsoleError;
pub use notifications::{Notification, NotificationCenter};
pub use search::{SearchKind, SearchResult};
pub use store::{Reviewable, Stored};
