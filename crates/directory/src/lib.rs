//! Entity directory for the logistics network (in-memory, seeded).
//!
//! Holds the full, unfiltered collections the console reads and writes. No IO,
//! no authorization: scoping lives in `relaydesk-access`.

pub mod audit;
pub mod collection;
pub mod directory;
pub mod finance;
pub mod organization;
pub mod parcel;
pub mod report;
pub mod seed;
pub mod station;
pub mod system_user;
pub mod ticket;

pub use audit::{AuditDecision, AuditStatus, PartnerAudit, PropertyAudit, StationAudit};
pub use collection::{Collection, Upsert};
pub use directory::Directory;
pub use finance::{BillStatus, RevenueBill, SplitConfig, SplitTarget};
pub use organization::{ActivationStatus, Partner, PropertyCompany, ServiceProvider};
pub use parcel::Parcel;
pub use report::{ReportData, ReportSubject};
pub use station::Station;
pub use system_user::SystemUser;
pub use ticket::{Ticket, TicketKind, TicketStatus};
