//! Entity structs for all Marquee domain objects.
//!
//! Each entity maps to a table in the libSQL database, except the snapshot
//! types which describe the layer-2 backup document. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip.

mod audit;
mod schedule;
mod snapshot;
mod template;

pub use audit::AuditEntry;
pub use schedule::{DaySchedule, ScheduleEntry};
pub use snapshot::{BoardSlot, Snapshot, SnapshotDay};
pub use template::Template;
