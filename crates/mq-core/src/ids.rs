//! ID prefix constants.
//!
//! Every row gets a `prefix-8hex` ID generated by the database layer
//! (e.g., `sch-a3f8b2c1`).

pub const PREFIX_SCHEDULE: &str = "sch";
pub const PREFIX_TEMPLATE: &str = "tpl";
pub const PREFIX_AUDIT: &str = "aud";

/// All prefixes, for exhaustive ID-format tests.
pub const ALL_PREFIXES: [&str; 3] = [PREFIX_SCHEDULE, PREFIX_TEMPLATE, PREFIX_AUDIT];
