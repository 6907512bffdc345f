//! Structured partial-update builders.
//!
//! Edits carry explicit optional fields per attribute, applied field-by-field
//! - never a generic merge of untyped maps.

pub mod schedule;
