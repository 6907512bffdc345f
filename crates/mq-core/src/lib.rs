//! # mq-core
//!
//! Core types and error types for Marquee.
//!
//! This crate provides the foundational types shared across all Marquee crates:
//! - Entity structs for schedule entries, templates, and audit entries
//! - Board/status enums with state machine transitions
//! - Snapshot document types for the layer-2 fallback
//! - Typed audit detail payloads
//! - Content hashing
//! - ID prefix constants

pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod hash;
pub mod ids;
