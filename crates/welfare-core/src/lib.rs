//! # welfare-core
//!
//! Core types and the welfare scoring engine.
//!
//! This crate provides the foundational types shared across all workspace crates:
//! - Entity structs for animals, questions, evaluations and responses
//! - Enums for categories, answer letters, trends and status bands
//! - ID prefix constants
//! - Cross-cutting error types
//! - The canonical 18-question welfare questionnaire
//! - The scoring engine: validation, normalization, trend, alerts, fleet aggregates
//! - The `RecordStore` seam and the dashboard overview built on top of it

pub mod engine;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod overview;
pub mod questionnaire;
pub mod store;
