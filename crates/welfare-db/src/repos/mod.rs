//! Repository modules implementing CRUD operations for all welfare entities.
//!
//! Each module adds methods to `WelfareService` via `impl WelfareService` blocks.

pub mod animal;
pub mod evaluation;
pub mod question;
