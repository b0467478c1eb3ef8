//! ID prefix constants.
//!
//! Store-assigned identifiers have the form `{prefix}-{8 hex chars}`, e.g. `ani-a3f8b2c1`.

pub const PREFIX_ANIMAL: &str = "ani";
pub const PREFIX_EVALUATION: &str = "evl";

/// Every prefix the record store generates IDs for.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_ANIMAL, PREFIX_EVALUATION];
