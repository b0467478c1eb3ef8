//! Input and update types for entity mutations.
//!
//! Update builders produce structs with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL; the serialized update
//! (changed fields only) goes into the mutation log line.

pub mod animal;
