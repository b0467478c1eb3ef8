//! Entity structs for all domain objects.
//!
//! Each entity maps to a table in the libSQL database (see `welfare-db/migrations`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod animal;
mod evaluation;
mod question;

pub use animal::Animal;
pub use evaluation::{Answer, AnswerValue, Evaluation, NewEvaluation, Response};
pub use question::{AnswerOption, Question};
