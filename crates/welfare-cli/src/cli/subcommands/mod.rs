pub mod animal;
pub mod evaluation;
pub mod question;

pub use animal::AnimalCommands;
pub use evaluation::EvaluationCommands;
pub use question::QuestionCommands;
