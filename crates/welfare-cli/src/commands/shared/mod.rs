pub mod answers;
pub mod limit;
