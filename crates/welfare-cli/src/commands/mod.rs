pub mod alerts;
pub mod animal;
pub mod dashboard;
pub mod dispatch;
pub mod evaluation;
pub mod question;
pub mod shared;
pub mod stats;
