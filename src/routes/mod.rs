pub(crate) mod chat;
pub mod health_checks;
pub(crate) mod report;

pub use health_checks::*;
