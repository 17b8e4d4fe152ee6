pub mod chat_service;
pub mod id_generator;
pub mod report_service;

pub use chat_service::{ChatService, ThreadKey};
pub use id_generator::{IdGenerator, RandomIdGenerator};
pub use report_service::ReportService;
