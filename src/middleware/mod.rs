pub mod authentication;
pub mod claims;

pub use authentication::Authentication;
