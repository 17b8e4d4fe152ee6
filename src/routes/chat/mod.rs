pub mod get;
pub mod send;

pub use get::*;
pub use send::*;
