pub(crate) mod errors;

pub use errors::*;
