mod identity;
mod message;
mod report;

pub use identity::*;
pub use message::*;
pub use report::*;
