mod migrate;
mod send;
mod serve;

pub use migrate::migrate;
pub use send::{SendArgs, send};
pub use serve::serve;
