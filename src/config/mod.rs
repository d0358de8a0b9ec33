//! Process configuration, resolved once at startup from the environment.

pub mod types;
pub mod loader;

pub use types::*;
pub use loader::*;
