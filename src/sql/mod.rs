//! Parameterized statements for the `stocks` table: identifiers are fixed, values are always bound.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
