//! HTTP handlers for the stock routes and the service probes.

pub mod common;
pub mod stocks;
pub use common::*;
pub use stocks::*;
