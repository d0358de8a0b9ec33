//! Extractors whose rejections go through [`crate::error::AppError`].

mod payload;
pub use payload::{Payload, StockId};
