//! StockService: data access for the `stocks` table.

mod crud;
pub use crud::StockService;
