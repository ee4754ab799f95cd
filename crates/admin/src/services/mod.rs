//! Business logic services for the catalog seeder.
//!
//! # Services
//!
//! - `products` - Product repository (create random / list page / delete)
//! - `bulk_delete` - Collect every product page, then delete sequentially

pub mod bulk_delete;
pub mod products;

pub use bulk_delete::{BulkDeleteReport, BulkDeleter, FIRST_PAGE_SIZE, PAGE_SIZE};
pub use products::{MAX_PAGE_SIZE, ProductRepository, RandomProductInput, SnowboardColor};
