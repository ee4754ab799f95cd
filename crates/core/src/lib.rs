//! Catalog Seeder Core - Shared types library.
//!
//! This crate provides common types used across all Catalog Seeder components:
//! - `admin` - Shopify embedded-app backend (generate / bulk-delete products)
//! - `integration-tests` - Fake catalog and end-to-end scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for Shopify global IDs, prices, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
