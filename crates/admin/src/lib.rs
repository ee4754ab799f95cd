//! Catalog seeder library.
//!
//! Populates a Shopify development store with throwaway snowboard products
//! and wipes them again. Exposed as a library so the router and the bulk
//! deletion flow can be tested against an in-memory catalog.
//!
//! # Security
//!
//! This crate holds a HIGH PRIVILEGE Shopify Admin API token that can delete
//! every product in the store. Point it at development stores only.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;
