//! Fatora - invoicing toolkit for small parts shops
//!
//! This library provides the core functionality of the Fatora invoicing
//! application: item-name autocomplete over a fixed catalog, invoice
//! assembly with validation, and history queries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, invoices, line items, identifiers)
//! - `suggest`: The item-name suggestion matcher and its catalog
//! - `services`: Business logic (invoice drafting, history queries)
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use fatora::suggest::Catalog;
//!
//! let catalog = Catalog::built_in();
//! let suggestions = catalog.suggest("برشام");
//! assert!(suggestions.contains(&"برشام كيلو"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod suggest;

pub use error::FatoraError;
