//! # Folio - an in-memory GraphQL book catalog server
//!
//! Folio exposes a small catalog of authors and books through a GraphQL API.
//! All data lives in process memory, seeded at startup with a demo fixture
//! (3 authors, 8 books); a restart resets the catalog.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (default: http://127.0.0.1:5000/graphql)
//! folio serve
//!
//! # Run a query without starting a server
//! folio query '{ authors { name books { name } } }'
//!
//! # Add a record
//! folio mutate 'addAuthor(name: "Brandon Sanderson") { id name }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and the HTTP server
//! - [`model`]: Data models (Author, Book)
//! - [`store`]: In-memory catalog store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `.folio.yml` config file.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `FolioError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP serving.
pub mod graphql;

/// Data models for the catalog.
pub mod model;

/// In-memory storage for authors and books.
pub mod store;

pub mod logging;
