//! GraphQL schema and resolvers for folio.
//!
//! Exposes the catalog through a small query/mutation schema and serves it
//! over HTTP with an interactive playground console.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! folio serve --port 5000
//!
//! # Execute a query from the CLI
//! folio query '{ authors { name books { name } } }'
//!
//! # Execute a mutation from the CLI
//! folio mutate 'addAuthor(name: "Brandon Sanderson") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `books`, `book(id)`, `authors`, `author(id)`
//! - **Mutations**: `addBook(name, authorId)`, `addAuthor(name)`

mod schema;
mod server;
mod types;

pub use schema::{FolioSchema, build_schema};
pub use server::{router, run_server};
pub use types::*;
