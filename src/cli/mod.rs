//! Command-line interface for folio.
//!
//! [`commands`] holds the clap definitions; [`handlers`] holds one thin
//! module per subcommand.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
