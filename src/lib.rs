//! # Projects - a small project tracker
//!
//! Keeps a list of DIY projects (name, estimated and actual hours,
//! difficulty, notes) in a local SQLite file and manages them from the
//! command line or an interactive menu.
//!
//! ## Layers
//!
//! - [`db`]: connections, migrations, the row mapper and the project DAO
//! - [`libs`]: the entity, the service, input parsing, config and output
//! - [`commands`]: the clap CLI and the interactive menu
//!
//! ## Usage
//!
//! ```rust,no_run
//! use projects::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
