//! CLI module for robird.
//!
//! ```ignore
//! use robird::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args())? {
//!     CliCommand::Version => println!("robird {}", VERSION),
//!     CliCommand::Help => print!("{}", usage()),
//!     CliCommand::Run(options) => run(options).await?,
//! }
//! ```

pub mod args;

pub use args::{parse_args, usage, CliCommand, RunOptions};

/// The current version of robird, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
