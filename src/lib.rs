//! spotime library
//!
//! Fetches the liked-songs library of a Spotify account, splits it into
//! period or language groups and creates playlists from those groups.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env` files
//! - `detect` - Language detection capability
//! - `error` - Error taxonomy and HTTP status mapping
//! - `library` - Fetching, grouping and playlist creation
//! - `management` - Token cache
//! - `server` - Axum router and server state
//! - `spotify` - Spotify Web API client and OAuth flow
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod library;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Fetching liked songs...");
/// info!("Found {} groups", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Playlist created: {}", url);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program
/// with code 1.
///
/// Only meant for fatal errors at the top level of a command; library code
/// returns [`error::Error`] instead.
///
/// ```
/// error!("Cannot load configuration: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a failed upstream call in a server
/// handler or a browser that could not be opened.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
