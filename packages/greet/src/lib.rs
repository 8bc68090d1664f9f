//! # Greet - a minimal Rust CLI monorepo template
//!
//! Greet demonstrates how to structure a command-line tool as a Cargo
//! workspace of small packages:
//!
//! - **One crate per feature**: each greeting lives in its own library
//!   crate under `packages/`, wired together with `path` dependencies
//! - **A single CLI surface**: this crate composes the greeting crates
//!   into clap subcommands
//! - **Shared dependency versions**: third-party crates are declared once
//!   in `[workspace.dependencies]`
//!
//! ## Basic Usage
//!
//! ```bash
//! # Default greeting
//! greet
//!
//! # Greet someone by name
//! greet Alice
//!
//! # Pick a greeting variant
//! greet hi Bob
//! greet bye Charlie
//! ```
//!
//! ## Library Usage
//!
//! The greeting functions are re-exported for programmatic use:
//!
//! ```rust
//! use greet::{say_bye, say_hello, say_hi};
//!
//! assert_eq!(say_hello(None), "Hello, World!");
//! assert_eq!(say_hi(Some("Bob")), "Hi, Bob!");
//! assert_eq!(say_bye(Some("Charlie")), "Goodbye, Charlie!");
//! ```

pub mod cli;

// Re-export for clean API
pub use greet_bye::say_bye;
pub use greet_hello::say_hello;
pub use greet_hi::say_hi;
