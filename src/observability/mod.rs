//! Structured logging for the shelf page.
//!
//! The crate logs through `tracing` macros and spans everywhere. This module
//! installs the subscriber that turns them into console output.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → ConsoleMakeWriter → console.{error,warn,info,debug}
//! ```
//!
//! # Configuration
//!
//! The level comes from `Config::trace_level` (`data-trace-level` on `<body>`
//! or `trace_level` in the JSON block), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`console_writer`]: Level-aware writer targeting the browser console

pub mod console_writer;
mod init;

pub use init::init_tracing;
