//! # Repic - Recurring Epic Creator
//!
//! A command-line utility for creating recurring monthly Jira epics
//! from reusable templates with date-based substitution.
//!
//! ## Features
//!
//! - **Template System**: Named epic templates with `{token}` placeholders
//! - **Working-Day Dates**: Epics span the first to last working day of a month
//! - **Duplicate Detection**: Skips epics that already exist for the period
//! - **Previous-Month Cleanup**: Closes last month's epics via transition fallbacks
//! - **Dry-Run Mode**: Preview every action without touching the tracker
//!
//! ## Usage
//!
//! ```rust,no_run
//! use repic::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
