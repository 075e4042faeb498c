//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db)
//! - `customers` - Customer commands (list, add)
//! - `demo` - Demo data and walkthrough
//! - `import` - CSV import command
//! - `insights` - Insight reporting command
//! - `serve` - Web server command

pub mod core;
pub mod customers;
pub mod demo;
pub mod import;
pub mod insights;
pub mod serve;

// Re-export command functions for main.rs
pub use core::*;
pub use customers::*;
pub use demo::*;
pub use import::*;
pub use insights::*;
pub use serve::*;
