//! # Database module — SQLite pool management
//!
//! Opens the pool on the configured database file (creating the file when it
//! doesn't exist yet) and brings up the schema. The pool is built once at
//! startup and handed to [`crate::registry::SqliteUserStore`]; nothing here
//! is a process-wide singleton, so tests can open as many isolated pools as
//! they need.

mod pool;

pub use pool::{connect, init_schema};
