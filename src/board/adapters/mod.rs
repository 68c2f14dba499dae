//! Store adapters for the task board.
//!
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory storage for tests
//! - [`postgres::PostgresTaskStore`]: the hosted `tasks` table via Diesel

pub mod memory;
pub mod postgres;
