//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe storage suitable for unit
//! testing without database dependencies.

mod store;

pub use store::InMemoryTaskStore;
