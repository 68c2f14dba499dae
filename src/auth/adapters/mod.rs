//! Auth service adapters.

pub mod memory;

pub use memory::InMemoryAuthService;
