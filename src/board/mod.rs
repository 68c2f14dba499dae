//! Personal task board.
//!
//! Tasks owned by one user are listed from a row-filtered store and grouped
//! into four fixed status columns. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Board controller and mutation forms in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
