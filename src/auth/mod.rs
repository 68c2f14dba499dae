//! Authentication and session gating.
//!
//! Accounts and sessions live in a hosted service reached through the
//! [`ports::AuthService`] port. This module decides what each page may show
//! given the current session and drives the sign-in and sign-up forms.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
