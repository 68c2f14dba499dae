//! Page composition over the auth and board modules.
//!
//! A [`client::BackendClient`] bundles the configured service handles and is
//! passed explicitly to every page. Pages run the session gate on mount,
//! then drive the board controller and forms and render HTML.

pub mod client;
pub mod pages;
pub mod view;

pub use client::BackendClient;
pub use pages::{AuthPage, DashboardPage, Mount, navigate, resolve_landing};

#[cfg(test)]
mod tests;
