//! Taskboard: a personal task board over a hosted backend.
//!
//! Users sign in, then create, edit, delete, and move tasks across four
//! fixed status columns. Accounts, sessions, and task rows live in an
//! external service; this crate keeps the client-side board consistent with
//! that store by reloading the full task list after every change.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`auth`]: Identity, session gating, and the sign-in/sign-up form
//! - [`board`]: Tasks, the board controller, and mutation forms
//! - [`app`]: Page composition and rendering
//! - [`config`]: Backend connection settings

pub mod app;
pub mod auth;
pub mod board;
pub mod config;
