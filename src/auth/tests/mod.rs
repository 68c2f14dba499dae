//! Unit tests for authentication and session gating.

mod support;
