//! Unit tests for page composition and rendering.
