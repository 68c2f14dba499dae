//! Application services for authentication and page gating.

mod auth_form;
mod gate;
mod logout;

pub use auth_form::{
    AuthForm, AuthFormOutcome, AuthMode, CONFIRMATION_NOTICE, MISSING_SESSION_ERROR,
};
pub use gate::{GateDecision, SessionGate, decide};
pub use logout::log_out;
