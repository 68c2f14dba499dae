//! Identifier and validated scalar types for the board domain.

use super::TaskDomainError;
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Integer identifier of a task row.
///
/// Identifiers minted on the client with [`TaskId::provisional`] are UI keys
/// only; the store assigns the authoritative identifier on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a store-assigned identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Mints a wall-clock derived identifier (milliseconds since the Unix
    /// epoch) for a task that has not reached the store yet.
    #[must_use]
    pub fn provisional(clock: &impl Clock) -> Self {
        Self(clock.utc().timestamp_millis())
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the user owning a task, as issued by the auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a user identifier from its hyphenated string form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidUserId`] when the value is not a
    /// UUID.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidUserId(value.to_owned()))
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDate(NaiveDate);

impl TaskDate {
    /// Wraps an existing calendar date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a date from the `YYYY-MM-DD` form produced by date inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDate`] for empty or malformed input.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDate(value.to_owned()))
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Renders the date in long form, for example `January 1, 2024`.
    #[must_use]
    pub fn long_form(self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
