//! Fixtures shared by auth unit tests.

use crate::auth::domain::{Email, Session, User, UserId};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at 2024-01-01T09:30:00Z.
pub struct FixedClock;

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }
}

/// Builds a session for `email`.
pub fn session_for(email: &str) -> Session {
    let email = Email::new(email).expect("valid email");
    Session::new(User::new(UserId::new(), email), FixedClock.utc())
}
