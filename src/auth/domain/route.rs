//! Page routes and their access rules.

use std::fmt;

/// Who may see a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// Never renders; always forwards according to the session.
    Redirector,
    /// Rendered for anonymous visitors; signed-in users are sent on.
    Anonymous,
    /// Rendered only with a valid session.
    Authenticated,
}

/// Application pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, the landing redirector.
    Home,
    /// `/signin`.
    SignIn,
    /// `/signup`.
    SignUp,
    /// `/dashboard`, the board.
    Dashboard,
}

impl Route {
    /// Returns the page path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Resolves a request path, ignoring one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        match trimmed {
            "/" => Some(Self::Home),
            "/signin" => Some(Self::SignIn),
            "/signup" => Some(Self::SignUp),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Returns the access rule for the page.
    #[must_use]
    pub const fn access(self) -> PageAccess {
        match self {
            Self::Home => PageAccess::Redirector,
            Self::SignIn | Self::SignUp => PageAccess::Anonymous,
            Self::Dashboard => PageAccess::Authenticated,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
