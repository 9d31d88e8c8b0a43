//! Fixed texts for actions that are not implemented yet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text shown for an action name nobody recognises.
pub const UNKNOWN_ACTION_MESSAGE: &str = "Feature not implemented yet.";

/// Toolbar actions that only surface a notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StubAction {
    /// File attachment.
    Attach,
    /// Web search.
    Search,
    /// Study mode.
    Study,
    /// Voice input.
    Voice,
}

impl StubAction {
    /// Every known action.
    pub const ALL: [Self; 4] = [Self::Attach, Self::Search, Self::Study, Self::Voice];

    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attach => "attach",
            Self::Search => "search",
            Self::Study => "study",
            Self::Voice => "voice",
        }
    }

    /// Notification text for this action.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Attach => "File attachment feature would be implemented here.",
            Self::Search => "Search functionality would be implemented here.",
            Self::Study => "Study mode feature would be implemented here.",
            Self::Voice => "Voice input feature would be implemented here.",
        }
    }
}

impl fmt::Display for StubAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StubAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attach" => Ok(Self::Attach),
            "search" => Ok(Self::Search),
            "study" => Ok(Self::Study),
            "voice" => Ok(Self::Voice),
            _ => Err(value.to_string()),
        }
    }
}

/// Notification text for an arbitrary action name.
#[must_use]
pub fn action_message(name: &str) -> &'static str {
    name.parse::<StubAction>()
        .map_or(UNKNOWN_ACTION_MESSAGE, StubAction::message)
}

/// Authentication buttons, which only surface a notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStub {
    /// Log in.
    Login,
    /// Sign up.
    Signup,
}

impl AuthStub {
    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    /// Notification text for this button.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Login => "Login functionality would redirect to authentication page.",
            Self::Signup => "Signup functionality would redirect to registration page.",
        }
    }
}

impl fmt::Display for AuthStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthStub {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            _ => Err(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions_roundtrip() {
        for action in StubAction::ALL {
            assert_eq!(action.as_str().parse::<StubAction>(), Ok(action));
            assert_eq!(action_message(action.as_str()), action.message());
        }
    }

    #[test]
    fn test_unknown_action_gets_generic_text() {
        assert_eq!(action_message("dance"), UNKNOWN_ACTION_MESSAGE);
        assert_eq!(action_message("Attach"), UNKNOWN_ACTION_MESSAGE);
    }

    #[test]
    fn test_auth_stub_texts() {
        assert_eq!("login".parse::<AuthStub>(), Ok(AuthStub::Login));
        assert!(AuthStub::Signup.message().starts_with("Signup"));
        assert!("logout".parse::<AuthStub>().is_err());
    }
}
