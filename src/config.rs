//! Chat cell configuration

use crate::markup::Labels;
use std::str::FromStr;

pub const DEFAULT_PLACEHOLDER: &str = "Type a message and press Enter";

/// How a whitespace-only submission is treated
///
/// A value that is exactly empty is ignored under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankSubmissions {
    /// Whitespace-only input counts as empty and is dropped
    #[default]
    Ignore,
    /// Whitespace-only input is sent like any other message
    Submit,
}

impl BlankSubmissions {
    /// Whether `value` should be dropped without submitting
    #[must_use]
    pub fn is_empty(self, value: &str) -> bool {
        match self {
            BlankSubmissions::Ignore => value.trim().is_empty(),
            BlankSubmissions::Submit => value.is_empty(),
        }
    }
}

impl FromStr for BlankSubmissions {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "submit" => Ok(Self::Submit),
            other => Err(format!("unknown blank submission policy: {other}")),
        }
    }
}

/// Configuration for a chat cell
#[derive(Debug, Clone, Default)]
pub struct ChatConfig {
    pub blank_submissions: BlankSubmissions,
    pub labels: Labels,
    /// Placeholder shown in the empty input control
    pub placeholder: Option<String>,
}

impl ChatConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or invalid keys keep defaults
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Labels::default();
        let blank_submissions = lookup("CHAT_CELL_BLANK_SUBMISSIONS")
            .and_then(|raw| match raw.parse::<BlankSubmissions>() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring CHAT_CELL_BLANK_SUBMISSIONS");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            blank_submissions,
            labels: Labels {
                user: lookup("CHAT_CELL_USER_LABEL").unwrap_or(defaults.user),
                assistant: lookup("CHAT_CELL_ASSISTANT_LABEL").unwrap_or(defaults.assistant),
            },
            placeholder: lookup("CHAT_CELL_PLACEHOLDER"),
        }
    }

    #[must_use]
    pub fn with_blank_submissions(mut self, policy: BlankSubmissions) -> Self {
        self.blank_submissions = policy;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, user: impl Into<String>, assistant: impl Into<String>) -> Self {
        self.labels = Labels {
            user: user.into(),
            assistant: assistant.into(),
        };
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }
}
