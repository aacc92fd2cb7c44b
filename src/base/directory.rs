//! Directory mapping GitHub logins to Slack users.

use std::collections::HashMap;

use anyhow::Context;
use serde::Deserialize;

use super::types::Res;

/// Slack details for a single GitHub user.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// The Slack channel id of the direct message conversation with the user.
    #[serde(rename = "directMessageId", alias = "direct_message_id")]
    pub direct_message_id: String,
}

/// Read-only lookup table from GitHub login to [`UserInfo`].
///
/// Loaded once from the action input and passed explicitly to the dispatcher.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserDirectory {
    users: HashMap<String, UserInfo>,
}

impl UserDirectory {
    /// Parse the directory from its JSON form, e.g. `{"octocat": {"directMessageId": "D123"}}`.
    pub fn parse(json: &str) -> Res<Self> {
        serde_json::from_str(json).context("Failed to parse the Slack user info JSON")
    }

    /// Look up the Slack info for a GitHub login.
    pub fn get(&self, login: &str) -> Option<&UserInfo> {
        self.users.get(login)
    }

    /// Look up the direct message channel id for a GitHub login.
    pub fn direct_message_id(&self, login: &str) -> Option<&str> {
        self.get(login).map(|u| u.direct_message_id.as_str())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(String, UserInfo)> for UserDirectory {
    fn from_iter<T: IntoIterator<Item = (String, UserInfo)>>(iter: T) -> Self {
        Self { users: iter.into_iter().collect() }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_looks_up_users() {
        let directory = UserDirectory::parse(r#"{"octocat": {"directMessageId": "D111", "name": "Mona"}, "hubot": {"directMessageId": "D222"}}"#).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.direct_message_id("octocat"), Some("D111"));
        assert_eq!(directory.direct_message_id("hubot"), Some("D222"));
        assert_eq!(directory.direct_message_id("nobody"), None);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let directory = UserDirectory::parse(r#"{"Octocat": {"directMessageId": "D111"}}"#).unwrap();
        assert_eq!(directory.direct_message_id("octocat"), None);
    }

    #[test]
    fn rejects_entries_without_a_channel() {
        let err = UserDirectory::parse(r#"{"octocat": {"name": "Mona"}}"#).unwrap_err();
        assert!(err.to_string().contains("Slack user info JSON"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(UserDirectory::parse("not json").is_err());
        assert!(UserDirectory::parse("[]").is_err());
    }
}
