//! Load configuration via `config` crate with env-override support.
//!
//! GitHub exposes action inputs to the container as `INPUT_<NAME>` variables, so
//! the environment source uses the `INPUT` prefix.  The reviewer login is the
//! one value that comes from a plain environment variable (`REVIEWER_LOGIN`).

use std::{ops::Deref, path::Path, sync::Arc};

use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use super::types::Res;

/// Default location of the local configuration file.
const DEFAULT_CONFIG_PATH: &str = ".hidden/config.toml";

/// Configuration for the notifier.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack bot token (`INPUT_SLACK_BOT_TOKEN`).
    #[serde(default)]
    pub slack_bot_token: String,
    /// JSON map of GitHub login to Slack user info (`INPUT_SLACK_USER_INFO_JSON`).
    #[serde(default)]
    pub slack_user_info_json: Option<String>,
    /// Login of the reviewer that was just requested (`REVIEWER_LOGIN`).
    #[serde(default)]
    pub reviewer_login: Option<String>,
    /// Log messages instead of posting them (`INPUT_DRY_RUN`).
    #[serde(default)]
    pub dry_run: bool,
}

impl Config {
    /// Load the configuration from the optional file, the action inputs, and `REVIEWER_LOGIN`.
    ///
    /// Later sources win, so the environment always overrides the file.
    pub fn load(explicit_path: Option<&Path>, force_dry_run: bool) -> Res<Self> {
        let mut cfg = config::Config::builder();

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            cfg = cfg.add_source(config::File::with_name(DEFAULT_CONFIG_PATH));
        }

        cfg = cfg.add_source(config::Environment::default().prefix("INPUT"));
        cfg = cfg.set_override_option("reviewer_login", std::env::var("REVIEWER_LOGIN").ok())?;

        if force_dry_run {
            cfg = cfg.set_override("dry_run", true)?;
        }

        Self::from_builder(cfg)
    }

    /// Build a configuration from an already assembled builder.
    ///
    /// An empty bot token is accepted; sends made with it fail and are logged like any other
    /// API failure.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Res<Self> {
        Ok(Config {
            inner: Arc::new(builder.build()?.try_deserialize()?),
        })
    }

    /// The raw user directory JSON, if the input was provided and is not blank.
    pub fn user_directory_json(&self) -> Option<&str> {
        non_blank(self.slack_user_info_json.as_deref())
    }

    /// The requested reviewer login, if set and not blank.
    ///
    /// Workflows usually pass `${{ github.event.requested_reviewer.login }}`, which
    /// expands to an empty string for team review requests.
    pub fn reviewer_login(&self) -> Option<&str> {
        non_blank(self.reviewer_login.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Res<Config> {
        Config::from_builder(config::Config::builder().add_source(config::File::from_str(toml, config::FileFormat::Toml)))
    }

    #[test]
    fn loads_all_fields() {
        let config = from_toml(
            r#"
            slack_bot_token = "xoxb-test"
            slack_user_info_json = '{"octocat": {"directMessageId": "D1"}}'
            reviewer_login = "hubot"
            "#,
        )
        .unwrap();

        assert_eq!(config.slack_bot_token, "xoxb-test");
        assert_eq!(config.user_directory_json(), Some(r#"{"octocat": {"directMessageId": "D1"}}"#));
        assert_eq!(config.reviewer_login(), Some("hubot"));
        assert!(!config.dry_run);
    }

    #[test]
    fn blank_inputs_are_treated_as_unset() {
        let config = from_toml(
            r#"
            slack_bot_token = "xoxb-test"
            slack_user_info_json = "   "
            reviewer_login = ""
            "#,
        )
        .unwrap();

        assert_eq!(config.user_directory_json(), None);
        assert_eq!(config.reviewer_login(), None);
    }

    #[test]
    fn missing_token_still_loads() {
        let config = from_toml(r#"slack_user_info_json = "{}""#).unwrap();
        assert!(config.slack_bot_token.is_empty());
        assert!(!config.dry_run);
    }

    #[test]
    fn config_is_shared_between_clones() {
        let config = from_toml(r#"slack_bot_token = "xoxb-test""#).unwrap();
        let clone = config.clone();
        assert!(Arc::ptr_eq(&config.inner, &clone.inner));
    }

    #[test]
    fn dry_run_does_not_need_a_token() {
        let config = from_toml("dry_run = true").unwrap();
        assert!(config.dry_run);
        assert!(config.slack_bot_token.is_empty());
    }
}
