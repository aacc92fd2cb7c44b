//! Service integrations for external APIs and clients.
//!
//! This module contains the chat service used by the notifier.  The service defines
//! both a generic trait and concrete implementations (Slack, plus a dry-run logger),
//! allowing for extensibility and easy testing.

pub mod chat;
