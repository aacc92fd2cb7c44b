//! Core components, types, and utilities for the notifier.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The GitHub user to Slack user directory.
//! - Typed GitHub event payloads.
//! - Workflow runner context and failure reporting.
//! - Common types and result handling.

pub mod config;
pub mod directory;
pub mod event;
pub mod types;
pub mod workflow;
