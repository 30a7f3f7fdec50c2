//! Locale selection for RedInk.
//!
//! Resolves the display language at startup, persists the user's choice,
//! exposes the active locale with change notification, and serves message
//! catalogs and per-locale prompt templates over HTTP.

pub mod config;
pub mod error;
pub mod i18n;
pub mod prompts;
pub mod server;
