//! Core domain + application logic for the DailyHelper Telegram bot.
//!
//! This crate is intentionally framework-agnostic. Telegram, OpenWeather and
//! Aladhan live behind ports (traits) implemented in adapter crates.

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod location;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod prayer;
pub mod quotes;
pub mod weather;

pub use errors::{Error, Result};
