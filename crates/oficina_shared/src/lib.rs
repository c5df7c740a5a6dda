//! # OFICINA Shared
//!
//! Common gameplay values used by the mechanics core and the presentation
//! layer.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - threads or channels
//! - any rendering or window-related crate
//!
//! It is pure data: compiled baselines and the session configuration loaded
//! from TOML at startup.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;

pub use config::{ConfigError, ConfigResult, GameplayConfig};
pub use constants::{HANDOFF_CAPACITY, TABLE_CAPACITY, WIN_SCORE};
