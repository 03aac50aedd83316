//! dating-profile - Profile shapes shared by the dating web backend and client
//!
//! This library provides the typed wire shapes of a dating profile (location
//! records, tags, the user profile aggregate and the account API envelopes),
//! JSON codec helpers, and the TypeScript declaration exporter that keeps the
//! web client in sync with these types.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `model`: Location, tag, yes/no and profile shapes
//! - `api`: Request/response envelopes and numeric error codes
//! - `services`: JSON codec, conformance checks and TypeScript export
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `system`: Logging setup

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod model;
pub mod services;
pub mod system;
