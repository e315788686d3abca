//! Slack Relay Core - Shared types library.
//!
//! This crate provides the types shared by the relay components:
//! - `relay` - HTTP server that forwards events to Slack
//! - `cli` - One-shot invocation and configuration checks
//!
//! # Architecture
//!
//! The core crate contains only types and parsing - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Inbound payload, channel identifier, log level and flag parsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
