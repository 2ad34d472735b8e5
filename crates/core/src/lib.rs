//! Lavanta Core - Shared types library.
//!
//! This crate provides the wire-format types shared by the Lavanta
//! storefront client components:
//! - `client` - Data-access layer talking to the commerce backend
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no ambient state. Everything here can be exercised without a
//! network connection.
//!
//! # Modules
//!
//! - [`types`] - Serde data model for the backend wire format, identifier
//!   matching, response-envelope decoding, and the normalized error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
