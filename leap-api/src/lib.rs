//! Low-level client for the SingleHop LEAP API.
//!
//! LEAP commands travel as a JSON envelope embedded in the request URL:
//!
//! ```text
//! GET <endpoint>{"auth":{"key":..,"user":..,"password":..},
//!                "module":{"module":"server","command":"listServers"},
//!                "data":{...}}
//! ```
//!
//! This crate owns that contract end to end: building the authenticated
//! envelope for a `(module, command, data)` triple, issuing the GET, and
//! normalizing the JSON reply. The typed per-command surface lives in the
//! companion `leap-sdk` crate; use this crate directly for commands the SDK
//! does not cover.
//!
//! # Quick Start
//!
//! ```no_run
//! use leap_api::{Client, Config, Credentials};
//!
//! # async fn example() -> leap_api::Result<()> {
//! let config = Config::new(Credentials::new("api-key", "client-id", "password"));
//! let client = Client::new(config);
//!
//! let servers = client.execute("server", "listServers", None).await?;
//! println!("{servers:#}");
//! # Ok(())
//! # }
//! ```
//!
//! Replies are returned as [`serde_json::Value`] untouched; service-level
//! failures arrive as a well-formed body with an `error` key, which the
//! caller inspects. A body that is not valid JSON is wrapped as
//! `{"data": <raw body>}` rather than surfaced as an error.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod transport;

pub use client::Client;
pub use config::{Config, Credentials, DEFAULT_ENDPOINT_URL};
pub use envelope::Data;
pub use error::{Error, Result};
pub use transport::{HttpTransport, REQUEST_TIMEOUT, Transport};
