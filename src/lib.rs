//! Rust client SDK for the SingleHop LEAP hosting API.
//!
//! This crate provides two modules:
//!
//! - [`api`] — Low-level envelope/transport client for the LEAP wire protocol
//! - [`sdk`] — Typed per-command surface for account and server operations
//!
//! # Quick Start
//!
//! ```no_run
//! use leap::api::{Client, Config, Credentials};
//! use leap::sdk::ServerClient;
//!
//! # async fn example() -> leap::api::Result<()> {
//! let config = Config::new(Credentials::new("api-key", "client-id", "password"));
//! let servers = ServerClient::new(Client::new(config));
//!
//! let listing = servers.list_servers().await?;
//! println!("{listing:#}");
//!
//! servers.reboot_server("4242").await?;
//! # Ok(())
//! # }
//! ```

/// Low-level client for the LEAP wire protocol.
///
/// This module owns the command envelope, the transport seam, and response
/// normalization. Use it directly for commands not covered by the SDK.
pub use leap_api as api;

/// Typed per-command surface for the LEAP API.
///
/// This module provides:
/// - [`sdk::AccountClient`] — account details, contacts, Tandem users
/// - [`sdk::ServerClient`] — server lifecycle and cascade VM operations
pub use leap_sdk as sdk;
