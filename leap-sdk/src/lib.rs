//! Typed command surface for the SingleHop LEAP hosting API.
//!
//! Each LEAP module gets one client: [`AccountClient`] for account and
//! Tandem user operations, [`ServerClient`] for server lifecycle and the
//! cascade VM sub-domain. Every operation is described by a declarative
//! command table (wire command name plus required/optional field renames)
//! and dispatched through one shared path, so validation and field mapping
//! behave identically across the whole surface.
//!
//! # Quick Start
//!
//! ```no_run
//! use leap_sdk::{AccountClient, Client, Config, Credentials};
//!
//! # async fn example() -> leap_sdk::Result<()> {
//! let config = Config::new(Credentials::new("api-key", "client-id", "password"));
//! let account = AccountClient::new(Client::new(config));
//!
//! let users = account.list_tandem_users().await?;
//! println!("{users:#}");
//! # Ok(())
//! # }
//! ```
//!
//! Results are the service's JSON replies as [`serde_json::Value`]; a reply
//! carrying an `error` key is a service-level failure for the caller to
//! inspect, not a client error.

mod command;

pub mod account;
pub mod server;

pub use account::AccountClient;
pub use server::{CancelReason, CreateVmParams, EditVmParams, ServerClient};

/// Re-export the low-level client and its configuration types.
pub use leap_api::{Client, Config, Credentials, Error, Result};

#[cfg(test)]
pub(crate) mod testing;
