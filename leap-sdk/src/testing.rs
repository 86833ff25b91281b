//! Stub transports shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use leap_api::{Client, Config, Credentials, Result, Transport};

pub const ENDPOINT: &str = "https://leap.test/";

/// Handle onto the URL a [`StubTransport`] saw.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Option<String>>>);

impl Recorded {
    /// Decodes the envelope back out of the recorded request URL.
    pub fn envelope(&self) -> Value {
        let url = self
            .0
            .lock()
            .unwrap()
            .clone()
            .expect("no request was issued");
        let raw = url.strip_prefix(ENDPOINT).expect("unexpected endpoint");
        serde_json::from_str(&raw.replace("%20", " ")).expect("envelope is not valid JSON")
    }
}

pub struct StubTransport {
    recorded: Recorded,
    body: String,
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<String> {
        *self.recorded.0.lock().unwrap() = Some(url.to_owned());
        Ok(self.body.clone())
    }
}

/// Fails the test if any request reaches the transport.
pub struct UnreachableTransport;

#[async_trait]
impl Transport for UnreachableTransport {
    async fn get(&self, _url: &str) -> Result<String> {
        panic!("no request should have been issued");
    }
}

fn test_config() -> Config {
    Config::new(Credentials::new("k", "c", "p")).with_endpoint(ENDPOINT)
}

/// Client whose transport records the request URL and replies with `body`.
pub fn recording_client(body: &str) -> (Client, Recorded) {
    let recorded = Recorded::default();
    let transport = StubTransport {
        recorded: recorded.clone(),
        body: body.to_owned(),
    };
    (Client::with_transport(test_config(), transport), recorded)
}

/// Client that must not issue any request.
pub fn offline_client() -> Client {
    Client::with_transport(test_config(), UnreachableTransport)
}

/// Client with entirely empty credentials, for authentication-guard tests.
pub fn unauthenticated_client() -> Client {
    let config = Config::new(Credentials::new("", "", "")).with_endpoint(ENDPOINT);
    Client::with_transport(config, UnreachableTransport)
}
