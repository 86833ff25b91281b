use crate::error::{Error, Result};

/// Public endpoint of the LEAP API.
pub const DEFAULT_ENDPOINT_URL: &str = "https://api.singlehop.com/";

/// Authentication credentials sent with every request.
///
/// All three members are required by the service; completeness is re-checked
/// before each call rather than only at construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub client_id: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
            password: password.into(),
        }
    }

    /// Checks that no credential is empty.
    pub(crate) fn ensure_complete(&self) -> Result<()> {
        if self.api_key.is_empty() || self.client_id.is_empty() || self.password.is_empty() {
            return Err(Error::Authentication);
        }
        Ok(())
    }
}

/// Client configuration: credentials plus the endpoint to talk to.
///
/// There is no implicit lookup of credentials or endpoint anywhere in this
/// crate; whatever is in the `Config` is what gets used.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint_url: String,
}

impl Config {
    /// Configuration against the public endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
        }
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }
}
