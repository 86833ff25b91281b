use std::sync::Arc;

use serde_json::{Value, json};
use tracing::debug;

use crate::config::Config;
use crate::envelope::{Data, Envelope, validate_data};
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Low-level LEAP API client.
///
/// Owns the configuration and the transport. Every command in the SDK
/// funnels through [`execute`](Self::execute); each call is one independent
/// request/response exchange, so a `Client` may be shared and cloned freely.
#[derive(Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client backed by the default HTTP transport.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }

    /// Client backed by a custom transport implementation.
    pub fn with_transport(config: Config, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one command against the remote service.
    ///
    /// Builds the authenticated envelope for `(module, command, data)`,
    /// appends it to the endpoint URL, issues the GET, and returns the
    /// normalized reply. Credentials are re-checked on every call and
    /// incomplete credentials fail before any I/O, as does malformed `data`.
    pub async fn execute(
        &self,
        module: &str,
        command: &str,
        data: Option<Data>,
    ) -> Result<Value> {
        self.config.credentials.ensure_complete()?;
        if let Some(data) = &data {
            validate_data(data)?;
        }

        let envelope = Envelope::new(&self.config.credentials, module, command, data.as_ref());
        let url = format!("{}{}", self.config.endpoint_url, envelope.to_query()?);

        debug!(module, command, "dispatching LEAP request");
        let body = self.transport.get(&url).await?;
        Ok(normalize(body))
    }
}

/// Parses the response body, wrapping unparseable text instead of failing.
///
/// The service normally replies with a JSON document. Anything else is
/// returned under a `data` key so the caller still receives a structured
/// value; a decode failure is never an error.
fn normalize(body: String) -> Value {
    match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(_) => json!({ "data": body }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::config::Credentials;
    use crate::error::Error;

    const ENDPOINT: &str = "https://leap.test/";

    /// Handle onto the URL a [`RecordingTransport`] saw.
    #[derive(Clone, Default)]
    struct Recorded(Arc<Mutex<Option<String>>>);

    impl Recorded {
        fn url(&self) -> String {
            self.0.lock().unwrap().clone().expect("no request was issued")
        }

        /// Decodes the envelope back out of the recorded URL.
        fn envelope(&self) -> Value {
            let url = self.url();
            let raw = url.strip_prefix(ENDPOINT).expect("unexpected endpoint");
            serde_json::from_str(&raw.replace("%20", " ")).expect("envelope is not valid JSON")
        }
    }

    struct RecordingTransport {
        recorded: Recorded,
        body: String,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: &str) -> Result<String> {
            *self.recorded.0.lock().unwrap() = Some(url.to_owned());
            Ok(self.body.clone())
        }
    }

    /// Fails the test if any request reaches the transport.
    struct UnreachableTransport;

    #[async_trait]
    impl Transport for UnreachableTransport {
        async fn get(&self, _url: &str) -> Result<String> {
            panic!("no request should have been issued");
        }
    }

    fn config() -> Config {
        Config::new(Credentials::new("k", "c", "p")).with_endpoint(ENDPOINT)
    }

    fn recording_client(body: &str) -> (Client, Recorded) {
        let recorded = Recorded::default();
        let transport = RecordingTransport {
            recorded: recorded.clone(),
            body: body.to_owned(),
        };
        (Client::with_transport(config(), transport), recorded)
    }

    #[tokio::test]
    async fn incomplete_credentials_fail_before_any_request() {
        let config = Config::new(Credentials::new("", "", "")).with_endpoint(ENDPOINT);
        let client = Client::with_transport(config, UnreachableTransport);
        let err = client.execute("server", "listServers", None).await.unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }

    #[tokio::test]
    async fn malformed_data_fails_before_any_request() {
        let client = Client::with_transport(config(), UnreachableTransport);
        let mut data = Data::new();
        data.insert("entries".to_owned(), json!(["a", "b"]));
        let err = client.execute("server", "updateRdns", Some(data)).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn envelope_carries_module_command_and_auth() {
        let (client, recorded) = recording_client("{}");
        client.execute("account", "tandemList", None).await.unwrap();

        let url = recorded.url();
        assert!(
            url.starts_with(r#"https://leap.test/{"auth":{"key":"k","user":"c","password":"p"}"#),
            "unexpected request URL: {url}"
        );

        let envelope = recorded.envelope();
        assert_eq!(envelope["module"]["module"], "account");
        assert_eq!(envelope["module"]["command"], "tandemList");
        assert!(envelope.get("data").is_none());
    }

    #[tokio::test]
    async fn data_rides_in_the_envelope_with_spaces_escaped() {
        let (client, recorded) = recording_client("{}");
        let mut data = Data::new();
        data.insert("name".to_owned(), Value::from("Ada Lovelace"));
        client
            .execute("account", "tandemAddUser", Some(data))
            .await
            .unwrap();

        assert!(recorded.url().contains("Ada%20Lovelace"));
        assert_eq!(recorded.envelope()["data"]["name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn well_formed_body_round_trips() {
        let (client, _) = recording_client(r#"{"servers": []}"#);
        let result = client.execute("server", "listServers", None).await.unwrap();
        assert_eq!(result, json!({ "servers": [] }));
    }

    #[tokio::test]
    async fn unparseable_body_is_wrapped_not_raised() {
        let (client, _) = recording_client("not json");
        let result = client.execute("server", "listServers", None).await.unwrap();
        assert_eq!(result, json!({ "data": "not json" }));
    }

    #[tokio::test]
    async fn service_error_bodies_pass_through_untouched() {
        let (client, _) = recording_client(r#"{"error": "No Such Command"}"#);
        let result = client.execute("server", "bogus", None).await.unwrap();
        assert_eq!(result["error"], "No Such Command");
    }
}
