//! The command envelope: the unit serialized into the request URL.

use serde::Serialize;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::{Error, Result};

/// Flat string-keyed parameter map sent as the envelope's `data` member.
///
/// Values must be primitives (string, number, or bool); the service does not
/// accept nested structures here.
pub type Data = serde_json::Map<String, Value>;

#[derive(Serialize)]
struct Auth<'a> {
    key: &'a str,
    user: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ModuleRef<'a> {
    module: &'a str,
    command: &'a str,
}

/// `{auth, module, data?}`, serialized in exactly this member order.
#[derive(Serialize)]
pub(crate) struct Envelope<'a> {
    auth: Auth<'a>,
    module: ModuleRef<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Data>,
}

impl<'a> Envelope<'a> {
    pub(crate) fn new(
        credentials: &'a Credentials,
        module: &'a str,
        command: &'a str,
        data: Option<&'a Data>,
    ) -> Self {
        Self {
            auth: Auth {
                key: &credentials.api_key,
                user: &credentials.client_id,
                password: &credentials.password,
            },
            module: ModuleRef { module, command },
            data,
        }
    }

    /// Serializes the envelope and substitutes `%20` for literal spaces.
    ///
    /// The endpoint reads the envelope out of the request path, so spaces
    /// must not survive serialization. Every other character is left to the
    /// URL encoding applied when the request is issued.
    pub(crate) fn to_query(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?.replace(' ', "%20"))
    }
}

/// Checks that `data` holds only primitive values.
pub(crate) fn validate_data(data: &Data) -> Result<()> {
    for (key, value) in data {
        match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
            _ => {
                return Err(Error::Validation(format!(
                    "data field `{key}` must be a string, number, or bool"
                )));
            }
        }
    }
    Ok(())
}
