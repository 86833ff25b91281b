//! Declarative command descriptors and the shared dispatch path.

use serde_json::Value;

use leap_api::{Client, Data, Error, Result};

/// Logical-to-wire rename for one command parameter.
pub(crate) struct Field {
    pub param: &'static str,
    pub wire: &'static str,
}

/// Wire description of one command: its name plus parameter tables.
pub(crate) struct CommandDef {
    pub command: &'static str,
    pub required: &'static [Field],
    pub optional: &'static [Field],
}

/// Parameters supplied by a command method, keyed by logical name.
pub(crate) struct Args(Vec<(&'static str, Option<Value>)>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn set(mut self, param: &'static str, value: impl Into<Value>) -> Self {
        self.0.push((param, Some(value.into())));
        self
    }

    pub fn opt(mut self, param: &'static str, value: Option<impl Into<Value>>) -> Self {
        self.0.push((param, value.map(Into::into)));
        self
    }

    fn take(&mut self, param: &str) -> Option<Value> {
        self.0
            .iter_mut()
            .find(|(name, value)| *name == param && value.is_some())
            .and_then(|(_, value)| value.take())
    }
}

/// Per-module dispatcher shared by every command method.
pub(crate) struct ModuleClient {
    client: Client,
    module: &'static str,
}

impl ModuleClient {
    pub fn new(client: Client, module: &'static str) -> Self {
        Self { client, module }
    }

    /// Runs `def` with `args`, enforcing its parameter tables.
    ///
    /// Required parameters must be present and non-empty; optional ones are
    /// forwarded only when supplied. Validation failures happen before any
    /// request is built or sent.
    pub async fn call(&self, def: &CommandDef, mut args: Args) -> Result<Value> {
        let mut data = Data::new();
        let mut missing = Vec::new();

        for field in def.required {
            match args.take(field.param) {
                Some(value) if !is_blank(&value) => {
                    data.insert(field.wire.to_owned(), value);
                }
                _ => missing.push(field.param),
            }
        }
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "{}: missing required parameter(s): {}",
                def.command,
                missing.join(", ")
            )));
        }

        for field in def.optional {
            if let Some(value) = args.take(field.param) {
                data.insert(field.wire.to_owned(), value);
            }
        }

        let data = (!data.is_empty()).then_some(data);
        self.client.execute(self.module, def.command, data).await
    }

    /// Runs `def` with a caller-built data map, bypassing the field tables.
    ///
    /// Used by the handful of commands whose payload is an arbitrary map
    /// (reverse DNS entries) rather than a fixed parameter set.
    pub async fn call_raw(&self, def: &CommandDef, data: Data) -> Result<Value> {
        self.client.execute(self.module, def.command, Some(data)).await
    }
}

fn is_blank(value: &Value) -> bool {
    value.is_null() || matches!(value, Value::String(s) if s.is_empty())
}
