//! Account-module operations: account details, authorized contacts, and
//! Tandem delegated users.

use serde_json::Value;

use leap_api::{Client, Result};

use crate::command::{Args, ModuleClient};

mod ops {
    use crate::command::{CommandDef, Field};

    pub const ACCOUNT_DETAILS: CommandDef = CommandDef {
        command: "getAccountDetails",
        required: &[],
        optional: &[],
    };

    pub const AUTHORIZED_CONTACTS: CommandDef = CommandDef {
        command: "getAuthorizedContacts",
        required: &[],
        optional: &[],
    };

    pub const TANDEM_LIST: CommandDef = CommandDef {
        command: "tandemList",
        required: &[],
        optional: &[],
    };

    pub const TANDEM_ADD_USER: CommandDef = CommandDef {
        command: "tandemAddUser",
        required: &[
            Field { param: "name", wire: "name" },
            Field { param: "email", wire: "email" },
            Field { param: "password", wire: "password" },
        ],
        optional: &[],
    };

    pub const TANDEM_DELETE_USER: CommandDef = CommandDef {
        command: "tandemDeleteUser",
        required: &[Field { param: "user_id", wire: "userid" }],
        optional: &[],
    };

    pub const TANDEM_ADD_USER_PERMISSION: CommandDef = CommandDef {
        command: "tandemAddUserPermission",
        required: &[
            Field { param: "user_id", wire: "userid" },
            Field { param: "server_id", wire: "serverid" },
        ],
        optional: &[],
    };

    pub const TANDEM_DELETE_USER_PERMISSION: CommandDef = CommandDef {
        command: "tandemDeleteUserPermission",
        required: &[
            Field { param: "user_id", wire: "userid" },
            Field { param: "server_id", wire: "serverid" },
        ],
        optional: &[],
    };
}

/// Client for the `account` module.
pub struct AccountClient {
    inner: ModuleClient,
}

impl AccountClient {
    pub fn new(client: Client) -> Self {
        Self {
            inner: ModuleClient::new(client, "account"),
        }
    }

    /// Gets the account details.
    pub async fn account_details(&self) -> Result<Value> {
        self.inner.call(&ops::ACCOUNT_DETAILS, Args::new()).await
    }

    /// Gets the authorized account contacts.
    pub async fn authorized_contacts(&self) -> Result<Value> {
        self.inner.call(&ops::AUTHORIZED_CONTACTS, Args::new()).await
    }

    // =========================================================================
    // Tandem Users
    // =========================================================================

    /// Lists Tandem users.
    pub async fn list_tandem_users(&self) -> Result<Value> {
        self.inner.call(&ops::TANDEM_LIST, Args::new()).await
    }

    /// Adds a Tandem user.
    pub async fn add_tandem_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Value> {
        self.inner
            .call(
                &ops::TANDEM_ADD_USER,
                Args::new()
                    .set("name", name)
                    .set("email", email)
                    .set("password", password),
            )
            .await
    }

    /// Deletes a Tandem user.
    ///
    /// The service currently rejects this command with an internal error;
    /// the reply will carry an `error` member until the remote side fixes it.
    pub async fn delete_tandem_user(&self, user_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::TANDEM_DELETE_USER, Args::new().set("user_id", user_id))
            .await
    }

    /// Grants a Tandem user permission on a server.
    pub async fn grant_permission(&self, user_id: &str, server_id: &str) -> Result<Value> {
        self.inner
            .call(
                &ops::TANDEM_ADD_USER_PERMISSION,
                Args::new().set("user_id", user_id).set("server_id", server_id),
            )
            .await
    }

    /// Revokes a Tandem user's permission on a server.
    pub async fn revoke_permission(&self, user_id: &str, server_id: &str) -> Result<Value> {
        self.inner
            .call(
                &ops::TANDEM_DELETE_USER_PERMISSION,
                Args::new().set("user_id", user_id).set("server_id", server_id),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use leap_api::Error;

    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn tandem_list_sends_a_bare_account_envelope() {
        let (client, recorded) = testing::recording_client(r#"{"users": []}"#);
        let result = AccountClient::new(client).list_tandem_users().await.unwrap();

        let envelope = recorded.envelope();
        assert_eq!(envelope["module"]["module"], "account");
        assert_eq!(envelope["module"]["command"], "tandemList");
        assert!(envelope.get("data").is_none());
        assert_eq!(result, json!({ "users": [] }));
    }

    #[tokio::test]
    async fn add_user_maps_all_three_fields() {
        let (client, recorded) = testing::recording_client("{}");
        AccountClient::new(client)
            .add_tandem_user("Ada Lovelace", "ada@example.com", "hunter2")
            .await
            .unwrap();

        let data = &recorded.envelope()["data"];
        assert_eq!(data["name"], "Ada Lovelace");
        assert_eq!(data["email"], "ada@example.com");
        assert_eq!(data["password"], "hunter2");
    }

    #[tokio::test]
    async fn add_user_with_empty_email_fails_offline() {
        let account = AccountClient::new(testing::offline_client());
        let err = account
            .add_tandem_user("Ada Lovelace", "", "hunter2")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(ref msg) if msg.contains("email")));
    }

    #[tokio::test]
    async fn delete_user_renames_user_id() {
        let (client, recorded) = testing::recording_client("{}");
        AccountClient::new(client).delete_tandem_user("7").await.unwrap();

        let data = &recorded.envelope()["data"];
        assert_eq!(data["userid"], "7");
        assert!(data.get("user_id").is_none());
    }

    #[tokio::test]
    async fn permission_ops_carry_both_ids() {
        let (client, recorded) = testing::recording_client("{}");
        AccountClient::new(client)
            .grant_permission("7", "42")
            .await
            .unwrap();

        let envelope = recorded.envelope();
        assert_eq!(envelope["module"]["command"], "tandemAddUserPermission");
        assert_eq!(envelope["data"]["userid"], "7");
        assert_eq!(envelope["data"]["serverid"], "42");
    }

    #[tokio::test]
    async fn empty_credentials_block_every_operation() {
        let account = AccountClient::new(testing::unauthenticated_client());
        let err = account.account_details().await.unwrap_err();
        assert!(matches!(err, Error::Authentication));
        let err = account.grant_permission("7", "42").await.unwrap_err();
        assert!(matches!(err, Error::Authentication));
    }
}
