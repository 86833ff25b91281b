//! Server-module operations: the dedicated-server surface plus the cascade
//! VM sub-domain, all riding the `server` module.

use std::collections::HashMap;

use serde_json::Value;

use leap_api::{Client, Data, Error, Result};

use crate::command::{Args, ModuleClient};

mod ops {
    use crate::command::{CommandDef, Field};

    pub const LIST_SERVERS: CommandDef = CommandDef {
        command: "listServers",
        required: &[],
        optional: &[],
    };

    pub const LIST_AVAILABLE_SERVERS: CommandDef = CommandDef {
        command: "listAvailableServers",
        required: &[],
        optional: &[],
    };

    pub const GET_SERVER_DETAILS: CommandDef = CommandDef {
        command: "getServerDetails",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    pub const GET_SERVER_IPS: CommandDef = CommandDef {
        command: "getServerIps",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    pub const GET_SERVER_BANDWIDTH: CommandDef = CommandDef {
        command: "getServerBandwidth",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    pub const GET_RDNS_LIST: CommandDef = CommandDef {
        command: "getRdnsList",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    // Payload is the caller's ip -> hostname map, sent as-is.
    pub const UPDATE_RDNS: CommandDef = CommandDef {
        command: "updateRdns",
        required: &[],
        optional: &[],
    };

    pub const REBOOT_SERVER: CommandDef = CommandDef {
        command: "rebootServer",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    pub const GET_OS_LIST: CommandDef = CommandDef {
        command: "getOsList",
        required: &[Field { param: "server_id", wire: "serverid" }],
        optional: &[],
    };

    pub const REINSTALL_SERVER: CommandDef = CommandDef {
        command: "reinstallServer",
        required: &[
            Field { param: "server_id", wire: "serverid" },
            Field { param: "os_id", wire: "osid" },
        ],
        optional: &[],
    };

    pub const CANCEL_SERVERS: CommandDef = CommandDef {
        command: "cancelServers",
        required: &[
            Field { param: "server_ids", wire: "serverids" },
            Field { param: "satisfied", wire: "satisfied" },
            Field { param: "reason", wire: "reason" },
        ],
        optional: &[],
    };

    pub const CASCADE_CPU_USAGE: CommandDef = CommandDef {
        command: "cascadeCpuUsage",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[],
    };

    pub const CASCADE_NODE_DETAILS: CommandDef = CommandDef {
        command: "cascadeNodeDetails",
        required: &[Field { param: "node_id", wire: "nodeid" }],
        optional: &[],
    };

    pub const CASCADE_SNAPSHOT_LIST: CommandDef = CommandDef {
        command: "cascadeSnapshotList",
        required: &[],
        optional: &[],
    };

    pub const CASCADE_CREATE: CommandDef = CommandDef {
        command: "cascadeCreate",
        required: &[
            Field { param: "hostname", wire: "hostname" },
            Field { param: "snapshot_id", wire: "snapshotid" },
            Field { param: "ram", wire: "ram" },
            Field { param: "disk", wire: "disk" },
        ],
        optional: &[Field { param: "node_id", wire: "nodeid" }],
    };

    pub const CASCADE_EDIT: CommandDef = CommandDef {
        command: "cascadeEdit",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[
            Field { param: "hostname", wire: "hostname" },
            Field { param: "ram", wire: "ram" },
            Field { param: "disk", wire: "disk" },
        ],
    };

    pub const CASCADE_MOVE: CommandDef = CommandDef {
        command: "cascadeMove",
        required: &[
            Field { param: "vm_id", wire: "vmid" },
            Field { param: "node_id", wire: "nodeid" },
        ],
        optional: &[],
    };

    pub const CASCADE_SNAPSHOT: CommandDef = CommandDef {
        command: "cascadeSnapshot",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[Field { param: "name", wire: "name" }],
    };

    pub const CASCADE_DELETE: CommandDef = CommandDef {
        command: "cascadeDelete",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[],
    };

    pub const CASCADE_START: CommandDef = CommandDef {
        command: "cascadeStart",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[],
    };

    pub const CASCADE_SHUTDOWN: CommandDef = CommandDef {
        command: "cascadeShutdown",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[],
    };

    pub const CASCADE_REBOOT: CommandDef = CommandDef {
        command: "cascadeReboot",
        required: &[Field { param: "vm_id", wire: "vmid" }],
        optional: &[],
    };
}

/// Why a cancellation is being requested.
///
/// The service only accepts these values; anything else is rejected remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    Cost,
    Performance,
    Support,
    Features,
    NoLongerNeeded,
    Other,
}

impl CancelReason {
    /// Wire string expected by the service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Performance => "performance",
            Self::Support => "support",
            Self::Features => "features",
            Self::NoLongerNeeded => "nolongerneeded",
            Self::Other => "other",
        }
    }
}

/// Parameters for provisioning a cascade VM.
#[derive(Debug, Clone)]
pub struct CreateVmParams {
    pub hostname: String,
    /// OS snapshot to provision from; see
    /// [`ServerClient::list_os_snapshots`].
    pub snapshot_id: String,
    /// Memory allocation in MB.
    pub ram: u32,
    /// Disk allocation in GB.
    pub disk: u32,
    /// Host node to place the VM on. The service picks one when omitted.
    pub node_id: Option<String>,
}

/// Resource changes for an existing cascade VM. Unset members are untouched.
#[derive(Debug, Clone, Default)]
pub struct EditVmParams {
    pub hostname: Option<String>,
    /// New memory allocation in MB.
    pub ram: Option<u32>,
    /// New disk allocation in GB.
    pub disk: Option<u32>,
}

/// Client for the `server` module.
pub struct ServerClient {
    inner: ModuleClient,
}

impl ServerClient {
    pub fn new(client: Client) -> Self {
        Self {
            inner: ModuleClient::new(client, "server"),
        }
    }

    // =========================================================================
    // Server Inventory
    // =========================================================================

    /// Lists servers on the account.
    pub async fn list_servers(&self) -> Result<Value> {
        self.inner.call(&ops::LIST_SERVERS, Args::new()).await
    }

    /// Lists servers available for purchase.
    pub async fn list_available_servers(&self) -> Result<Value> {
        self.inner.call(&ops::LIST_AVAILABLE_SERVERS, Args::new()).await
    }

    /// Gets the details of a server.
    pub async fn server_details(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::GET_SERVER_DETAILS, Args::new().set("server_id", server_id))
            .await
    }

    /// Lists the IPs allocated to a server.
    pub async fn server_ips(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::GET_SERVER_IPS, Args::new().set("server_id", server_id))
            .await
    }

    /// Gets bandwidth totals for a server.
    pub async fn server_bandwidth(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::GET_SERVER_BANDWIDTH, Args::new().set("server_id", server_id))
            .await
    }

    // =========================================================================
    // Reverse DNS
    // =========================================================================

    /// Lists the reverse DNS entries for a server.
    pub async fn rdns_list(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::GET_RDNS_LIST, Args::new().set("server_id", server_id))
            .await
    }

    /// Replaces reverse DNS entries, given a map of IP address to hostname.
    pub async fn update_rdns(&self, entries: &HashMap<String, String>) -> Result<Value> {
        if entries.is_empty() {
            return Err(Error::Validation(
                "updateRdns: at least one ip/hostname entry is required".to_owned(),
            ));
        }
        let data: Data = entries
            .iter()
            .map(|(ip, host)| (ip.clone(), Value::from(host.as_str())))
            .collect();
        self.inner.call_raw(&ops::UPDATE_RDNS, data).await
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Reboots a server.
    pub async fn reboot_server(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::REBOOT_SERVER, Args::new().set("server_id", server_id))
            .await
    }

    /// Lists the operating systems available for installation on a server.
    pub async fn os_list(&self, server_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::GET_OS_LIST, Args::new().set("server_id", server_id))
            .await
    }

    /// Reinstalls a server with the given operating system.
    pub async fn reinstall_server(&self, server_id: &str, os_id: &str) -> Result<Value> {
        self.inner
            .call(
                &ops::REINSTALL_SERVER,
                Args::new().set("server_id", server_id).set("os_id", os_id),
            )
            .await
    }

    /// Submits a cancellation request for one or more servers.
    pub async fn cancel_servers(
        &self,
        server_ids: &[&str],
        satisfied: bool,
        reason: CancelReason,
    ) -> Result<Value> {
        if server_ids.is_empty() || server_ids.iter().any(|id| id.is_empty()) {
            return Err(Error::Validation(
                "cancelServers: at least one non-empty server id is required".to_owned(),
            ));
        }
        self.inner
            .call(
                &ops::CANCEL_SERVERS,
                Args::new()
                    .set("server_ids", server_ids.join(","))
                    .set("satisfied", satisfied)
                    .set("reason", reason.as_str()),
            )
            .await
    }

    // =========================================================================
    // Cascade VMs
    // =========================================================================

    /// Gets CPU usage for a cascade VM.
    pub async fn vm_cpu_usage(&self, vm_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_CPU_USAGE, Args::new().set("vm_id", vm_id))
            .await
    }

    /// Gets the properties of a cascade host node.
    pub async fn node_details(&self, node_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_NODE_DETAILS, Args::new().set("node_id", node_id))
            .await
    }

    /// Lists the OS snapshots VMs can be provisioned from.
    pub async fn list_os_snapshots(&self) -> Result<Value> {
        self.inner.call(&ops::CASCADE_SNAPSHOT_LIST, Args::new()).await
    }

    /// Provisions a new cascade VM.
    pub async fn create_vm(&self, params: CreateVmParams) -> Result<Value> {
        self.inner
            .call(
                &ops::CASCADE_CREATE,
                Args::new()
                    .set("hostname", params.hostname)
                    .set("snapshot_id", params.snapshot_id)
                    .set("ram", params.ram)
                    .set("disk", params.disk)
                    .opt("node_id", params.node_id),
            )
            .await
    }

    /// Changes the resources of an existing cascade VM.
    pub async fn edit_vm(&self, vm_id: &str, params: EditVmParams) -> Result<Value> {
        self.inner
            .call(
                &ops::CASCADE_EDIT,
                Args::new()
                    .set("vm_id", vm_id)
                    .opt("hostname", params.hostname)
                    .opt("ram", params.ram)
                    .opt("disk", params.disk),
            )
            .await
    }

    /// Moves a cascade VM to another host node.
    pub async fn move_vm(&self, vm_id: &str, node_id: &str) -> Result<Value> {
        self.inner
            .call(
                &ops::CASCADE_MOVE,
                Args::new().set("vm_id", vm_id).set("node_id", node_id),
            )
            .await
    }

    /// Takes a snapshot of a cascade VM.
    pub async fn snapshot_vm(&self, vm_id: &str, name: Option<&str>) -> Result<Value> {
        self.inner
            .call(
                &ops::CASCADE_SNAPSHOT,
                Args::new().set("vm_id", vm_id).opt("name", name),
            )
            .await
    }

    /// Deletes a cascade VM.
    pub async fn delete_vm(&self, vm_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_DELETE, Args::new().set("vm_id", vm_id))
            .await
    }

    /// Starts a cascade VM.
    pub async fn start_vm(&self, vm_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_START, Args::new().set("vm_id", vm_id))
            .await
    }

    /// Shuts down a cascade VM.
    pub async fn shutdown_vm(&self, vm_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_SHUTDOWN, Args::new().set("vm_id", vm_id))
            .await
    }

    /// Reboots a cascade VM.
    pub async fn reboot_vm(&self, vm_id: &str) -> Result<Value> {
        self.inner
            .call(&ops::CASCADE_REBOOT, Args::new().set("vm_id", vm_id))
            .await
    }
}
