use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leap::api::{Client, Config, Credentials, DEFAULT_ENDPOINT_URL};
use leap::sdk::{
    AccountClient, CancelReason, CreateVmParams, EditVmParams, ServerClient,
};

#[derive(Debug, Parser)]
#[command(
    name = "leap-cli",
    version,
    about = "CLI for the SingleHop LEAP hosting API"
)]
struct Cli {
    #[command(flatten)]
    auth: AuthArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Args)]
struct AuthArgs {
    /// LEAP API key.
    #[arg(long, env = "LEAP_API_KEY")]
    api_key: String,

    /// Client ID the key belongs to.
    #[arg(long, env = "LEAP_CLIENT_ID")]
    client_id: String,

    /// Account password.
    #[arg(long, env = "LEAP_PASSWORD")]
    password: String,

    /// API endpoint URL.
    #[arg(long, env = "LEAP_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    endpoint: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Account and Tandem user operations.
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Server and cascade VM operations.
    Server {
        #[command(subcommand)]
        command: ServerCommands,
    },
}

#[derive(Debug, Subcommand)]
enum AccountCommands {
    /// Show account details.
    Details,
    /// List authorized contacts.
    Contacts,
    /// List Tandem users.
    TandemList,
    /// Add a Tandem user.
    TandemAdd {
        /// First and last name of the user.
        #[arg(long)]
        name: String,
        /// Email address of the user.
        #[arg(long)]
        email: String,
        /// Password for the user.
        #[arg(long)]
        password: String,
    },
    /// Delete a Tandem user.
    TandemDelete {
        #[arg(long)]
        user_id: String,
    },
    /// Grant a Tandem user permission on a server.
    TandemGrant {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        server_id: String,
    },
    /// Revoke a Tandem user's permission on a server.
    TandemRevoke {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        server_id: String,
    },
}

#[derive(Debug, Subcommand)]
enum ServerCommands {
    /// List servers on the account.
    List,
    /// List servers available for purchase.
    Available,
    /// Show the details of a server.
    Details {
        #[arg(long)]
        server_id: String,
    },
    /// List the IPs allocated to a server.
    Ips {
        #[arg(long)]
        server_id: String,
    },
    /// Show bandwidth totals for a server.
    Bandwidth {
        #[arg(long)]
        server_id: String,
    },
    /// List reverse DNS entries for a server.
    RdnsList {
        #[arg(long)]
        server_id: String,
    },
    /// Replace reverse DNS entries.
    RdnsUpdate {
        /// Entry as ip=hostname (repeatable).
        #[arg(long = "entry", value_parser = parse_entry, required = true)]
        entries: Vec<(String, String)>,
    },
    /// Reboot a server.
    Reboot {
        #[arg(long)]
        server_id: String,
    },
    /// List operating systems available for installation.
    OsList {
        #[arg(long)]
        server_id: String,
    },
    /// Reinstall a server with the given OS.
    Reinstall {
        #[arg(long)]
        server_id: String,
        #[arg(long)]
        os_id: String,
    },
    /// Submit a cancellation request.
    Cancel {
        /// Server to cancel (repeatable).
        #[arg(long = "server-id", required = true)]
        server_ids: Vec<String>,
        /// Whether you were satisfied with the service.
        #[arg(long)]
        satisfied: bool,
        /// Reason for cancelling.
        #[arg(long, value_enum)]
        reason: ReasonArg,
    },
    /// Show CPU usage for a cascade VM.
    VmCpuUsage {
        #[arg(long)]
        vm_id: String,
    },
    /// Show the properties of a cascade host node.
    NodeDetails {
        #[arg(long)]
        node_id: String,
    },
    /// List the OS snapshots VMs can be provisioned from.
    SnapshotList,
    /// Provision a new cascade VM.
    VmCreate {
        #[arg(long)]
        hostname: String,
        #[arg(long)]
        snapshot_id: String,
        /// Memory allocation in MB.
        #[arg(long)]
        ram: u32,
        /// Disk allocation in GB.
        #[arg(long)]
        disk: u32,
        /// Host node to place the VM on.
        #[arg(long)]
        node_id: Option<String>,
    },
    /// Change the resources of a cascade VM.
    VmEdit {
        #[arg(long)]
        vm_id: String,
        #[arg(long)]
        hostname: Option<String>,
        /// New memory allocation in MB.
        #[arg(long)]
        ram: Option<u32>,
        /// New disk allocation in GB.
        #[arg(long)]
        disk: Option<u32>,
    },
    /// Move a cascade VM to another host node.
    VmMove {
        #[arg(long)]
        vm_id: String,
        #[arg(long)]
        node_id: String,
    },
    /// Take a snapshot of a cascade VM.
    VmSnapshot {
        #[arg(long)]
        vm_id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a cascade VM.
    VmDelete {
        #[arg(long)]
        vm_id: String,
    },
    /// Start a cascade VM.
    VmStart {
        #[arg(long)]
        vm_id: String,
    },
    /// Shut down a cascade VM.
    VmShutdown {
        #[arg(long)]
        vm_id: String,
    },
    /// Reboot a cascade VM.
    VmReboot {
        #[arg(long)]
        vm_id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReasonArg {
    Cost,
    Performance,
    Support,
    Features,
    NoLongerNeeded,
    Other,
}

impl From<ReasonArg> for CancelReason {
    fn from(reason: ReasonArg) -> Self {
        match reason {
            ReasonArg::Cost => Self::Cost,
            ReasonArg::Performance => Self::Performance,
            ReasonArg::Support => Self::Support,
            ReasonArg::Features => Self::Features,
            ReasonArg::NoLongerNeeded => Self::NoLongerNeeded,
            ReasonArg::Other => Self::Other,
        }
    }
}

fn parse_entry(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((ip, host)) if !ip.is_empty() && !host.is_empty() => {
            Ok((ip.to_owned(), host.to_owned()))
        }
        _ => Err(format!("expected ip=hostname, got `{raw}`")),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::new(Credentials::new(
        cli.auth.api_key,
        cli.auth.client_id,
        cli.auth.password,
    ))
    .with_endpoint(cli.auth.endpoint);
    let client = Client::new(config);

    let result = match cli.command {
        Commands::Account { command } => {
            run_account(AccountClient::new(client), command).await?
        }
        Commands::Server { command } => run_server(ServerClient::new(client), command).await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_account(
    account: AccountClient,
    command: AccountCommands,
) -> leap::api::Result<Value> {
    match command {
        AccountCommands::Details => account.account_details().await,
        AccountCommands::Contacts => account.authorized_contacts().await,
        AccountCommands::TandemList => account.list_tandem_users().await,
        AccountCommands::TandemAdd {
            name,
            email,
            password,
        } => account.add_tandem_user(&name, &email, &password).await,
        AccountCommands::TandemDelete { user_id } => account.delete_tandem_user(&user_id).await,
        AccountCommands::TandemGrant { user_id, server_id } => {
            account.grant_permission(&user_id, &server_id).await
        }
        AccountCommands::TandemRevoke { user_id, server_id } => {
            account.revoke_permission(&user_id, &server_id).await
        }
    }
}

async fn run_server(servers: ServerClient, command: ServerCommands) -> leap::api::Result<Value> {
    match command {
        ServerCommands::List => servers.list_servers().await,
        ServerCommands::Available => servers.list_available_servers().await,
        ServerCommands::Details { server_id } => servers.server_details(&server_id).await,
        ServerCommands::Ips { server_id } => servers.server_ips(&server_id).await,
        ServerCommands::Bandwidth { server_id } => servers.server_bandwidth(&server_id).await,
        ServerCommands::RdnsList { server_id } => servers.rdns_list(&server_id).await,
        ServerCommands::RdnsUpdate { entries } => {
            servers.update_rdns(&entries.into_iter().collect()).await
        }
        ServerCommands::Reboot { server_id } => servers.reboot_server(&server_id).await,
        ServerCommands::OsList { server_id } => servers.os_list(&server_id).await,
        ServerCommands::Reinstall { server_id, os_id } => {
            servers.reinstall_server(&server_id, &os_id).await
        }
        ServerCommands::Cancel {
            server_ids,
            satisfied,
            reason,
        } => {
            let ids: Vec<&str> = server_ids.iter().map(String::as_str).collect();
            servers.cancel_servers(&ids, satisfied, reason.into()).await
        }
        ServerCommands::VmCpuUsage { vm_id } => servers.vm_cpu_usage(&vm_id).await,
        ServerCommands::NodeDetails { node_id } => servers.node_details(&node_id).await,
        ServerCommands::SnapshotList => servers.list_os_snapshots().await,
        ServerCommands::VmCreate {
            hostname,
            snapshot_id,
            ram,
            disk,
            node_id,
        } => {
            servers
                .create_vm(CreateVmParams {
                    hostname,
                    snapshot_id,
                    ram,
                    disk,
                    node_id,
                })
                .await
        }
        ServerCommands::VmEdit {
            vm_id,
            hostname,
            ram,
            disk,
        } => {
            servers
                .edit_vm(&vm_id, EditVmParams { hostname, ram, disk })
                .await
        }
        ServerCommands::VmMove { vm_id, node_id } => servers.move_vm(&vm_id, &node_id).await,
        ServerCommands::VmSnapshot { vm_id, name } => {
            servers.snapshot_vm(&vm_id, name.as_deref()).await
        }
        ServerCommands::VmDelete { vm_id } => servers.delete_vm(&vm_id).await,
        ServerCommands::VmStart { vm_id } => servers.start_vm(&vm_id).await,
        ServerCommands::VmShutdown { vm_id } => servers.shutdown_vm(&vm_id).await,
        ServerCommands::VmReboot { vm_id } => servers.reboot_vm(&vm_id).await,
    }
}
