use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use openbazaar_api::{ClientBuilder, ContractListing, OpenBazaarClient, ProfileUpdate, PurchaseOrder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "obctl",
    version,
    about = "Command-line client for a local OpenBazaar node"
)]
struct Cli {
    #[command(flatten)]
    node: NodeArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct NodeArgs {
    /// Node API username
    #[arg(short, long, env = "OB_USERNAME")]
    username: String,
    /// Node API password
    #[arg(short, long, env = "OB_PASSWORD", hide_env_values = true)]
    password: String,
    /// URL scheme (overridden by --tls)
    #[arg(long, env = "OB_SCHEME", default_value = openbazaar_api::client::DEFAULT_SCHEME)]
    scheme: String,
    /// Node host
    #[arg(long, env = "OB_HOST", default_value = openbazaar_api::client::DEFAULT_HOST)]
    host: String,
    /// Node REST API port
    #[arg(long, env = "OB_PORT", default_value_t = openbazaar_api::client::DEFAULT_PORT)]
    port: u16,
    /// Use https
    #[arg(long, env = "OB_TLS")]
    tls: bool,
    /// PEM root certificate to trust for the node (implies --tls)
    #[arg(long, env = "OB_CERT", value_name = "PATH")]
    cert: Option<PathBuf>,
    /// Accept self-signed node certificates (implies --tls)
    #[arg(long, env = "OB_INSECURE")]
    insecure: bool,
    /// Request timeout in seconds (0 = none)
    #[arg(long, env = "OB_TIMEOUT", default_value = "30")]
    timeout: u64,
    /// User-Agent header sent to the node
    #[arg(long, env = "OB_USER_AGENT")]
    user_agent: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the node's profile, or another node's
    Profile {
        /// Target node GUID
        guid: Option<String>,
    },
    /// List listings
    Listings {
        /// Target node GUID
        guid: Option<String>,
    },
    /// List followers
    Followers {
        /// Target node GUID
        guid: Option<String>,
    },
    /// List followed nodes
    Following {
        /// Target node GUID
        guid: Option<String>,
    },
    /// Follow a node
    Follow {
        /// Node GUID
        guid: String,
    },
    /// Unfollow a node
    Unfollow {
        /// Node GUID
        guid: String,
    },
    /// Show node settings
    Settings,
    /// Show notifications
    Notifications {
        /// Max notifications
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },
    /// List chat conversations
    Conversations,
    /// Show chat messages with a node
    Chat {
        /// Peer GUID
        guid: String,
        /// Max messages
        #[arg(short, long)]
        limit: Option<u32>,
        /// Message id to page from
        #[arg(short, long)]
        start: Option<u64>,
    },
    /// Send a message (max 140 characters) to all followers
    Broadcast {
        message: String,
    },
    /// List sales
    Sales,
    /// List purchases
    Purchases,
    /// Publish a listing described by a JSON file
    CreateListing {
        /// Listing JSON (fields of `ContractListing`)
        file: PathBuf,
    },
    /// Update the profile from a JSON file
    UpdateProfile {
        /// Profile JSON (fields of `ProfileUpdate`)
        file: PathBuf,
    },
    /// Buy a listing using an order JSON file
    Purchase {
        /// Order JSON (fields of `PurchaseOrder`)
        file: PathBuf,
    },
    /// Stop the node
    Shutdown,
}

impl NodeArgs {
    fn connect(&self) -> Result<OpenBazaarClient> {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        let mut builder = ClientBuilder::new(&self.username, &self.password)
            .scheme(&self.scheme)
            .host(&self.host)
            .port(self.port)
            .tls(self.tls || self.insecure)
            .accept_invalid_certs(self.insecure)
            .timeout(timeout);
        if let Some(path) = &self.cert {
            let pem = fs::read(path)
                .with_context(|| format!("failed to read certificate {}", path.display()))?;
            builder = builder.root_certificate(pem);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        builder
            .connect()
            .with_context(|| format!("failed to log in to {}:{}", self.host, self.port))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = cli.node.connect()?;
    let value = run(&client, cli.command)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run(client: &OpenBazaarClient, command: Command) -> Result<Value> {
    let value = match command {
        Command::Profile { guid } => client.get_profile(guid.as_deref())?,
        Command::Listings { guid } => client.get_listings(guid.as_deref())?,
        Command::Followers { guid } => client.get_followers(guid.as_deref())?,
        Command::Following { guid } => client.get_following(guid.as_deref())?,
        Command::Follow { guid } => client.follow(&guid)?,
        Command::Unfollow { guid } => client.unfollow(&guid)?,
        Command::Settings => client.get_settings()?,
        Command::Notifications { limit } => client.get_notifications(limit)?,
        Command::Conversations => client.get_chat_conversations()?,
        Command::Chat { guid, limit, start } => client.get_chat_messages(&guid, limit, start)?,
        Command::Broadcast { message } => client.broadcast(&message)?,
        Command::Sales => client.get_sales()?,
        Command::Purchases => client.get_purchases()?,
        Command::CreateListing { file } => client.contracts(&read_json::<ContractListing>(&file)?)?,
        Command::UpdateProfile { file } => client.profile(&read_json::<ProfileUpdate>(&file)?)?,
        Command::Purchase { file } => client.purchase_contract(&read_json::<PurchaseOrder>(&file)?)?,
        Command::Shutdown => client.shutdown()?,
    };
    Ok(value)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid JSON in {}", path.display()))
}
