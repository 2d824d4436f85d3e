use std::process::exit;

use clap::{Args, Parser, Subcommand};
use log::error;

use bzn_client::{build_create, build_delete, build_read, build_update};
use bzn_client::{PingClient, Result, WsConnection};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 49152;
const DEFAULT_PING_COUNT: u64 = 20;

#[derive(Parser)]
#[command(name = "bzn-client", version, about = "A bzn key-value protocol client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by every CRUD subcommand.
#[derive(Args)]
struct CrudArgs {
    /// Database scope the command applies to
    #[arg(long, value_name = "DB-UUID")]
    uuid: String,

    /// Caller-assigned correlation number
    #[arg(long, default_value_t = 0, value_name = "N")]
    request_id: u64,

    /// Send the request over a websocket connection and print the reply
    #[arg(long)]
    send: bool,

    /// Daemon host, used with --send
    #[arg(long, default_value = DEFAULT_HOST, value_name = "HOST")]
    host: String,

    /// Daemon port, used with --send
    #[arg(long, default_value_t = DEFAULT_PORT, value_name = "PORT")]
    port: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a create request for a key and value
    Create {
        /// The key
        key: String,
        /// The value
        value: String,
        #[command(flatten)]
        crud: CrudArgs,
    },
    /// Build a read request for a key
    Read {
        /// The key
        key: String,
        #[command(flatten)]
        crud: CrudArgs,
    },
    /// Build an update request for a key and value
    Update {
        /// The key
        key: String,
        /// The value
        value: String,
        #[command(flatten)]
        crud: CrudArgs,
    },
    /// Build a delete request for a key
    Delete {
        /// The key
        key: String,
        #[command(flatten)]
        crud: CrudArgs,
    },
    /// Send sequentially numbered ping messages and print the replies
    Ping {
        /// Daemon host
        #[arg(long, default_value = DEFAULT_HOST, value_name = "HOST")]
        host: String,

        /// Daemon port
        #[arg(long, default_value_t = DEFAULT_PORT, value_name = "PORT")]
        port: u16,

        /// Number of ping messages to send
        #[arg(long, default_value_t = DEFAULT_PING_COUNT, value_name = "N")]
        count: u64,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create { key, value, crud } => {
            let request = build_create(crud.request_id, &crud.uuid, &key, &value)?;
            dispatch(request, &crud)
        }
        Commands::Read { key, crud } => {
            let request = build_read(crud.request_id, &crud.uuid, &key)?;
            dispatch(request, &crud)
        }
        Commands::Update { key, value, crud } => {
            let request = build_update(crud.request_id, &crud.uuid, &key, &value)?;
            dispatch(request, &crud)
        }
        Commands::Delete { key, crud } => {
            let request = build_delete(crud.request_id, &crud.uuid, &key)?;
            dispatch(request, &crud)
        }
        Commands::Ping { host, port, count } => {
            for reply in PingClient::run(&host, port, count)? {
                println!("{}", reply);
            }
            Ok(())
        }
    }
}

/// Prints the serialized request and, with `--send`, round-trips it over a
/// fresh websocket connection and prints the reply.
fn dispatch(request: String, crud: &CrudArgs) -> Result<()> {
    println!("{}", request);
    if crud.send {
        let mut conn = WsConnection::connect(&crud.host, crud.port)?;
        conn.send(&request)?;
        println!("{}", conn.recv_text()?);
        conn.close()?;
    }
    Ok(())
}
