//! # Ledger Runtime
//!
//! Runs one contract invocation against a persistent local ledger file, or
//! prints the ledger's state digest.
//!
//! ```text
//! ledger-runtime invoke CreateDataRequest r1 "" 2024-01-01 "" alice alice x "" "" c1 "" false \
//!     --subject "CN=peer1.org1.example.com" --msp-id Org1MSP --tx-id tx1 --tx-timestamp 1700000000
//! ledger-runtime digest
//! ```
//!
//! Results go to stdout; failures print the error payload
//! `{"code":..,"message":..}` to stdout and exit with status 1.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use dx_01_ledger_store::{state_digest_hex, FileBackedLedger};
use ledger_runtime::{init_logging, ContractRouter, RuntimeConfig, DATA_REQUEST_CONTRACT};
use shared_types::{ClientIdentity, InvocationContext};

/// Data exchange ledger runtime
#[derive(Parser, Debug)]
#[command(name = "ledger-runtime")]
#[command(about = "Run data exchange contract invocations against a local ledger")]
struct Args {
    /// TOML config file (falls back to DX_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ledger snapshot file, overriding the config
    #[arg(long)]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Invoke one contract function
    Invoke {
        /// Function name, optionally qualified as `contract:function`
        function: String,

        /// Positional string arguments
        args: Vec<String>,

        /// Contract name
        #[arg(long, default_value = DATA_REQUEST_CONTRACT)]
        contract: String,

        /// Transaction id
        #[arg(long, default_value = "local")]
        tx_id: String,

        /// Transaction timestamp in seconds
        #[arg(long, default_value_t = 0)]
        tx_timestamp: u64,

        /// Caller MSP id
        #[arg(long, default_value = "")]
        msp_id: String,

        /// Caller certificate subject
        #[arg(long, default_value = "")]
        subject: String,
    },

    /// Print the SHA3-256 digest of the ledger state
    Digest,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config =
        RuntimeConfig::from_env(args.config.as_deref()).context("Failed to load config")?;
    if let Some(state_file) = args.state_file {
        config.ledger.state_file = state_file;
    }
    init_logging(&config.logging.level).context("Failed to initialize logging")?;

    let mut ledger = FileBackedLedger::open(&config.ledger.state_file).with_context(|| {
        format!(
            "Failed to open ledger {}",
            config.ledger.state_file.display()
        )
    })?;

    match args.command {
        Command::Invoke {
            function,
            args,
            contract,
            tx_id,
            tx_timestamp,
            msp_id,
            subject,
        } => {
            let router = ContractRouter::from_config(&config)?;
            let ctx = InvocationContext::new(
                tx_id,
                tx_timestamp,
                ClientIdentity::new(msp_id, subject),
            );
            match router.invoke(&mut ledger, &ctx, &contract, &function, &args) {
                Ok(output) => {
                    info!(tx_id = %ctx.tx_id, function = %function, "Invocation committed");
                    println!("{output}");
                }
                Err(err) => {
                    println!("{}", err.to_json());
                    std::process::exit(1);
                }
            }
        }
        Command::Digest => {
            let digest = state_digest_hex(&ledger)?;
            info!(keys = ledger.len(), "Computed state digest");
            println!("{digest}");
        }
    }

    Ok(())
}
