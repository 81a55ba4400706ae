use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "pdabank", version, about = "Create, list and fund banks of the solanapdas program")]
pub struct Args {
    /// Config file, created with defaults when missing
    #[arg(short = 'c', long, default_value = "pdabank.json")]
    pub config: String,

    /// RPC endpoint of the cluster
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Wallet keypair file
    #[arg(short = 'k', long)]
    pub keypair: Option<String>,

    /// Program IDL to use instead of the bundled one
    #[arg(long)]
    pub idl: Option<String>,

    /// Program address overriding the IDL metadata
    #[arg(long)]
    pub program_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the wallet's bank
    Create,
    /// List every bank owned by the program
    List,
    /// Deposit 0.1 SOL into a bank
    Deposit {
        /// Bank address
        address: String,
    },
    /// Withdraw 0.1 SOL from a bank
    Withdraw {
        /// Bank address
        address: String,
    },
    /// Print the wallet's bank address
    Address,
    /// Interactive view (default)
    Interactive,
}

impl Args {
    /// Applies command-line overrides on top of the file config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.rpc_url = url.clone();
        }
        if let Some(keypair) = &self.keypair {
            config.keypair_path = keypair.clone();
        }
        if let Some(idl) = &self.idl {
            config.idl_path = Some(idl.clone());
        }
        if let Some(program_id) = &self.program_id {
            config.program_id = Some(program_id.clone());
        }
    }
}
