use std::sync::Arc;

use clap::Parser;
use pdabank_bank::{
    cli::{Args, Command},
    config::ensure_config,
    logging,
    program::RpcBankProgram,
    view::{session, Action, BankView},
};
use pdabank_common::address::parse_address;
use pdabank_wallet::KeypairWallet;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (mut config, created) = ensure_config(&args.config)?;
    args.apply(&mut config);

    let _guard = logging::init(config.log_file.as_deref());
    if created {
        info!("Config not found, wrote defaults to {}", args.config);
    }
    info!("RPC endpoint: {}", config.rpc_url);

    let wallet = match KeypairWallet::from_file(&config.keypair_path) {
        Ok(wallet) => Arc::new(wallet),
        Err(e) => {
            error!("Failed to load wallet: {}", e);
            return Err(e.into());
        }
    };
    let program = Arc::new(RpcBankProgram::from_config(&config, wallet)?);
    let view = BankView::new(program);

    // One-shot commands wait for their action; only the interactive view fires and forgets.
    match args.command.unwrap_or(Command::Interactive) {
        Command::Create => view.trigger(Action::Create).await?,
        Command::List => {
            view.trigger(Action::Refresh).await?;
            print!("{}", view.render());
        }
        Command::Deposit { address } => {
            view.trigger(Action::Deposit(parse_address(&address)?)).await?
        }
        Command::Withdraw { address } => {
            view.trigger(Action::Withdraw(parse_address(&address)?)).await?
        }
        Command::Address => println!("{}", view.bank_address().address),
        Command::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            session::run(view, stdin, std::io::stdout()).await?;
        }
    }

    Ok(())
}
