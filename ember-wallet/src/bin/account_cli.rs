use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ember_common::address::validate_address;
use ember_wallet::{
    accounts::{find_hardware_account_info, hardware_accounts},
    config::{load_accounts, WalletConfig},
    errors::WalletError,
    logging,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(author = "Ember", version = "0.1", about = "Address checks and hardware account lookup")]
struct Cli {
    /// JSON config supplying defaults
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an address is 0x-prefixed hex of the given byte length
    Validate {
        #[arg(short = 'a', long)]
        address: String,

        /// Byte length, defaults to the configured length
        #[arg(short = 'l', long)]
        length: Option<usize>,
    },
    /// Print the first hardware account with the given address
    FindHardware {
        /// JSON array of accounts, defaults to the configured path
        #[arg(short = 'f', long)]
        accounts: Option<PathBuf>,

        #[arg(short = 'a', long)]
        address: String,
    },
    /// List hardware accounts in file order
    ListHardware {
        #[arg(short = 'f', long)]
        accounts: Option<PathBuf>,
    },
}

fn accounts_path(flag: Option<PathBuf>, config: &WalletConfig) -> Result<PathBuf, WalletError> {
    flag.or_else(|| config.accounts_path.clone())
        .ok_or_else(|| "no accounts file given (use --accounts or set accounts_path)".into())
}

fn run(cli: Cli) -> Result<bool, WalletError> {
    let config = match &cli.config {
        Some(path) => WalletConfig::load_from_file(path)?,
        None => WalletConfig::default(),
    };

    match cli.command {
        Commands::Validate { address, length } => {
            let length = length.unwrap_or(config.address_length);
            debug!(%address, length, "validating address");
            match validate_address(&address, length) {
                Ok(()) => {
                    println!("valid");
                    Ok(true)
                }
                Err(e) => {
                    println!("invalid: {}", e);
                    Ok(false)
                }
            }
        }

        Commands::FindHardware { accounts, address } => {
            let path = accounts_path(accounts, &config)?;
            let accounts = load_accounts(&path)?;
            match find_hardware_account_info(&accounts, &address) {
                Some(account) => {
                    println!("{}", serde_json::to_string_pretty(account)?);
                    Ok(true)
                }
                None => {
                    println!("not found");
                    Ok(false)
                }
            }
        }

        Commands::ListHardware { accounts } => {
            let path = accounts_path(accounts, &config)?;
            let accounts = load_accounts(&path)?;
            let mut count = 0;
            for account in hardware_accounts(&accounts) {
                println!("{}\t{}", account.address, account.name);
                count += 1;
            }
            info!(count, "listed hardware accounts");
            Ok(true)
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(2)
        }
    }
}
