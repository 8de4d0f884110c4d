use {
    crate::{config::Config, output::println_display, Error},
    clap::ArgMatches,
    counter::state::Counter,
    solana_clap_v3_utils::{
        input_parsers::signer::SignerSource,
        keypair::{pubkey_from_path, signer_from_source_with_config, SignerFromPathConfig},
    },
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_pubkey::Pubkey,
    solana_remote_wallet::remote_wallet::RemoteWalletManager,
    solana_signature::Signature,
    solana_signer::Signer,
    solana_transaction::Transaction,
    std::{rc::Rc, sync::Arc},
};

pub fn parse_pubkey(value: &str) -> Result<Pubkey, String> {
    parse_address(value, "pubkey")
}

fn parse_address(path: &str, name: &str) -> Result<Pubkey, String> {
    let mut wallet_manager = None;
    pubkey_from_path(&ArgMatches::default(), path, name, &mut wallet_manager)
        .map_err(|_| format!("Failed to load pubkey {} at {}", name, path))
}

pub fn parse_token_program(value: &str) -> Result<Pubkey, String> {
    let pubkey = parse_pubkey(value)?;
    if pubkey == spl_token::id() || pubkey == spl_token_2022::id() {
        Ok(pubkey)
    } else {
        Err("Invalid token program. Must be spl-token or spl-token-2022".to_string())
    }
}

/// Resolves an optional signer source, falling back to the provided default
/// (usually the fee payer).
pub fn resolve_signer(
    matches: &ArgMatches,
    source: Option<&SignerSource>,
    name: &str,
    default: Arc<dyn Signer>,
    wallet_manager: &mut Option<Rc<RemoteWalletManager>>,
) -> Result<Arc<dyn Signer>, Error> {
    match source {
        Some(source) => {
            let signer_config = SignerFromPathConfig {
                allow_null_signer: false,
            };
            let signer =
                signer_from_source_with_config(matches, source, name, wallet_manager, &signer_config)
                    .map_err(|e| -> Error { e.to_string().into() })?;
            Ok(Arc::from(signer))
        }
        None => Ok(default),
    }
}

/// Fetches and validates a counter account.
pub async fn fetch_counter(
    rpc_client: &RpcClient,
    counter_address: &Pubkey,
) -> Result<Counter, Error> {
    let account = rpc_client.get_account(counter_address).await?;
    if account.owner != counter::id() {
        return Err(format!("Account {} is not a counter account", counter_address).into());
    }
    bytemuck::try_from_bytes::<Counter>(&account.data)
        .map(|counter| *counter)
        .map_err(|_| format!("Account {} holds malformed counter state", counter_address).into())
}

pub async fn process_transaction(
    config: &Config,
    transaction: Transaction,
) -> Result<Option<Signature>, Error> {
    if config.dry_run {
        let simulation_data = config.rpc_client.simulate_transaction(&transaction).await?;

        if config.verbose() {
            if let Some(logs) = simulation_data.value.logs {
                for log in logs {
                    println!("    {}", log);
                }
            }

            println!(
                "\nSimulation succeeded, consumed {} compute units",
                simulation_data.value.units_consumed.unwrap()
            );
        } else {
            println_display(config, "Simulation succeeded".to_string());
        }

        Ok(None)
    } else {
        Ok(Some(
            config
                .rpc_client
                .send_and_confirm_transaction_with_spinner(&transaction)
                .await?,
        ))
    }
}
